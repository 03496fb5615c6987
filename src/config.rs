//! Configuration System
//!
//! Loads CLI settings from a TOML file with environment variable overrides.

use crate::endpoint::ApiEndpoint;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Entry-storage API settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// `local`, `production`, `same_origin`, or a base URL
    #[serde(default)]
    pub url: String,

    /// Unset means requests never time out
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ApiConfig {
    /// An unset URL means the local development server
    pub fn endpoint(&self) -> ApiEndpoint {
        if self.url.trim().is_empty() {
            ApiEndpoint::Local
        } else {
            ApiEndpoint::from_setting(&self.url)
        }
    }

    /// A command-line URL wins over the configured one unless it is blank
    pub fn endpoint_with_override(&self, flag: Option<&str>) -> ApiEndpoint {
        match flag.map(str::trim) {
            Some(url) if !url.is_empty() => ApiEndpoint::from_setting(url),
            _ => self.endpoint(),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Candidate config files, in lookup order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("metodo").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        for path in Self::default_paths() {
            if path.exists() {
                match Self::load_with_env(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `METODO_*` overrides from any variable source
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("METODO_API_URL") {
            self.api.url = url;
        }
        if let Some(timeout) = var("METODO_API_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse() {
                self.api.request_timeout_secs = Some(secs);
            }
        }
        if let Some(level) = var("METODO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("METODO_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Método Configuration
#
# Environment variables override these settings:
# - METODO_API_URL
# - METODO_API_TIMEOUT_SECS
# - METODO_LOG_LEVEL
# - METODO_LOG_FORMAT

[api]
# Entry-storage API: "local", "production", or a base URL
url = "local"

# Request timeout in seconds (unset: no timeout)
# request_timeout_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.endpoint(), ApiEndpoint::Local);
        assert_eq!(config.api.request_timeout(), None);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[api]
url = "https://entries.example.com/"
request_timeout_secs = 10

[logging]
format = "json"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(
            config.api.endpoint(),
            ApiEndpoint::Custom("https://entries.example.com".to_string())
        );
        assert_eq!(config.api.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.api.endpoint(), ApiEndpoint::Local);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api\nurl = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("METODO_API_URL", "production"),
            ("METODO_API_TIMEOUT_SECS", "5"),
            ("METODO_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.api.endpoint(), ApiEndpoint::Production);
        assert_eq!(config.api.request_timeout_secs, Some(5));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_bad_timeout_override_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "METODO_API_TIMEOUT_SECS").then(|| "soon".to_string()));
        assert_eq!(config.api.request_timeout_secs, None);
    }

    #[test]
    fn test_blank_url_flag_falls_back_to_config() {
        let config = ApiConfig {
            url: "production".to_string(),
            request_timeout_secs: None,
        };
        assert_eq!(config.endpoint_with_override(None), ApiEndpoint::Production);
        assert_eq!(config.endpoint_with_override(Some("")), ApiEndpoint::Production);
        assert_eq!(config.endpoint_with_override(Some("  ")), ApiEndpoint::Production);
        assert_eq!(config.endpoint_with_override(Some("local")), ApiEndpoint::Local);

        let unset = ApiConfig::default();
        assert_eq!(unset.endpoint_with_override(Some("")), ApiEndpoint::Local);
    }
}
