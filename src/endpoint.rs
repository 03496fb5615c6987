//! API endpoint resolution
//!
//! Where the entry-storage API lives. The browser build resolves this once
//! from the page location; the CLI takes it from configuration. Either way
//! the result is injected into the clients instead of being recomputed.

use serde::{Deserialize, Serialize};

/// Path prefix under which the backend serves the web app itself
pub const APP_PATH_PREFIX: &str = "/app";

/// Hostname that marks a local development page
pub const LOCAL_HOSTNAME: &str = "localhost";

/// Backend used during local development
pub const LOCAL_API_URL: &str = "http://localhost:8000";

/// Hosted backend
pub const PRODUCTION_API_URL: &str = "https://metodo-api-production.up.railway.app";

/// The parts of the page location that decide the endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLocation<'a> {
    pub pathname: &'a str,
    pub hostname: &'a str,
}

/// Base of every API request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiEndpoint {
    /// Relative URLs against the page's own origin
    SameOrigin,
    /// The local development backend
    #[default]
    Local,
    /// The hosted backend
    Production,
    /// Any other base URL
    Custom(String),
}

impl ApiEndpoint {
    /// Resolve from where the page was loaded.
    ///
    /// Served under `/app` means the backend is the same origin; a page on
    /// `localhost` talks to the local backend; anything else goes to
    /// production.
    pub fn resolve(location: PageLocation<'_>) -> Self {
        if location.pathname.starts_with(APP_PATH_PREFIX) {
            ApiEndpoint::SameOrigin
        } else if location.hostname == LOCAL_HOSTNAME {
            ApiEndpoint::Local
        } else {
            ApiEndpoint::Production
        }
    }

    /// Parse a configured value: `same_origin`, `local`, `production`, or a URL
    pub fn from_setting(value: &str) -> Self {
        match value.trim() {
            "" | "same_origin" => ApiEndpoint::SameOrigin,
            "local" => ApiEndpoint::Local,
            "production" => ApiEndpoint::Production,
            url => ApiEndpoint::Custom(url.trim_end_matches('/').to_string()),
        }
    }

    /// Base URL without a trailing slash; empty for same-origin
    pub fn base_url(&self) -> &str {
        match self {
            ApiEndpoint::SameOrigin => "",
            ApiEndpoint::Local => LOCAL_API_URL,
            ApiEndpoint::Production => PRODUCTION_API_URL,
            ApiEndpoint::Custom(url) => url,
        }
    }

    /// Full URL for an API path such as `/entries`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }
}

impl std::fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiEndpoint::SameOrigin => write!(f, "same origin"),
            other => write!(f, "{}", other.base_url()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(pathname: &str, hostname: &str) -> ApiEndpoint {
        ApiEndpoint::resolve(PageLocation { pathname, hostname })
    }

    #[test]
    fn test_app_prefix_wins() {
        assert_eq!(at("/app", "localhost"), ApiEndpoint::SameOrigin);
        assert_eq!(at("/app/entries", "metodo.example"), ApiEndpoint::SameOrigin);
        assert_eq!(at("/app", "localhost").url("/entries"), "/entries");
    }

    #[test]
    fn test_localhost_uses_local_backend() {
        let endpoint = at("/index.html", "localhost");
        assert_eq!(endpoint, ApiEndpoint::Local);
        assert_eq!(endpoint.url("/entries"), "http://localhost:8000/entries");
    }

    #[test]
    fn test_everything_else_is_production() {
        assert_eq!(at("/", "127.0.0.1"), ApiEndpoint::Production);
        assert_eq!(at("/", "metodo.example"), ApiEndpoint::Production);
        assert_eq!(
            at("/", "metodo.example").base_url(),
            "https://metodo-api-production.up.railway.app"
        );
    }

    #[test]
    fn test_prefix_match_is_plain_string_prefix() {
        assert_eq!(at("/application", "metodo.example"), ApiEndpoint::SameOrigin);
    }

    #[test]
    fn test_from_setting() {
        assert_eq!(ApiEndpoint::from_setting("local"), ApiEndpoint::Local);
        assert_eq!(ApiEndpoint::from_setting("production"), ApiEndpoint::Production);
        assert_eq!(ApiEndpoint::from_setting(""), ApiEndpoint::SameOrigin);
        assert_eq!(
            ApiEndpoint::from_setting("http://10.0.0.2:8000/"),
            ApiEndpoint::Custom("http://10.0.0.2:8000".to_string())
        );
    }
}
