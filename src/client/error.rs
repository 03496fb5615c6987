//! Entry client error types

use thiserror::Error;

/// Errors from talking to the entry-storage API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// The request never got a response
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// The request could not be built
    #[error("Request build error: {0}")]
    Request(String),
}

impl EntryError {
    /// HTTP status, when the API answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            EntryError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for EntryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            EntryError::Parse(err.to_string())
        } else if err.is_builder() {
            EntryError::Request(err.to_string())
        } else {
            EntryError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for EntryError {
    fn from(err: serde_json::Error) -> Self {
        EntryError::Parse(err.to_string())
    }
}

/// Result type for entry operations
pub type EntryResult<T> = Result<T, EntryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EntryError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error 500: boom");
        assert_eq!(err.status(), Some(500));
        assert_eq!(EntryError::Network("refused".to_string()).status(), None);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: EntryError = json_err.into();
        assert!(matches!(err, EntryError::Parse(_)));
    }
}
