//! Error types for the search client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Search Error Enum ==
/// Unified error type for the search client.
///
/// Search operations never surface these to callers; they are logged and
/// replaced by an empty response. Only construction returns them directly.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Network-level failure (connection refused, DNS, broken body stream)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Request exceeded the configured timeout
    #[error("Request timeout after {0}ms")]
    Timeout(u64),

    /// Response body could not be decoded into the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request parameters could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration rejected while building the client
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Serialization(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the search client.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = SearchError::Status {
            status: 503,
            message: "backend unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503: backend unavailable");
    }

    #[test]
    fn test_timeout_error_display() {
        assert_eq!(
            SearchError::Timeout(30000).to_string(),
            "Request timeout after 30000ms"
        );
    }
}
