//! Transport Module
//!
//! The HTTP collaborator the search client talks through.
//!
//! # Implementations
//! - `HttpTransport`: reqwest-backed client for a live backend

mod http;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, SearchError};

pub use http::HttpTransport;

/// Performs JSON requests against the search backend.
///
/// Implementations fail on network errors, timeouts, non-2xx statuses and
/// undecodable bodies; the client turns every failure into an empty result.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    /// Issues a GET to `path` with `params` encoded as the query string.
    async fn get(&self, path: &str, params: &[(String, String)]) -> Result<Value>;

    /// Issues a POST to `path` with `body` as JSON.
    async fn post(&self, path: &str, body: &Value) -> Result<Value>;
}

/// Decodes a transport payload into the expected response type.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| SearchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchSuggestion;
    use serde_json::json;

    #[test]
    fn test_decode_success() {
        let suggestions: Vec<SearchSuggestion> =
            decode(json!([{ "text": "golden retriever", "type": "query", "count": 15 }])).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].count, Some(15));
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let result: Result<Vec<SearchSuggestion>> = decode(json!({ "unexpected": true }));
        assert!(matches!(result, Err(SearchError::Decode(_))));
    }
}
