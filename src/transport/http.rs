//! HTTP Transport
//!
//! reqwest-backed `SearchTransport` for a live backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::transport::SearchTransport;

/// JSON-over-HTTP transport with default headers and a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpTransport {
    /// Builds a transport from the API URL, headers and timeout in `config`.
    ///
    /// Fails if a configured header name or value is not valid HTTP.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &config.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                SearchError::InvalidConfig(format!("header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                SearchError::InvalidConfig(format!("header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value> {
        let response = request.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status();

        if !status.is_success() {
            // Prefer the backend's own message when the error body is JSON
            let body_message = response.json::<Value>().await.ok().and_then(|body| {
                body.get("message")
                    .or_else(|| body.get("error"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
            });

            return Err(SearchError::Status {
                status: status.as_u16(),
                message: body_message
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("Error").to_string()),
            });
        }

        response.json::<Value>().await.map_err(|e| self.map_error(e))
    }

    fn map_error(&self, err: reqwest::Error) -> SearchError {
        if err.is_timeout() {
            SearchError::Timeout(self.timeout.as_millis() as u64)
        } else if err.is_decode() {
            SearchError::Decode(err.to_string())
        } else {
            SearchError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl SearchTransport for HttpTransport {
    async fn get(&self, path: &str, params: &[(String, String)]) -> Result<Value> {
        let url = self.url(path);
        debug!(method = "GET", %url, params = params.len(), "search request");

        let mut request = self.client.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }
        self.send(request).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.url(path);
        debug!(method = "POST", %url, "search request");

        self.send(self.client.post(&url).json(body)).await
    }
}
