//! Configuration Module
//!
//! Handles loading and managing search client configuration from environment variables.

use std::collections::HashMap;
use std::env;
use std::time::Duration;

/// Default maximum number of cached search results
pub const MAX_CACHE_SIZE: usize = 200;

/// Default lifetime of a cached search result
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Default interval between background expiry sweeps
pub const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Default request timeout forwarded to the HTTP transport
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Search client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL of the backend API (search paths are appended to it)
    pub api_url: String,
    /// Log swallowed failures and cache maintenance as warnings
    pub debug: bool,
    /// Headers sent with every request
    pub headers: HashMap<String, String>,
    /// Request timeout, enforced by the transport
    pub timeout: Duration,
    /// Lifetime of a cached result
    pub cache_ttl: Duration,
    /// Maximum number of cached results
    pub max_cache_size: usize,
    /// Interval between background expiry sweeps
    pub cleanup_interval: Duration,
}

impl SearchConfig {
    /// Creates a new SearchConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SEARCH_API_URL` - Backend base URL (default: http://localhost:5000)
    /// - `SEARCH_DEBUG` - `true`/`1` enables debug logging (default: false)
    /// - `SEARCH_TIMEOUT_MS` - Request timeout in milliseconds (default: 30000)
    /// - `SEARCH_CACHE_TTL_SECS` - Cache TTL in seconds (default: 300)
    /// - `SEARCH_MAX_CACHE_SIZE` - Maximum cached results (default: 200)
    /// - `SEARCH_CLEANUP_INTERVAL_SECS` - Sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("SEARCH_API_URL").unwrap_or(defaults.api_url),
            debug: env::var("SEARCH_DEBUG")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.debug),
            headers: defaults.headers,
            timeout: env::var("SEARCH_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
            cache_ttl: env::var("SEARCH_CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
            max_cache_size: env::var("SEARCH_MAX_CACHE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_cache_size),
            cleanup_interval: env::var("SEARCH_CLEANUP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cleanup_interval),
        }
    }

    /// Sets the backend base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Enables or disables debug logging of swallowed failures.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Adds a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the lifetime of cached results.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Sets the maximum number of cached results.
    pub fn with_max_cache_size(mut self, max_cache_size: usize) -> Self {
        self.max_cache_size = max_cache_size;
        self
    }

    /// Sets the interval between background expiry sweeps.
    pub fn with_cleanup_interval(mut self, interval: Duration) -> Self {
        self.cleanup_interval = interval;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            debug: false,
            headers: HashMap::new(),
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_CACHE_TTL,
            max_cache_size: MAX_CACHE_SIZE,
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL,
        }
    }
}
