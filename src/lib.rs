//! Search Client - API-backed search with result caching
//!
//! Provides pet, message and faceted search over a pluggable HTTP transport,
//! with a TTL + FIFO result cache and query analytics.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod tasks;
pub mod transport;

pub use cache::CacheStats;
pub use client::{SearchClient, SEARCH_BASE_PATH};
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use metrics::{QueryCategory, SearchMetrics};
pub use transport::{HttpTransport, SearchTransport};
