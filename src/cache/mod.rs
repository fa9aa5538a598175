//! Cache Module
//!
//! Provides the in-memory search-result cache with TTL expiration and FIFO eviction.

mod entry;
mod fifo;
mod key;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry, CachedPayload};
pub use fifo::FifoTracker;
pub use key::generate_cache_key;
pub use stats::CacheStats;
pub use store::SearchCache;
