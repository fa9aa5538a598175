//! Cache Statistics Module
//!
//! Snapshot of cache occupancy and effectiveness.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of the result cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Current number of cached results
    pub size: usize,
    /// hits / (hits + misses), rounded to two decimals
    pub hit_rate: f64,
    /// Configured capacity
    pub max_size: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Builds a snapshot from the current size and hit/miss counters.
    ///
    /// The hit rate is 0.0 if no requests have been made.
    pub fn new(size: usize, hits: u64, misses: u64, max_size: usize) -> Self {
        let total = hits + misses;
        let hit_rate = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };

        Self {
            size,
            hit_rate: (hit_rate * 100.0).round() / 100.0,
            max_size,
        }
    }
}
