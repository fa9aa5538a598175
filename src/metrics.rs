//! Search Metrics Module
//!
//! Tracks query volume, cache effectiveness, latency buckets and per-category
//! popularity across all search operations of one client.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Queries faster than this are counted as fast (milliseconds)
pub const FAST_QUERY_MS: u64 = 100;

/// Queries faster than this (and not fast) are counted as medium (milliseconds)
pub const MEDIUM_QUERY_MS: u64 = 500;

// == Query Category ==
/// Operation category used for cache-key prefixes and popularity tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryCategory {
    Pets,
    Messages,
    Faceted,
}

impl QueryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryCategory::Pets => "pets",
            QueryCategory::Messages => "messages",
            QueryCategory::Faceted => "faceted",
        }
    }
}

impl fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Performance Data ==
/// Latency histogram over executed (cache-miss) queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceData {
    /// Under 100ms
    pub fast_queries: u64,
    /// 100ms to 499ms
    pub medium_queries: u64,
    /// 500ms and above
    pub slow_queries: u64,
}

impl PerformanceData {
    /// Increments the bucket matching the given latency.
    pub fn record(&mut self, query_time_ms: u64) {
        if query_time_ms < FAST_QUERY_MS {
            self.fast_queries += 1;
        } else if query_time_ms < MEDIUM_QUERY_MS {
            self.medium_queries += 1;
        } else {
            self.slow_queries += 1;
        }
    }

    pub fn total(&self) -> u64 {
        self.fast_queries + self.medium_queries + self.slow_queries
    }
}

// == Search Metrics ==
/// Aggregate analytics for one search client.
///
/// Invariant: `cache_hits + cache_misses == total_queries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMetrics {
    pub total_queries: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    /// Running mean latency of executed queries in milliseconds
    pub average_query_time: f64,
    /// Calls per category, hits and misses alike
    pub popular_queries: HashMap<QueryCategory, u64>,
    pub performance_data: PerformanceData,
}

impl SearchMetrics {
    // == Constructor ==
    /// Creates a new SearchMetrics with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record ==
    /// Records one search invocation.
    ///
    /// Latency only feeds the average and the buckets when the query was
    /// actually executed (a miss); a hit only bumps the counters.
    pub fn record(&mut self, category: QueryCategory, query_time_ms: u64, cache_hit: bool) {
        self.total_queries += 1;

        if cache_hit {
            self.cache_hits += 1;
        } else {
            self.cache_misses += 1;
            self.performance_data.record(query_time_ms);

            let executed = self.cache_misses as f64;
            self.average_query_time =
                (self.average_query_time * (executed - 1.0) + query_time_ms as f64) / executed;
        }

        *self.popular_queries.entry(category).or_insert(0) += 1;
    }

    // == Popularity ==
    /// Returns how many times the category was searched.
    pub fn popularity(&self, category: QueryCategory) -> u64 {
        self.popular_queries.get(&category).copied().unwrap_or(0)
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }
}
