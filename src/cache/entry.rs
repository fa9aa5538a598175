//! Cache Entry Module
//!
//! Defines the structure for individual cached search results with TTL support.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::models::{MessageSearchResponse, PaginatedResponse, SearchResult};

// == Cached Payload ==
/// Decoded response of whichever operation produced the entry.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedPayload {
    Pets(PaginatedResponse<SearchResult>),
    Messages(MessageSearchResponse),
}

impl CachedPayload {
    /// Total match count reported by the payload.
    pub fn total_count(&self) -> u64 {
        match self {
            CachedPayload::Pets(resp) => resp.pagination.total,
            CachedPayload::Messages(resp) => resp.total,
        }
    }
}

// == Cache Entry ==
/// Represents a single cached search result and its metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached response
    pub payload: CachedPayload,
    /// Total match count, kept for quick introspection
    pub total_count: u64,
    /// Key this entry is stored under
    pub cache_key: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry that expires `ttl` after `now`.
    ///
    /// # Arguments
    /// * `cache_key` - The key the entry is stored under
    /// * `payload` - The response to cache
    /// * `ttl` - Lifetime of the entry
    /// * `now` - Creation time in Unix milliseconds
    pub fn new(cache_key: String, payload: CachedPayload, ttl: Duration, now: u64) -> Self {
        Self {
            total_count: payload.total_count(),
            payload,
            cache_key,
            created_at: now,
            expires_at: now.saturating_add(ttl.as_millis() as u64),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at the given time.
    ///
    /// An entry stays readable up to and including `expires_at`; it is
    /// expired only once `now` is strictly past it.
    pub fn is_expired_at(&self, now: u64) -> bool {
        now > self.expires_at
    }

    /// Checks if the entry has expired as of the current time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp_ms())
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, 0 once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        self.expires_at.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn message_payload(total: u64) -> CachedPayload {
        let mut resp = MessageSearchResponse::empty(1, 0);
        resp.total = total;
        CachedPayload::Messages(resp)
    }

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(
            "messages:{}".to_string(),
            message_payload(7),
            Duration::from_secs(300),
            1_000,
        );

        assert_eq!(entry.cache_key, "messages:{}");
        assert_eq!(entry.total_count, 7);
        assert_eq!(entry.created_at, 1_000);
        assert_eq!(entry.expires_at, 301_000);
    }

    #[test]
    fn test_total_count_from_pet_pagination() {
        let mut resp = PaginatedResponse::<SearchResult>::failed(1, 12);
        resp.pagination.total = 42;
        assert_eq!(CachedPayload::Pets(resp).total_count(), 42);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(
            "k".to_string(),
            message_payload(0),
            Duration::from_millis(500),
            10_000,
        );

        // Still valid exactly at expires_at
        assert!(!entry.is_expired_at(10_500));
        assert!(entry.is_expired_at(10_501));
    }

    #[test]
    fn test_fresh_entry_not_expired() {
        let entry = CacheEntry::new(
            "k".to_string(),
            message_payload(0),
            Duration::from_secs(10),
            current_timestamp_ms(),
        );

        assert!(!entry.is_expired());
        let remaining = entry.ttl_remaining_ms();
        assert!(remaining <= 10_000);
        assert!(remaining >= 9_000);
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let entry = CacheEntry::new("k".to_string(), message_payload(0), Duration::ZERO, 0);

        assert!(entry.is_expired());
        assert_eq!(entry.ttl_remaining_ms(), 0);
    }
}
