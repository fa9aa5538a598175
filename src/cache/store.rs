//! Cache Store Module
//!
//! Result cache combining HashMap storage with FIFO eviction and TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CachedPayload, FifoTracker};

// == Search Cache ==
/// Bounded search-result cache with FIFO eviction and per-entry expiry.
#[derive(Debug)]
pub struct SearchCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Insertion order used for eviction
    order: FifoTracker,
    /// Maximum number of entries allowed
    max_size: usize,
    /// Lifetime given to every inserted entry
    ttl: Duration,
    /// Number of entries evicted for capacity
    evictions: u64,
}

impl SearchCache {
    // == Constructor ==
    /// Creates a new SearchCache with specified capacity and TTL.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries the cache can hold
    /// * `ttl` - Lifetime of every inserted entry
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            order: FifoTracker::new(),
            max_size,
            ttl,
            evictions: 0,
        }
    }

    // == Insert ==
    /// Stores a payload under `key`, expiring one TTL from now.
    ///
    /// Returns the key evicted to make room, if any.
    pub fn insert(&mut self, key: String, payload: CachedPayload) -> Option<String> {
        self.insert_at(key, payload, current_timestamp_ms())
    }

    /// Stores a payload as if inserted at `now` (Unix milliseconds).
    ///
    /// Overwriting an existing key never evicts, but the key becomes the
    /// newest insertion. When a new key arrives at capacity, exactly the
    /// oldest-inserted entry is dropped first.
    pub fn insert_at(&mut self, key: String, payload: CachedPayload, now: u64) -> Option<String> {
        if self.max_size == 0 {
            return None;
        }

        let mut evicted = None;
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_size {
            if let Some(oldest) = self.order.pop_oldest() {
                self.entries.remove(&oldest);
                self.evictions += 1;
                debug!(key = %oldest, "evicted oldest cache entry");
                evicted = Some(oldest);
            }
        }

        let entry = CacheEntry::new(key.clone(), payload, self.ttl, now);
        self.order.push(&key);
        self.entries.insert(key, entry);

        evicted
    }

    // == Get ==
    /// Retrieves a payload by key.
    ///
    /// Expired entries are removed and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<CachedPayload> {
        self.get_at(key, current_timestamp_ms())
    }

    /// Retrieves a payload as of `now` (Unix milliseconds).
    pub fn get_at(&mut self, key: &str, now: u64) -> Option<CachedPayload> {
        let entry = self.entries.get(key)?;

        if entry.is_expired_at(now) {
            self.entries.remove(key);
            self.order.remove(key);
            debug!(key, "dropped expired cache entry on read");
            return None;
        }

        Some(entry.payload.clone())
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        self.cleanup_expired_at(current_timestamp_ms())
    }

    /// Removes all entries expired as of `now` (Unix milliseconds).
    pub fn cleanup_expired_at(&mut self, now: u64) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.order.remove(key);
        }

        expired_keys.len()
    }

    // == Clear ==
    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Returns the entry stored under `key` without checking expiry.
    pub fn peek(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Returns the oldest-inserted key, the next eviction candidate.
    pub fn oldest_key(&self) -> Option<&String> {
        self.order.peek_oldest()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn evictions(&self) -> u64 {
        self.evictions
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageSearchResponse;

    const TTL: Duration = Duration::from_secs(300);

    fn payload(total: u64) -> CachedPayload {
        let mut resp = MessageSearchResponse::empty(1, 0);
        resp.total = total;
        CachedPayload::Messages(resp)
    }

    #[test]
    fn test_store_new() {
        let store = SearchCache::new(100, TTL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.max_size(), 100);
    }

    #[test]
    fn test_store_insert_and_get() {
        let mut store = SearchCache::new(100, TTL);

        store.insert("key1".to_string(), payload(1));

        assert_eq!(store.get("key1"), Some(payload(1)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.peek("key1").map(|e| e.total_count), Some(1));
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = SearchCache::new(100, TTL);
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = SearchCache::new(100, TTL);

        store.insert("key1".to_string(), payload(1));
        store.insert("key1".to_string(), payload(2));

        assert_eq!(store.get("key1"), Some(payload(2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = SearchCache::new(100, TTL);
        let inserted_at = 1_000_000;

        store.insert_at("key1".to_string(), payload(1), inserted_at);

        let ttl_ms = TTL.as_millis() as u64;
        assert!(store.get_at("key1", inserted_at + ttl_ms).is_some());
        assert!(store.get_at("key1", inserted_at + ttl_ms + 1).is_none());
        // Expired entry was dropped on read
        assert!(!store.contains_key("key1"));
        assert!(store.oldest_key().is_none());
    }

    #[test]
    fn test_store_fifo_eviction() {
        let mut store = SearchCache::new(3, TTL);

        store.insert("key1".to_string(), payload(1));
        store.insert("key2".to_string(), payload(2));
        store.insert("key3".to_string(), payload(3));

        // Cache is full, adding key4 should evict key1 (oldest)
        let evicted = store.insert("key4".to_string(), payload(4));

        assert_eq!(evicted, Some("key1".to_string()));
        assert_eq!(store.len(), 3);
        assert_eq!(store.evictions(), 1);
        assert!(store.get("key1").is_none());
        assert!(store.get("key2").is_some());
        assert!(store.get("key3").is_some());
        assert!(store.get("key4").is_some());
    }

    #[test]
    fn test_store_reads_do_not_protect_from_eviction() {
        let mut store = SearchCache::new(3, TTL);

        store.insert("key1".to_string(), payload(1));
        store.insert("key2".to_string(), payload(2));
        store.insert("key3".to_string(), payload(3));

        // Reading key1 does not change insertion order
        store.get("key1");
        store.insert("key4".to_string(), payload(4));

        assert!(!store.contains_key("key1"));
        assert!(store.contains_key("key2"));
    }

    #[test]
    fn test_store_overwrite_at_capacity_does_not_evict() {
        let mut store = SearchCache::new(2, TTL);

        store.insert("key1".to_string(), payload(1));
        store.insert("key2".to_string(), payload(2));
        let evicted = store.insert("key1".to_string(), payload(10));

        assert_eq!(evicted, None);
        assert_eq!(store.len(), 2);
        // key1 is now the newest insertion
        assert_eq!(store.oldest_key(), Some(&"key2".to_string()));
    }

    #[test]
    fn test_store_zero_capacity() {
        let mut store = SearchCache::new(0, TTL);
        store.insert("key1".to_string(), payload(1));
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_cleanup_expired() {
        let mut store = SearchCache::new(100, Duration::from_millis(1_000));

        store.insert_at("old".to_string(), payload(1), 0);
        store.insert_at("new".to_string(), payload(2), 5_000);

        let removed = store.cleanup_expired_at(5_500);
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.contains_key("new"));
        assert_eq!(store.oldest_key(), Some(&"new".to_string()));
    }

    #[test]
    fn test_store_clear() {
        let mut store = SearchCache::new(100, TTL);

        store.insert("key1".to_string(), payload(1));
        store.insert("key2".to_string(), payload(2));
        store.clear();

        assert!(store.is_empty());
        assert!(store.oldest_key().is_none());
    }
}
