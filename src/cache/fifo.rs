//! FIFO Tracker Module
//!
//! Keeps cache keys in insertion order for oldest-first eviction.

use std::collections::VecDeque;

// == FIFO Tracker ==
/// Tracks insertion order for FIFO eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest inserted
/// - Back = Newest inserted
///
/// Reads never reorder keys; only (re-)insertion moves a key to the back.
#[derive(Debug, Default)]
pub struct FifoTracker {
    order: VecDeque<String>,
}

impl FifoTracker {
    // == Constructor ==
    /// Creates a new empty FIFO tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Push ==
    /// Records a key as the newest insertion.
    ///
    /// A key that is already tracked is moved to the back.
    pub fn push(&mut self, key: &str) {
        self.remove(key);
        self.order.push_back(key.to_string());
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Pop Oldest ==
    /// Returns and removes the oldest inserted key.
    ///
    /// Returns None if tracker is empty.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the oldest inserted key without removing it.
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.front()
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }

    /// Keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_new() {
        let fifo = FifoTracker::new();
        assert!(fifo.is_empty());
        assert_eq!(fifo.len(), 0);
        assert_eq!(fifo.peek_oldest(), None);
    }

    #[test]
    fn test_fifo_push_order() {
        let mut fifo = FifoTracker::new();

        fifo.push("key1");
        fifo.push("key2");
        fifo.push("key3");

        assert_eq!(fifo.len(), 3);
        assert_eq!(fifo.peek_oldest(), Some(&"key1".to_string()));
        let keys: Vec<&String> = fifo.iter().collect();
        assert_eq!(keys, vec!["key1", "key2", "key3"]);
    }

    #[test]
    fn test_fifo_pop_oldest() {
        let mut fifo = FifoTracker::new();

        fifo.push("key1");
        fifo.push("key2");
        fifo.push("key3");

        assert_eq!(fifo.pop_oldest(), Some("key1".to_string()));
        assert_eq!(fifo.pop_oldest(), Some("key2".to_string()));
        assert_eq!(fifo.len(), 1);
    }

    #[test]
    fn test_fifo_pop_empty() {
        let mut fifo = FifoTracker::new();
        assert_eq!(fifo.pop_oldest(), None);
    }

    #[test]
    fn test_fifo_reinsert_moves_to_back() {
        let mut fifo = FifoTracker::new();

        fifo.push("a");
        fifo.push("b");
        fifo.push("c");
        fifo.push("a");

        assert_eq!(fifo.len(), 3);
        assert_eq!(fifo.pop_oldest(), Some("b".to_string()));
        assert_eq!(fifo.pop_oldest(), Some("c".to_string()));
        assert_eq!(fifo.pop_oldest(), Some("a".to_string()));
    }

    #[test]
    fn test_fifo_remove() {
        let mut fifo = FifoTracker::new();

        fifo.push("key1");
        fifo.push("key2");
        fifo.push("key3");
        fifo.remove("key2");
        fifo.remove("nonexistent");

        assert_eq!(fifo.len(), 2);
        assert!(!fifo.contains("key2"));
        assert!(fifo.contains("key1"));
        assert!(fifo.contains("key3"));
    }

    #[test]
    fn test_fifo_clear() {
        let mut fifo = FifoTracker::new();
        fifo.push("key1");
        fifo.clear();
        assert!(fifo.is_empty());
    }
}
