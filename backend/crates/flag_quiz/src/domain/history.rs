//! Recent-history buffer
//!
//! Bounded FIFO of recently issued codes. Codes in the buffer are excluded
//! from primary selection only; they may still appear as distractors.

use std::collections::VecDeque;

/// Number of codes remembered by default
pub const DEFAULT_HISTORY_CAPACITY: usize = 7;

#[derive(Debug, Clone)]
pub struct RecentHistory {
    codes: VecDeque<String>,
    capacity: usize,
}

impl RecentHistory {
    /// Create an empty buffer. A capacity of 0 remembers nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            codes: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a code, evicting the oldest entries beyond capacity
    pub fn record_issued(&mut self, code: &str) {
        if self.capacity == 0 {
            return;
        }
        self.codes.push_back(code.to_string());
        while self.codes.len() > self.capacity {
            self.codes.pop_front();
        }
    }

    pub fn is_recently_issued(&self, code: &str) -> bool {
        self.codes.iter().any(|recent| recent == code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

impl Default for RecentHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_is_empty() {
        let history = RecentHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 7);
        assert!(!history.is_recently_issued("fr"));
    }

    #[test]
    fn test_evicts_oldest_first() {
        let mut history = RecentHistory::new(3);
        for code in ["a", "b", "c", "d"] {
            history.record_issued(code);
        }

        assert_eq!(history.len(), 3);
        assert!(!history.is_recently_issued("a"));
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_zero_capacity_remembers_nothing() {
        let mut history = RecentHistory::new(0);
        history.record_issued("fr");
        assert!(history.is_empty());
        assert!(!history.is_recently_issued("fr"));
    }

    #[test]
    fn test_repeated_code_occupies_two_slots() {
        let mut history = RecentHistory::new(2);
        history.record_issued("fr");
        history.record_issued("fr");
        history.record_issued("de");

        // One "fr" was evicted, the other is still remembered
        assert!(history.is_recently_issued("fr"));
        assert_eq!(history.len(), 2);
    }
}
