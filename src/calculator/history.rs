//! Bounded calculation history, newest first.

use std::collections::VecDeque;

/// Number of records kept unless configured otherwise.
pub const DEFAULT_MAX_ITEMS: usize = 10;

/// Completed calculation records, most recent first.
#[derive(Clone, Debug)]
pub struct History {
    max_items: usize,
    records: VecDeque<String>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ITEMS)
    }
}

impl History {
    /// Create an empty history holding at most `max_items` records (at least one).
    pub fn new(max_items: usize) -> Self {
        let max_items = max_items.max(1);
        Self {
            max_items,
            records: VecDeque::with_capacity(max_items + 1),
        }
    }

    /// Insert a record at the front, evicting the oldest one when full.
    ///
    /// Returns the evicted record, if any.
    pub fn push(&mut self, record: String) -> Option<String> {
        self.records.push_front(record);
        if self.records.len() > self.max_items {
            self.records.pop_back()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Most recent record.
    pub fn latest(&self) -> Option<&str> {
        self.records.front().map(String::as_str)
    }

    /// Iterate records from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(String::as_str)
    }

    /// All records joined by line breaks, newest first.
    pub fn render(&self) -> String {
        self.iter().collect::<Vec<_>>().join("\n")
    }
}
