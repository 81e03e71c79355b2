//! Bounded history of submitted command lines.
//!
//! Most recent entry first. Insertion evicts from the back once the buffer
//! is full. Only the console loop writes here; the line editor reads it for
//! arrow-key recall.

use std::collections::VecDeque;

use conch_types::error::{ConchError, Result};

/// Fixed-capacity, most-recent-first sequence of submitted lines.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    entries: VecDeque<String>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Create an empty buffer. `capacity` must be positive.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be positive");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a finalized line as the most recent entry, evicting the oldest
    /// when the buffer is full.
    pub fn push(&mut self, line: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(line.into());
    }

    /// Entry at `index` (0 = most recent).
    pub fn get(&self, index: usize) -> Result<&str> {
        self.entries
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| ConchError::History(format!("history index {index} out of range")))
    }

    /// Change the capacity. Shrinking below the current size drops the
    /// oldest (back) entries; the most recent `capacity` entries survive.
    pub fn set_capacity(&mut self, capacity: usize) {
        assert!(capacity > 0, "history capacity must be positive");
        self.capacity = capacity;
        self.entries.truncate(capacity);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
