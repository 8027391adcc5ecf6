//! Bounded recent-password history.

use std::collections::VecDeque;

use secrecy::SecretString;

/// Maximum number of entries the buffer retains.
pub const HISTORY_CAPACITY: usize = 10;

/// FIFO list of recently generated passwords, oldest first.
///
/// Appending at capacity evicts the oldest entry. There is no deduplication:
/// re-generating an identical password still counts as a new entry. The
/// buffer lives for one session and is never persisted.
#[derive(Default)]
pub struct HistoryBuffer {
    entries: VecDeque<SecretString>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a password, evicting the oldest entry when full.
    pub fn append(&mut self, password: SecretString) {
        if self.entries.len() >= HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(password);
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Read-only ordered view for rendering, oldest first.
    pub fn snapshot(&self) -> Vec<&SecretString> {
        self.entries.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
