//! Bounded submission history with a navigation cursor.
//!
//! Entries are stored oldest-first in a ring buffer; the navigation index
//! is `None` while the user edits live text and `Some(i)` while browsing.
//! The input typed before browsing started is parked in a saved slot and
//! handed back when navigation runs past the newest entry, so an
//! unsubmitted line survives a history excursion.

use std::collections::VecDeque;

/// Insertion-ordered, capacity-bounded history of submitted lines.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
    /// `None` = editing live text, `Some(i)` = browsing entry `i`.
    index: Option<usize>,
    /// Live input captured when browsing began.
    saved: Option<String>,
}

impl History {
    /// Create an empty history holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity: capacity.max(1),
            index: None,
            saved: None,
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Record a submission. A duplicate of the newest entry is dropped;
    /// otherwise the oldest entry is evicted first when at capacity.
    pub fn add(&mut self, text: &str) {
        if self.entries.back().is_some_and(|last| last == text) {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(text.to_string());
    }

    /// Step to an older entry.
    ///
    /// The first call saves `live` (the text being edited) and lands on the
    /// newest entry; later calls walk toward the oldest. Returns `None`
    /// when there is nothing older.
    pub fn previous(&mut self, live: &str) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let target = match self.index {
            None => {
                self.saved = Some(live.to_string());
                self.entries.len() - 1
            }
            Some(0) => return None,
            Some(i) => i - 1,
        };
        self.index = Some(target);
        self.entries.get(target).map(String::as_str)
    }

    /// Step to a newer entry.
    ///
    /// At the newest entry this exits browsing and returns the saved live
    /// input (empty if nothing was typed before browsing). Returns `None`
    /// when not browsing at all.
    pub fn next(&mut self) -> Option<String> {
        match self.index {
            Some(i) if i + 1 < self.entries.len() => {
                self.index = Some(i + 1);
                self.entries.get(i + 1).cloned()
            }
            Some(_) => {
                self.index = None;
                Some(self.saved.take().unwrap_or_default())
            }
            None => None,
        }
    }

    /// Whether the user is currently browsing history.
    pub fn browsing(&self) -> bool {
        self.index.is_some()
    }

    /// Leave browsing mode and drop the saved live input. Called after a
    /// submission or cancel.
    pub fn reset(&mut self) {
        self.index = None;
        self.saved = None;
    }
}
