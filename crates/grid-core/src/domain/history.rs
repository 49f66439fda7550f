//! Bounded, linear undo/redo history of full-state snapshots.
//!
//! # How the cursor moves (for beginners)
//!
//! The history is a list of snapshots plus a cursor pointing at the snapshot
//! that matches the live state.
//!
//! ```text
//! checkpoint ×3      [S0, S1, S2]   cursor → S2
//! undo               [S0, S1, S2]   cursor → S1   (S2 still reachable by redo)
//! new checkpoint S3  [S0, S1, S3]   cursor → S3   (S2 is gone: history is linear)
//! ```
//!
//! The list is capped.  When a checkpoint pushes it past capacity the oldest
//! snapshot is dropped and the cursor shifts down by one so it keeps pointing
//! at the same logical entry.
//!
//! Snapshots are whole copies.  At designer scale (tens of modules) this is
//! cheap; an operation log with inverse operations would only pay off for far
//! larger documents.

use std::collections::VecDeque;

/// Default number of snapshots retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Undo/redo stack over snapshots of type `T`.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: VecDeque<T>,
    /// Index of the live snapshot; `None` only before the first checkpoint.
    cursor: Option<usize>,
    capacity: usize,
}

impl<T: Clone> History<T> {
    /// Creates an empty history holding at most `capacity` snapshots
    /// (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: None,
            capacity,
        }
    }

    /// Records `snapshot` as the newest entry.
    ///
    /// Any entries after the cursor (the redo branch) are discarded first.
    pub fn checkpoint(&mut self, snapshot: T) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);

        self.entries.push_back(snapshot);
        let mut cursor = self.entries.len() - 1;

        if self.entries.len() > self.capacity {
            self.entries.pop_front();
            cursor -= 1;
        }
        self.cursor = Some(cursor);
    }

    /// Steps back one entry and returns the snapshot to restore.
    ///
    /// Returns `None` (and does nothing) at the oldest entry.
    pub fn undo(&mut self) -> Option<&T> {
        let cursor = self.cursor.filter(|&c| c > 0)? - 1;
        self.cursor = Some(cursor);
        self.entries.get(cursor)
    }

    /// Steps forward one entry and returns the snapshot to restore.
    ///
    /// Returns `None` (and does nothing) at the newest entry.
    pub fn redo(&mut self) -> Option<&T> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        self.entries.get(cursor + 1)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> Option<&T> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}
