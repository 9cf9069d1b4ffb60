//! Snapshot history: the pristine-first stack backing undo and clear.
//!
//! Invariants: the first entry is always the pristine post-load raster, the
//! last entry is always the most recently committed state, and the stack is
//! never empty. Append-only except for [`History::undo`], which truncates
//! the tail. Growth is bounded by [`MAX_HISTORY`]: past the cap the oldest
//! committed stroke is evicted; the pristine snapshot never is, so a full
//! clear is always exact.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::consts::MAX_HISTORY;

/// An immutable copy of the raster's premultiplied RGBA contents at a point
/// in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Snapshot {
    #[must_use]
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self { width, height, data }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw premultiplied RGBA bytes, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Bounded stack of raster snapshots.
#[derive(Debug)]
pub struct History {
    entries: Vec<Snapshot>,
}

impl History {
    /// Start a fresh history holding exactly the pristine snapshot.
    #[must_use]
    pub fn new(pristine: Snapshot) -> Self {
        Self { entries: vec![pristine] }
    }

    /// Append a committed snapshot. At capacity the oldest committed entry
    /// (index 1) is evicted; index 0 stays pristine.
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.entries.len() >= MAX_HISTORY {
            self.entries.remove(1);
        }
        self.entries.push(snapshot);
    }

    /// Drop the last snapshot and return the one before it, now the current
    /// state. Returns `None` when only the pristine snapshot remains.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop();
        self.entries.last()
    }

    /// Truncate to the pristine snapshot and return it. Returns `None` when
    /// already pristine (nothing to clear).
    pub fn clear(&mut self) -> Option<&Snapshot> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.truncate(1);
        self.entries.first()
    }

    /// Number of retained snapshots (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether only the pristine snapshot remains.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.entries.len() == 1
    }

    /// Never empty once constructed; present to satisfy the `len`/`is_empty`
    /// pairing convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
