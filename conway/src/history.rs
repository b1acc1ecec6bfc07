// history.rs - Navigable snapshot history with branch pruning

use tracing::debug;

use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// Owned deep copy of a grid as it was at one point in time.
pub type Snapshot = Grid;

/// Log of grid snapshots with a cursor on the active one.
///
/// Entries after the cursor form a redo tail. The tail survives plain
/// navigation but is dropped by the next [`History::record`], whatever the
/// recorded grid is. Consecutive entries are never equal.
#[derive(Debug, Clone)]
pub struct History {
    entries : Vec<Snapshot>,
    cursor  : usize,
}

impl History {
    pub fn new(initial: &Grid) -> Self {
        Self { entries: vec![initial.clone()], cursor: 0 }
    }

    /// Records `grid` as the newest state.
    ///
    /// Returns false when the grid equals the newest retained entry and
    /// nothing was appended. The redo tail is discarded either way.
    pub fn record(&mut self, grid: &Grid) -> bool {
        if !self.is_at_tail() {
            debug!(cursor = self.cursor, dropped = self.entries.len() - self.cursor - 1, "discarding redo tail");
            self.entries.truncate(self.cursor + 1);
        }

        if self.entries.last() == Some(grid) {
            return false;
        }

        self.entries.push(grid.clone());
        self.cursor = self.entries.len() - 1;
        debug!(position = self.cursor, "recorded snapshot");
        true
    }

    /// Moves the cursor to `index` and returns a copy of that snapshot.
    ///
    /// On error neither the cursor nor the entries change.
    pub fn restore(&mut self, index: usize) -> Result<Snapshot> {
        let snapshot = self
            .entries
            .get(index)
            .cloned()
            .ok_or(LifeError::IndexOutOfRange { index, len: self.entries.len() })?;
        self.cursor = index;
        debug!(position = index, "restored snapshot");
        Ok(snapshot)
    }

    /// One entry back, or `None` at the oldest entry.
    pub fn step_back(&mut self) -> Option<Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.restore(self.cursor - 1).ok()
    }

    /// One entry forward, or `None` when the cursor is already at the tail.
    pub fn step_forward(&mut self) -> Option<Snapshot> {
        if self.is_at_tail() {
            return None;
        }
        self.restore(self.cursor + 1).ok()
    }

    pub fn len(&self) -> usize { self.entries.len() }

    /// Always false: a history holds at least its initial entry.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn position(&self) -> usize { self.cursor }

    pub fn is_at_tail(&self) -> bool { self.cursor + 1 == self.entries.len() }

    pub fn current(&self) -> &Snapshot { &self.entries[self.cursor] }
}
