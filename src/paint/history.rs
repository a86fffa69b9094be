use crate::paint::model::BACKGROUND;
use crate::paint::surface::{PaintSurface, Snapshot};
use anyhow::Result;
use std::collections::VecDeque;

/// Bounded depth of the linear undo history. Oldest snapshots are evicted
/// first once the bound is reached.
pub const HISTORY_CAPACITY: usize = 25;

/// Linear, bounded undo over raster state. Snapshots are captured before a
/// stroke's first mark and before a clear, and consumed on undo.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SnapshotHistory {
    stack: VecDeque<Snapshot>,
}

impl SnapshotHistory {
    /// Push a snapshot of the current surface contents. Evicts from the
    /// front to hold the capacity invariant.
    pub fn capture(&mut self, surface: &PaintSurface) -> Result<()> {
        let snapshot = surface.read_back()?;
        self.stack.push_back(snapshot);
        while self.stack.len() > HISTORY_CAPACITY {
            self.stack.pop_front();
        }
        Ok(())
    }

    /// Pop the most recent snapshot (it holds the state before the action
    /// being undone, so it is discarded), then restore the surface to the new
    /// top. An empty history is a no-op; a history emptied by the pop resets
    /// the surface to blank background.
    ///
    /// Returns whether anything was undone.
    pub fn undo(&mut self, surface: &mut PaintSurface) -> bool {
        if self.stack.pop_back().is_none() {
            return false;
        }
        match self.stack.back() {
            Some(top) => surface.restore(top),
            None => surface.fill(BACKGROUND),
        }
        true
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
