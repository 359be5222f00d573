//! Bookkeeping of the blocks placed in one world

use std::collections::HashMap;

use crate::spatial::blocks::BlockId;

/// Multiset of placed block ids
///
/// Append-only: counts only ever increase. The world records a placement
/// exactly when a cell becomes occupied.
#[derive(Debug, Clone, Default)]
pub struct GenerationTracker {
    placements: HashMap<BlockId, usize>,
    total: usize,
}

impl GenerationTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one placement of `id`
    pub fn record_placement(&mut self, id: &BlockId) {
        *self.placements.entry(id.clone()).or_insert(0) += 1;
        self.total += 1;
    }

    /// How many times `id` has been placed
    pub fn count(&self, id: &BlockId) -> usize {
        self.placements.get(id).copied().unwrap_or(0)
    }

    /// Whether `id` has been placed at least once
    pub fn has_placed(&self, id: &BlockId) -> bool {
        self.placements.contains_key(id)
    }

    /// Total number of placements
    pub const fn total_placed(&self) -> usize {
        self.total
    }

    /// Number of distinct ids placed
    pub fn distinct_placed(&self) -> usize {
        self.placements.len()
    }

    /// Placement counts per id, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&BlockId, usize)> {
        self.placements.iter().map(|(id, &count)| (id, count))
    }
}
