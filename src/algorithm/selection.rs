use crate::{
    algorithm::tracker::GenerationTracker,
    spatial::blocks::{Block, BlockCatalog, BlockId, Side},
};
use clap::ValueEnum;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Resolved neighbour ids around a target cell
///
/// `None` on a side is an open edge: the neighbour is empty, not generated
/// yet, or outside the materialized grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbours {
    sides: [Option<BlockId>; 4],
}

impl Neighbours {
    /// All sides open
    pub fn open() -> Self {
        Self::default()
    }

    /// Set the neighbour on `side`
    #[must_use]
    pub fn with(mut self, side: Side, id: Option<BlockId>) -> Self {
        self.set(side, id);
        self
    }

    /// Set the neighbour on `side`
    pub fn set(&mut self, side: Side, id: Option<BlockId>) {
        if let Some(slot) = self.sides.get_mut(side.index()) {
            *slot = id;
        }
    }

    /// Neighbour on `side`, `None` for an open edge
    pub fn get(&self, side: Side) -> Option<&BlockId> {
        self.sides.get(side.index()).and_then(Option::as_ref)
    }

    /// Non-open neighbours with their side
    pub fn resolved(&self) -> impl Iterator<Item = (Side, &BlockId)> {
        Side::ALL
            .into_iter()
            .filter_map(|side| self.get(side).map(|id| (side, id)))
    }
}

/// How a block is picked among the viable candidates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SelectionPolicy {
    /// Every viable block is equally likely
    #[default]
    Uniform,
    /// Blocks placed less often so far are favoured
    Variety,
}

/// Blocks compatible with every resolved neighbour
///
/// Compatibility is mutual: the candidate must accept the neighbour on the
/// shared side and, when the neighbour is in the catalog, the neighbour must
/// accept the candidate on the opposite side.
pub fn compute_viable_blocks<'a>(
    neighbours: &Neighbours,
    catalog: &'a BlockCatalog,
) -> Vec<&'a Block> {
    catalog
        .iter()
        .filter(|candidate| {
            neighbours.resolved().all(|(side, neighbour)| {
                candidate.allows(side, neighbour)
                    && catalog
                        .get(neighbour)
                        .is_none_or(|other| other.allows(side.opposite(), candidate.id()))
            })
        })
        .collect()
}

/// Weights favouring rarely placed blocks, `1 / (1 + count)` each
pub fn variety_weights(candidates: &[&Block], tracker: &GenerationTracker) -> Vec<f64> {
    candidates
        .iter()
        .map(|block| 1.0 / (1.0 + tracker.count(block.id()) as f64))
        .collect()
}

/// Seeded block picker for reproducible worlds
#[derive(Debug, Clone)]
pub struct BlockSelector {
    rng: StdRng,
    policy: SelectionPolicy,
}

impl BlockSelector {
    /// Create a deterministic selector
    pub fn new(seed: u64, policy: SelectionPolicy) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            policy,
        }
    }

    /// Active selection policy
    pub const fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Pick a block for a cell with the given neighbours
    ///
    /// Returns `None` when no block fits; the caller then leaves the cell
    /// empty.
    pub fn select_block(
        &mut self,
        neighbours: &Neighbours,
        catalog: &BlockCatalog,
        tracker: &GenerationTracker,
    ) -> Option<BlockId> {
        let viable = compute_viable_blocks(neighbours, catalog);
        if viable.is_empty() {
            return None;
        }

        let index = match self.policy {
            SelectionPolicy::Uniform => self.rng.random_range(0..viable.len()),
            SelectionPolicy::Variety => self.weighted_choice(&variety_weights(&viable, tracker)),
        };

        viable.get(index).map(|block| block.id().clone())
    }

    /// Generic weighted random selection
    ///
    /// Returns index into weights array using cumulative distribution
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights.len().saturating_sub(1)
    }
}
