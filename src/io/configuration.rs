//! Runtime configuration defaults and world constraints

use serde::{Deserialize, Serialize};

use crate::spatial::blocks::BlockId;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Side length of the grid allocated when a world starts
pub const DEFAULT_INITIAL_MAP_SIZE: usize = 10;

/// Largest accepted initial side length; the grid is allocated eagerly
pub const MAX_INITIAL_MAP_SIZE: usize = 4096;

/// Region requested by the CLI when none is given (`minX, minY, maxX, maxY`)
pub const DEFAULT_REGION: [i32; 4] = [-2, -2, 2, 2];

/// Pixels per cell side in exported images
pub const DEFAULT_PNG_SCALE: u32 = 8;

// Keeps a typo in --scale from allocating a huge image
/// Maximum pixels per cell side in exported images
pub const MAX_PNG_SCALE: u32 = 64;

/// Label used in text tables for decided cells without a block
pub const EMPTY_LABEL: &str = ".";

/// Label used in text tables for cells not generated yet
pub const UNVISITED_LABEL: &str = "?";

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log filter used with `--quiet`
pub const QUIET_LOG_FILTER: &str = "warn";

/// Constraints a world is started with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorldConstraints {
    /// Side length of the initially allocated grid
    pub initial_map_size: Option<usize>,
    /// Block placed at the origin before any generation
    pub initial_block: Option<BlockId>,
}

impl WorldConstraints {
    /// Constraints with an initial size and no seeded block
    pub const fn with_size(initial_map_size: usize) -> Self {
        Self {
            initial_map_size: Some(initial_map_size),
            initial_block: None,
        }
    }

    /// Seed `id` at the origin
    #[must_use]
    pub fn with_initial_block(mut self, id: impl Into<BlockId>) -> Self {
        self.initial_block = Some(id.into());
        self
    }
}
