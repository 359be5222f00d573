//! Loading of world definitions from JSON
//!
//! A definition carries the world constraints and the block list:
//!
//! ```json
//! {
//!   "worldConstraints": { "initialMapSize": 5, "initialBlock": "grass" },
//!   "blocks": [
//!     { "id": "grass", "sides": { "UP": ["grass"], "RIGHT": ["grass"],
//!                                 "BOTTOM": ["grass"], "LEFT": ["grass"] } }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::io::configuration::WorldConstraints;
use crate::io::error::{Result, WorldError};
use crate::spatial::blocks::{Block, BlockCatalog, BlockId, Side};

/// One block as written in a definition file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDefinition {
    /// Block identifier
    pub id: BlockId,
    /// Accepted neighbours per side; missing sides accept nothing
    #[serde(default)]
    pub sides: BTreeMap<Side, Vec<BlockId>>,
}

impl BlockDefinition {
    /// Convert into an immutable block
    pub fn to_block(&self) -> Block {
        self.sides
            .iter()
            .fold(Block::new(self.id.clone()), |block, (&side, ids)| {
                block.with_side(side, ids.iter().cloned())
            })
    }
}

/// Complete world definition file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldDefinition {
    /// Constraints the world starts with
    #[serde(default)]
    pub world_constraints: WorldConstraints,
    /// Available blocks, in selection order
    pub blocks: Vec<BlockDefinition>,
}

impl WorldDefinition {
    /// Build the block catalog
    ///
    /// Compatibility entries naming undefined blocks are kept and logged;
    /// they can never match a generated cell.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if two blocks share an id
    pub fn build_catalog(&self) -> Result<BlockCatalog> {
        let catalog = BlockCatalog::new(self.blocks.iter().map(BlockDefinition::to_block))?;

        for (block, side, missing) in catalog.dangling_references() {
            warn!(%block, ?side, %missing, "compatibility entry names an undefined block");
        }

        Ok(catalog)
    }
}

/// Parse a world definition from JSON text
///
/// # Errors
///
/// Returns `DefinitionParse` if the text does not match the definition layout
pub fn parse_world_definition(text: &str) -> Result<WorldDefinition> {
    serde_json::from_str(text).map_err(|source| WorldError::DefinitionParse {
        path: "<inline>".into(),
        source,
    })
}

/// Read and parse a world definition file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The contents do not match the definition layout
pub fn load_world_definition(path: &Path) -> Result<WorldDefinition> {
    let text = std::fs::read_to_string(path).map_err(|source| WorldError::FileSystem {
        path: path.to_path_buf(),
        operation: "read world definition",
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| WorldError::DefinitionParse {
        path: path.to_path_buf(),
        source,
    })
}
