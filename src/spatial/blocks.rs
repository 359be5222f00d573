//! Block identifiers, sides and the shared block catalog
//!
//! Blocks are immutable once built. A world only ever stores block ids in its
//! cells and resolves them back through the catalog when it needs the
//! compatibility sets.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::io::error::{Result, invalid_catalog};

/// Stable block identifier, cheap to clone
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(Arc<str>);

impl BlockId {
    /// Create an id from any string-like value
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

/// One of the four sides of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Towards increasing y
    Up,
    /// Towards increasing x
    Right,
    /// Towards decreasing y
    Bottom,
    /// Towards decreasing x
    Left,
}

impl Side {
    /// All sides in clockwise order starting from `Up`
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Bottom, Self::Left];

    /// The side facing this one from the neighbouring cell
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Unit step `[dx, dy]` from a cell to its neighbour on this side
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::Up => [0, 1],
            Self::Right => [1, 0],
            Self::Bottom => [0, -1],
            Self::Left => [-1, 0],
        }
    }

    /// Position of this side in [`Side::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A block with per-side compatibility sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    id: BlockId,
    compatibility: [BTreeSet<BlockId>; 4],
}

impl Block {
    /// Create a block that accepts no neighbour on any side
    pub fn new(id: impl Into<BlockId>) -> Self {
        Self {
            id: id.into(),
            compatibility: Default::default(),
        }
    }

    /// Create a block accepting the same neighbours on every side
    pub fn uniform<I, T>(id: impl Into<BlockId>, neighbours: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BlockId>,
    {
        let set: BTreeSet<BlockId> = neighbours.into_iter().map(Into::into).collect();
        Self {
            id: id.into(),
            compatibility: [set.clone(), set.clone(), set.clone(), set],
        }
    }

    /// Add accepted neighbours on one side
    #[must_use]
    pub fn with_side<I, T>(mut self, side: Side, neighbours: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BlockId>,
    {
        if let Some(set) = self.compatibility.get_mut(side.index()) {
            set.extend(neighbours.into_iter().map(Into::into));
        }
        self
    }

    /// Block identifier
    pub const fn id(&self) -> &BlockId {
        &self.id
    }

    /// Ids this block may neighbour on `side`
    pub fn compatible(&self, side: Side) -> impl Iterator<Item = &BlockId> {
        self.compatibility
            .get(side.index())
            .into_iter()
            .flat_map(BTreeSet::iter)
    }

    /// Whether `neighbour` may sit next to this block on `side`
    pub fn allows(&self, side: Side, neighbour: &BlockId) -> bool {
        self.compatibility
            .get(side.index())
            .is_some_and(|set| set.contains(neighbour))
    }
}

/// Ordered, indexed collection of the blocks available to a world
///
/// Iteration follows insertion order so that a fixed seed always walks the
/// candidates in the same order.
#[derive(Debug, Clone, Default)]
pub struct BlockCatalog {
    blocks: Vec<Block>,
    index: HashMap<BlockId, usize>,
}

impl BlockCatalog {
    /// Build a catalog, rejecting duplicate ids
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if two blocks share an id
    pub fn new(blocks: impl IntoIterator<Item = Block>) -> Result<Self> {
        let mut catalog = Self::default();
        for block in blocks {
            if catalog.index.contains_key(block.id()) {
                return Err(invalid_catalog(&format!(
                    "block '{}' is defined more than once",
                    block.id()
                )));
            }
            catalog.index.insert(block.id().clone(), catalog.blocks.len());
            catalog.blocks.push(block);
        }
        Ok(catalog)
    }

    /// Look up a block by id
    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.index.get(id).and_then(|&i| self.blocks.get(i))
    }

    /// Whether the catalog defines `id`
    pub fn contains(&self, id: &BlockId) -> bool {
        self.index.contains_key(id)
    }

    /// Blocks in definition order
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Number of blocks
    pub const fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the catalog has no blocks
    pub const fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Compatibility entries that name ids missing from the catalog
    ///
    /// Returned as `(block, side, missing id)` triples.
    pub fn dangling_references(&self) -> Vec<(&BlockId, Side, &BlockId)> {
        let mut dangling = Vec::new();
        for block in &self.blocks {
            for side in Side::ALL {
                for neighbour in block.compatible(side) {
                    if !self.contains(neighbour) {
                        dangling.push((block.id(), side, neighbour));
                    }
                }
            }
        }
        dangling
    }
}

impl<'a> IntoIterator for &'a BlockCatalog {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
