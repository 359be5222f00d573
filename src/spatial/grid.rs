//! Grid store with bounds that grow on demand around the origin
//!
//! Cells are addressed by world coordinates `(x, y)`. Internally the grid is a
//! dense `Array2` whose first row holds the largest `y`, which makes display
//! order (top row first) a plain row-major walk.

use std::fmt;

use ndarray::Array2;

use crate::io::error::{Result, WorldError, invalid_parameter};
use crate::spatial::blocks::BlockId;
use crate::spatial::extension::{Extendable, calculate_extension, extend_array_2d};

/// Axis-aligned rectangle in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Minimum coordinates `[x, y]` (inclusive)
    pub min: [i32; 2],
    /// Maximum coordinates `[x, y]` (inclusive)
    pub max: [i32; 2],
}

impl BoundingBox {
    /// Create a rectangle from its corners
    ///
    /// # Errors
    ///
    /// Returns `InvalidRegion` if `min` exceeds `max` on either axis
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Result<Self> {
        let region = Self {
            min: [min_x, min_y],
            max: [max_x, max_y],
        };
        region.validate()?;
        Ok(region)
    }

    /// Square spanning `[-size/2, size/2]` on both axes
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `size / 2` does not fit in an `i32`
    pub fn centered(size: usize) -> Result<Self> {
        let half = i32::try_from(size / 2)
            .map_err(|e| invalid_parameter("initialMapSize", &size, &e))?;
        Ok(Self {
            min: [-half, -half],
            max: [half, half],
        })
    }

    /// Whether `min <= max` on both axes
    pub const fn is_valid(&self) -> bool {
        self.min[0] <= self.max[0] && self.min[1] <= self.max[1]
    }

    /// Reject rectangles whose corners are swapped
    ///
    /// # Errors
    ///
    /// Returns `InvalidRegion` if `min` exceeds `max` on either axis
    pub const fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(WorldError::InvalidRegion {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Check if a position is within the bounds
    pub const fn contains(&self, pos: [i32; 2]) -> bool {
        pos[0] >= self.min[0]
            && pos[0] <= self.max[0]
            && pos[1] >= self.min[1]
            && pos[1] <= self.max[1]
    }

    /// Check if another rectangle lies fully inside this one
    pub const fn contains_box(&self, other: &Self) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: [self.min[0].min(other.min[0]), self.min[1].min(other.min[1])],
            max: [self.max[0].max(other.max[0]), self.max[1].max(other.max[1])],
        }
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.max[0].abs_diff(self.min[0]) as usize + 1
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.max[1].abs_diff(self.min[1]) as usize + 1
    }

    /// Positions in display order: decreasing y, then increasing x
    pub fn positions(&self) -> impl Iterator<Item = [i32; 2]> + use<> {
        let (min, max) = (self.min, self.max);
        (min[1]..=max[1])
            .rev()
            .flat_map(move |y| (min[0]..=max[0]).map(move |x| [x, y]))
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})..({}, {})",
            self.min[0], self.min[1], self.max[0], self.max[1]
        )
    }
}

/// Generation state of one grid position
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Not generated yet
    #[default]
    Unvisited,
    /// Decided, holds no block
    Empty,
    /// Decided, holds the given block
    Occupied(BlockId),
}

impl Cell {
    /// Whether generation has already decided this cell
    pub const fn is_decided(&self) -> bool {
        !matches!(self, Self::Unvisited)
    }

    /// Block held by the cell, if any
    pub const fn block_id(&self) -> Option<&BlockId> {
        match self {
            Self::Occupied(id) => Some(id),
            Self::Unvisited | Self::Empty => None,
        }
    }
}

impl From<Option<BlockId>> for Cell {
    fn from(block: Option<BlockId>) -> Self {
        block.map_or(Self::Empty, Self::Occupied)
    }
}

/// Dense cell storage over bounds that only grow
#[derive(Debug, Clone)]
pub struct GridStore {
    cells: Array2<Cell>,
    bounds: BoundingBox,
}

impl GridStore {
    /// Allocate a grid covering `[-size/2, size/2]` on both axes
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the size cannot be addressed with `i32`
    /// coordinates
    pub fn new(initial_size: usize) -> Result<Self> {
        let bounds = BoundingBox::centered(initial_size)?;
        Ok(Self {
            cells: Array2::from_elem([bounds.height(), bounds.width()], Cell::padding_value()),
            bounds,
        })
    }

    /// Current materialized bounds
    pub const fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Number of materialized columns
    pub const fn width(&self) -> usize {
        self.bounds.width()
    }

    /// Number of materialized rows
    pub const fn height(&self) -> usize {
        self.bounds.height()
    }

    const fn index_of(&self, x: i32, y: i32) -> Option<[usize; 2]> {
        if !self.bounds.contains([x, y]) {
            return None;
        }
        Some([
            (self.bounds.max[1] - y) as usize,
            (x - self.bounds.min[0]) as usize,
        ])
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> WorldError {
        WorldError::OutOfBounds {
            position: [x, y],
            bounds: self.bounds,
        }
    }

    /// Cell at `(x, y)`, or `None` outside the bounds
    pub fn try_get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index_of(x, y).and_then(|index| self.cells.get(index))
    }

    /// Cell at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position is not materialized
    pub fn get(&self, x: i32, y: i32) -> Result<&Cell> {
        self.try_get(x, y).ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Decide the cell at `(x, y)`: `None` marks it empty
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position is not materialized
    pub fn set(&mut self, x: i32, y: i32, block: Option<BlockId>) -> Result<()> {
        let error = self.out_of_bounds(x, y);
        let cell = self
            .index_of(x, y)
            .and_then(|index| self.cells.get_mut(index))
            .ok_or(error)?;
        *cell = Cell::from(block);
        Ok(())
    }

    /// Whether `region` lies fully inside the current bounds
    pub const fn is_inside_bounds(&self, region: &BoundingBox) -> bool {
        self.bounds.contains_box(region)
    }

    /// Grow the bounds to cover `region`
    ///
    /// Existing cells keep their coordinates and values; new cells start
    /// unvisited. Returns whether any growth happened.
    pub fn expand(&mut self, region: &BoundingBox) -> bool {
        let info = calculate_extension(&self.bounds, region);
        if !info.needs_extension {
            return false;
        }

        self.cells = extend_array_2d(&self.cells, &info, Cell::padding_value());
        self.bounds = info.new_bounds;
        true
    }

    /// Copy of the cells in `region`, top row (largest y) first
    ///
    /// # Errors
    ///
    /// Returns `InvalidRegion` if the corners of `region` are swapped, or
    /// `OutOfBounds` if `region` is not fully materialized
    pub fn get_submatrix(&self, region: &BoundingBox) -> Result<Vec<Vec<Cell>>> {
        region.validate()?;
        if !self.is_inside_bounds(region) {
            let corner = if self.bounds.contains(region.min) {
                region.max
            } else {
                region.min
            };
            return Err(self.out_of_bounds(corner[0], corner[1]));
        }

        let mut rows = Vec::with_capacity(region.height());
        for y in (region.min[1]..=region.max[1]).rev() {
            let mut row = Vec::with_capacity(region.width());
            for x in region.min[0]..=region.max[0] {
                row.push(self.get(x, y)?.clone());
            }
            rows.push(row);
        }
        Ok(rows)
    }

    /// Copy of the whole materialized grid, top row first
    pub fn get_all(&self) -> Vec<Vec<Cell>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect()
    }

    /// Number of cells that are no longer unvisited
    pub fn decided_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_decided()).count()
    }
}
