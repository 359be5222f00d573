use crate::{
    algorithm::selection::{BlockSelector, Neighbours},
    algorithm::tracker::GenerationTracker,
    io::configuration::{DEFAULT_INITIAL_MAP_SIZE, MAX_INITIAL_MAP_SIZE, WorldConstraints},
    io::error::{Result, WorldError, invalid_parameter},
    spatial::blocks::{BlockCatalog, BlockId, Side},
    spatial::grid::{BoundingBox, Cell, GridStore},
    spatial::quadrants::Quadrant,
};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// One decided (or still undecided) position in a returned map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    /// World x coordinate
    pub x: i32,
    /// World y coordinate
    pub y: i32,
    /// Generation state at the time of the snapshot
    pub cell: Cell,
}

impl MapEntry {
    /// Block at this position, if any
    pub const fn block_id(&self) -> Option<&BlockId> {
        self.cell.block_id()
    }
}

/// Owned snapshot of a rectangle of the world
///
/// Rows run from the largest y down, columns from the smallest x up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    bounds: BoundingBox,
    rows: Vec<Vec<MapEntry>>,
}

impl TileMap {
    /// Attach world coordinates to a matrix laid out in display order
    pub fn from_matrix(bounds: BoundingBox, matrix: Vec<Vec<Cell>>) -> Self {
        let rows = matrix
            .into_iter()
            .zip((bounds.min[1]..=bounds.max[1]).rev())
            .map(|(row, y)| {
                row.into_iter()
                    .zip(bounds.min[0]..=bounds.max[0])
                    .map(|(cell, x)| MapEntry { x, y, cell })
                    .collect()
            })
            .collect();
        Self { bounds, rows }
    }

    /// Rectangle covered by the snapshot
    pub const fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Rows in display order
    pub fn rows(&self) -> &[Vec<MapEntry>] {
        &self.rows
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.bounds.width()
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.bounds.height()
    }

    /// Entry at world position `(x, y)`
    pub fn get(&self, x: i32, y: i32) -> Option<&MapEntry> {
        if !self.bounds.contains([x, y]) {
            return None;
        }
        self.rows
            .get((self.bounds.max[1] - y) as usize)
            .and_then(|row| row.get((x - self.bounds.min[0]) as usize))
    }

    /// All entries in display order
    pub fn iter(&self) -> impl Iterator<Item = &MapEntry> {
        self.rows.iter().flatten()
    }

    /// Whether every entry has been decided
    pub fn is_fully_decided(&self) -> bool {
        self.iter().all(|entry| entry.cell.is_decided())
    }
}

/// A lazily generated world
///
/// Owns the grid, the placement history and the random source. The block
/// catalog is shared read-only between worlds.
#[derive(Debug, Clone)]
pub struct World {
    grid: GridStore,
    tracker: GenerationTracker,
    catalog: Arc<BlockCatalog>,
    selector: BlockSelector,
    constraints: WorldConstraints,
}

impl World {
    /// Create a world and place the configured initial block at the origin
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The initial map size exceeds `MAX_INITIAL_MAP_SIZE`
    /// - The initial block is not in the catalog
    pub fn init(
        constraints: WorldConstraints,
        catalog: Arc<BlockCatalog>,
        selector: BlockSelector,
    ) -> Result<Self> {
        let initial_size = constraints
            .initial_map_size
            .unwrap_or(DEFAULT_INITIAL_MAP_SIZE);
        if initial_size > MAX_INITIAL_MAP_SIZE {
            return Err(invalid_parameter(
                "initialMapSize",
                &initial_size,
                &format!("must be at most {MAX_INITIAL_MAP_SIZE}"),
            ));
        }

        let mut world = Self {
            grid: GridStore::new(initial_size)?,
            tracker: GenerationTracker::new(),
            catalog,
            selector,
            constraints,
        };

        if let Some(id) = world.constraints.initial_block.clone() {
            if !world.catalog.contains(&id) {
                return Err(WorldError::UnknownBlock { id });
            }
            world.grid.set(0, 0, Some(id.clone()))?;
            world.tracker.record_placement(&id);
            debug!(block = %id, "placed initial block at origin");
        }

        Ok(world)
    }

    /// Materialized grid
    pub const fn grid(&self) -> &GridStore {
        &self.grid
    }

    /// Placement history
    pub const fn tracker(&self) -> &GenerationTracker {
        &self.tracker
    }

    /// Shared block catalog
    pub fn catalog(&self) -> &BlockCatalog {
        &self.catalog
    }

    /// Constraints the world was created with
    pub const fn constraints(&self) -> &WorldConstraints {
        &self.constraints
    }

    /// Current state at `(x, y)` without generating anything
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position has not been materialized
    pub fn get_at_position(&self, x: i32, y: i32) -> Result<&Cell> {
        self.grid.get(x, y)
    }

    /// Decide every cell in `region` and return it
    ///
    /// # Errors
    ///
    /// Returns `InvalidRegion` if the corners of `region` are swapped.
    /// Returns `OutOfBounds` only if the grid failed to cover `region` after
    /// expansion, which indicates a bug in the grid store
    #[instrument(skip_all, fields(region = %region))]
    pub fn get_partial_map(&mut self, region: &BoundingBox) -> Result<TileMap> {
        region.validate()?;
        if self.grid.expand(region) {
            debug!(bounds = %self.grid.bounds(), "expanded grid");
        }

        let mut matrix = self.grid.get_submatrix(region)?;
        let all_decided = matrix.iter().flatten().all(Cell::is_decided);

        if !all_decided {
            self.generate(region)?;
            matrix = self.grid.get_submatrix(region)?;
        }

        Ok(TileMap::from_matrix(*region, matrix))
    }

    /// Snapshot of everything materialized so far, decided or not
    pub fn get_map(&self) -> TileMap {
        TileMap::from_matrix(self.grid.bounds(), self.grid.get_all())
    }

    /// Decide every unvisited cell of `region`, quadrant by quadrant
    ///
    /// # Errors
    ///
    /// Returns `InvalidRegion` if the corners of `region` are swapped.
    /// Returns `OutOfBounds` if the grid cannot be addressed at a generated
    /// position, which indicates a bug in the grid store
    pub fn generate(&mut self, region: &BoundingBox) -> Result<()> {
        region.validate()?;
        self.grid.expand(region);

        for (quadrant, part) in Quadrant::decompose(region) {
            debug!(?quadrant, bounds = %part, "filling quadrant");
            self.fill_quadrant(quadrant, &part)?;
        }

        Ok(())
    }

    /// Shrinking spiral fill of one quadrant's part of a request
    ///
    /// Each pass decides the row nearest the origin, then the column nearest
    /// the origin, then moves the near corner one step outward. Neighbours
    /// between this cell and the origin are therefore decided before it.
    fn fill_quadrant(&mut self, quadrant: Quadrant, part: &BoundingBox) -> Result<()> {
        let [sx, sy] = quadrant.outward();
        let far = quadrant.far_corner(part);
        let mut near = quadrant.near_corner(part);

        loop {
            for x in walk(near[0], far[0]) {
                self.generate_if_unvisited(x, near[1])?;
            }

            // The corner cell was covered by the row
            if near[1] != far[1] {
                for y in walk(near[1] + sy, far[1]) {
                    self.generate_if_unvisited(near[0], y)?;
                }
            }

            if near == far {
                return Ok(());
            }

            if near[0] != far[0] {
                near[0] += sx;
            }
            if near[1] != far[1] {
                near[1] += sy;
            }
        }
    }

    fn generate_if_unvisited(&mut self, x: i32, y: i32) -> Result<()> {
        if self.grid.get(x, y)?.is_decided() {
            return Ok(());
        }
        self.generate_at_position(x, y)
    }

    fn generate_at_position(&mut self, x: i32, y: i32) -> Result<()> {
        let neighbours = self.build_neighbours(x, y);
        let block = self
            .selector
            .select_block(&neighbours, &self.catalog, &self.tracker);

        trace!(x, y, block = ?block.as_ref().map(BlockId::as_str), "generated cell");

        if let Some(id) = &block {
            self.tracker.record_placement(id);
        }
        self.grid.set(x, y, block)
    }

    fn build_neighbours(&self, x: i32, y: i32) -> Neighbours {
        let mut neighbours = Neighbours::open();
        for side in Side::ALL {
            let [dx, dy] = side.offset();
            let id = self
                .grid
                .try_get(x + dx, y + dy)
                .and_then(Cell::block_id)
                .cloned();
            neighbours.set(side, id);
        }
        neighbours
    }
}

/// Inclusive walk from `from` to `to` in whichever direction `to` lies
fn walk(from: i32, to: i32) -> impl Iterator<Item = i32> {
    let step = (to - from).signum();
    (0..=(to - from).abs()).map(move |i| from + i * step)
}
