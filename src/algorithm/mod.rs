/// World orchestration and quadrant spiral fill
pub mod executor;
/// Neighbour-constrained block selection
pub mod selection;
/// Placement history of one world
pub mod tracker;
