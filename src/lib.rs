//! Lazily generated, unbounded 2D tile world filled outward from the origin
//!
//! Callers request rectangular windows of the world. Every undecided cell in
//! a window is decided before it is returned, walking each of the four
//! quadrants around `(0, 0)` outward so that a cell's neighbours nearer the
//! origin are always known when its block is chosen.

#![forbid(unsafe_code)]

/// World orchestration, block selection and placement bookkeeping
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Blocks, the resizable grid store and quadrant geometry
pub mod spatial;

pub use algorithm::executor::{MapEntry, TileMap, World};
pub use io::error::{Result, WorldError};
