//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Block definitions and the block catalog
//! - The grid store and its expansion
//! - Quadrant decomposition around the origin

/// Block identifiers, sides and catalog
pub mod blocks;
/// Grid expansion utilities
pub mod extension;
/// Grid store and cell states
pub mod grid;
/// Quadrant decomposition of rectangles
pub mod quadrants;

pub use grid::{BoundingBox, Cell, GridStore};
