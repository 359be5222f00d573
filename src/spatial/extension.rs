//! Grid expansion utilities for bounds that only ever grow
//!
//! Computes the padding needed on each side to cover a target rectangle and
//! copies an existing array into a larger one. Rows of the stored array run
//! from the top of the world (largest y) downward, so growth upward is
//! `pad_top` and growth toward negative y is `pad_bottom`.

use ndarray::Array2;

use crate::spatial::grid::{BoundingBox, Cell};

/// Trait for types that can be extended with padding
pub trait Extendable {
    /// The value to use for padding new cells
    fn padding_value() -> Self;
}

impl Extendable for Cell {
    fn padding_value() -> Self {
        Self::Unvisited
    }
}

/// Padding required to grow a grid so it covers a target rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionInfo {
    /// New columns before the current first column (toward negative x)
    pub pad_left: usize,
    /// New columns after the current last column (toward positive x)
    pub pad_right: usize,
    /// New rows above the current first row (toward positive y)
    pub pad_top: usize,
    /// New rows below the current last row (toward negative y)
    pub pad_bottom: usize,
    /// Bounds after extension (union of current and target)
    pub new_bounds: BoundingBox,
    /// Whether extension is actually required
    pub needs_extension: bool,
}

/// Calculate the extension needed so `current` covers `target`
pub fn calculate_extension(current: &BoundingBox, target: &BoundingBox) -> ExtensionInfo {
    let new_bounds = current.union(target);

    let pad_left = (current.min[0] - new_bounds.min[0]) as usize;
    let pad_right = (new_bounds.max[0] - current.max[0]) as usize;
    let pad_top = (new_bounds.max[1] - current.max[1]) as usize;
    let pad_bottom = (current.min[1] - new_bounds.min[1]) as usize;

    let needs_extension = pad_left + pad_right + pad_top + pad_bottom > 0;

    ExtensionInfo {
        pad_left,
        pad_right,
        pad_top,
        pad_bottom,
        new_bounds,
        needs_extension,
    }
}

/// Extend a 2D array with padding
///
/// Copies existing data to its shifted position in the new array while
/// filling new cells with the specified padding value.
pub fn extend_array_2d<T: Clone>(
    array: &Array2<T>,
    info: &ExtensionInfo,
    padding_value: T,
) -> Array2<T> {
    let (old_rows, old_cols) = array.dim();
    let new_shape = [
        old_rows + info.pad_top + info.pad_bottom,
        old_cols + info.pad_left + info.pad_right,
    ];

    let mut new_array = Array2::from_elem(new_shape, padding_value);

    // O(mn) copy preserves spatial relationships
    for i in 0..old_rows {
        for j in 0..old_cols {
            if let (Some(src), Some(dst)) = (
                array.get([i, j]),
                new_array.get_mut([i + info.pad_top, j + info.pad_left]),
            ) {
                *dst = src.clone();
            }
        }
    }

    new_array
}
