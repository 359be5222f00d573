//! Plain-text rendering of map snapshots

use crate::algorithm::executor::{MapEntry, TileMap};
use crate::io::configuration::{EMPTY_LABEL, UNVISITED_LABEL};
use crate::spatial::grid::Cell;

fn label(entry: &MapEntry) -> &str {
    match &entry.cell {
        Cell::Occupied(id) => id.as_str(),
        Cell::Empty => EMPTY_LABEL,
        Cell::Unvisited => UNVISITED_LABEL,
    }
}

/// Render a map as one line per row, top row first
///
/// Cells are separated by a single space and left-aligned to the widest
/// label so columns line up.
pub fn render_table(map: &TileMap) -> String {
    let width = map
        .iter()
        .map(|entry| label(entry).chars().count())
        .max()
        .unwrap_or(0);

    map.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|entry| format!("{:<width$}", label(entry)))
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
