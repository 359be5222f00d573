//! PNG export of map snapshots with transparent undecided and empty cells

use crate::algorithm::executor::TileMap;
use crate::io::configuration::MAX_PNG_SCALE;
use crate::io::error::{Result, WorldError, invalid_parameter};
use crate::spatial::blocks::BlockId;
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Stable colour for a block id
///
/// FNV-1a over the id bytes, so the same id always gets the same colour
/// across runs and worlds.
pub fn block_color(id: &BlockId) -> Rgba<u8> {
    let hash = id.as_str().bytes().fold(0xcbf2_9ce4_8422_2325_u64, |acc, byte| {
        (acc ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    });
    let [r, g, b, ..] = hash.to_le_bytes();
    Rgba([r, g, b, 255])
}

/// Export a map as a PNG image, one `scale`×`scale` square per cell
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero or above `MAX_PNG_SCALE`
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_map_as_png(map: &TileMap, scale: u32, output_path: &Path) -> Result<()> {
    if scale == 0 || scale > MAX_PNG_SCALE {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &format!("must be between 1 and {MAX_PNG_SCALE}"),
        ));
    }

    let width = map.width() as u32 * scale;
    let height = map.height() as u32 * scale;
    let mut img = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    for (row_index, row) in map.rows().iter().enumerate() {
        for (col_index, entry) in row.iter().enumerate() {
            let Some(id) = entry.block_id() else {
                continue;
            };
            let color = block_color(id);
            let origin_x = col_index as u32 * scale;
            let origin_y = row_index as u32 * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(origin_x + dx, origin_y + dy, color);
                }
            }
        }
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| WorldError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| WorldError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
