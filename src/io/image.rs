//! PNG export of the cell classification, one pixel per cell

use crate::io::error::{LayoutError, Result};
use crate::spatial::grid::{CellType, Grid};
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Diagnostic color for a classification
///
/// Purely an inspection aid; visual style of the rendered world is decided
/// elsewhere.
pub const fn cell_color(cell: CellType) -> [u8; 4] {
    match cell {
        CellType::Empty => [0, 0, 0, 0],
        CellType::Road => [64, 64, 72, 255],
        CellType::Lot => [196, 160, 112, 255],
        CellType::Park => [88, 164, 76, 255],
    }
}

/// Export the grid as a PNG image
///
/// Image columns follow the first grid axis and image rows the second, so
/// pixel `(x, y)` shows cell `[x, y]`. Empty cells are transparent.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &Grid, output_path: &Path) -> Result<()> {
    let cells = grid.cells();
    let (width, height) = cells.dim();

    let img = ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
        let cell = cells
            .get([x as usize, y as usize])
            .copied()
            .unwrap_or_default();
        Rgba(cell_color(cell))
    });

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| LayoutError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| LayoutError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(path = %output_path.display(), width, height, "grid exported as png");
    Ok(())
}
