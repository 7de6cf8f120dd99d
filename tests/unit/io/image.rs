//! Tests for PNG export of grid state

#[cfg(test)]
mod tests {
    use citygrid::io::image::{cell_color, export_grid_as_png};
    use citygrid::{Axis, CellType, Grid, GridConfig, LayoutError};
    use tempfile::TempDir;

    // Tests that export creates parent directories and writes one pixel per cell
    #[test]
    fn test_export_writes_one_pixel_per_cell() -> Result<(), Box<dyn std::error::Error>> {
        let mut grid = Grid::new(GridConfig::new(6, 4, 1.0))?;
        grid.fill_line(0, 5, 1, Axis::X, CellType::Road);
        grid.fill_region(0, 3, CellType::Lot);

        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("grid.png");
        export_grid_as_png(&grid, &path)?;

        let img = image::open(&path)?.to_rgba8();
        assert_eq!(img.dimensions(), (6, 4));
        assert_eq!(img.get_pixel(2, 1).0, cell_color(CellType::Road));
        assert_eq!(img.get_pixel(0, 3).0, cell_color(CellType::Lot));
        // The road stops one cell short of the edge, joining both sides into one lot
        assert_eq!(img.get_pixel(5, 1).0, cell_color(CellType::Lot));
        assert_eq!(img.get_pixel(0, 0).0, cell_color(CellType::Lot));
        Ok(())
    }

    #[test]
    fn test_empty_cells_are_transparent() -> Result<(), Box<dyn std::error::Error>> {
        let grid = Grid::new(GridConfig::new(3, 3, 1.0))?;
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("empty.png");
        export_grid_as_png(&grid, &path)?;

        let img = image::open(&path)?.to_rgba8();
        assert!(img.pixels().all(|pixel| pixel.0[3] == 0));
        for kind in [CellType::Road, CellType::Lot, CellType::Park] {
            assert_eq!(cell_color(kind)[3], 255);
        }
        Ok(())
    }

    #[test]
    fn test_export_reports_unwritable_path() -> Result<(), Box<dyn std::error::Error>> {
        let grid = Grid::new(GridConfig::new(2, 2, 1.0))?;
        let temp_dir = TempDir::new()?;
        let blocker = temp_dir.path().join("file");
        std::fs::write(&blocker, b"not a directory")?;

        let result = export_grid_as_png(&grid, &blocker.join("grid.png"));
        assert!(matches!(result, Err(LayoutError::FileSystem { .. })));
        Ok(())
    }
}
