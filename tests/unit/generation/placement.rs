//! Tests for world-space placement site queries

#[cfg(test)]
mod tests {
    use citygrid::generation::placement::{frontage_sites, placement_sites};
    use citygrid::{Axis, Bounds, CellType, Coordinate, Grid, GridConfig, LayoutError};

    // Road ring covering x and y in 1..=5 with a lot inside
    fn block_grid() -> Result<Grid, LayoutError> {
        let mut grid = Grid::new(GridConfig::new(8, 8, 2.0))?;
        grid.fill_line(1, 6, 1, Axis::X, CellType::Road);
        grid.fill_line(1, 6, 5, Axis::X, CellType::Road);
        grid.fill_line(1, 6, 1, Axis::Y, CellType::Road);
        grid.fill_line(1, 6, 5, Axis::Y, CellType::Road);
        grid.fill_region(3, 3, CellType::Lot);
        Ok(grid)
    }

    #[test]
    fn test_placement_sites_list_every_matching_cell() -> Result<(), LayoutError> {
        let grid = block_grid()?;
        let sites = placement_sites(&grid, CellType::Lot);

        assert_eq!(sites.len(), 9);
        let first = sites.first().map(|site| (site.coordinate, site.bounds));
        assert_eq!(
            first,
            Some((Coordinate::new(2, 2), Bounds::new(4.0, 6.0, 4.0, 6.0)))
        );
        Ok(())
    }

    #[test]
    fn test_sites_lie_within_grid_bounds() -> Result<(), LayoutError> {
        let grid = block_grid()?;
        let world = grid.real_bounds();

        for site in placement_sites(&grid, CellType::Empty) {
            assert!(world.encloses(&site.bounds));
        }
        Ok(())
    }

    // Tests that only cells sharing an edge with a road have frontage
    #[test]
    fn test_frontage_excludes_interior_cells() -> Result<(), LayoutError> {
        let grid = block_grid()?;
        let frontage = frontage_sites(&grid, CellType::Lot);

        assert_eq!(frontage.len(), 8);
        assert!(
            frontage
                .iter()
                .all(|site| site.coordinate != Coordinate::new(3, 3))
        );
        Ok(())
    }

    #[test]
    fn test_no_sites_for_absent_kind() -> Result<(), LayoutError> {
        let grid = block_grid()?;
        assert!(placement_sites(&grid, CellType::Park).is_empty());
        assert!(frontage_sites(&grid, CellType::Park).is_empty());
        Ok(())
    }
}
