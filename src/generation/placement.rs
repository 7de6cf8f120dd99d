//! World-space placement sites derived from cell classification

use crate::spatial::bounds::Bounds;
use crate::spatial::coordinate::Coordinate;
use crate::spatial::grid::{CellType, Grid};

// Orthogonal neighbours only: a diagonal road does not give street access
const FRONTAGE_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A cell where an object may be placed, with its world-space footprint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementSite {
    /// Grid cell of the site
    pub coordinate: Coordinate,
    /// World-space extent of the cell
    pub bounds: Bounds,
}

/// Every cell of `kind`, in x-major order
pub fn placement_sites(grid: &Grid, kind: CellType) -> Vec<PlacementSite> {
    grid.cells()
        .indexed_iter()
        .filter(|&(_, &cell)| cell == kind)
        .filter_map(|((x, y), _)| site_at(grid, Coordinate::new(x as i32, y as i32)))
        .collect()
}

/// Cells of `kind` that touch a road along an edge
pub fn frontage_sites(grid: &Grid, kind: CellType) -> Vec<PlacementSite> {
    placement_sites(grid, kind)
        .into_iter()
        .filter(|site| {
            FRONTAGE_OFFSETS.iter().any(|&(dx, dy)| {
                grid.get(site.coordinate.offset(dx, dy)) == Some(CellType::Road)
            })
        })
        .collect()
}

fn site_at(grid: &Grid, coordinate: Coordinate) -> Option<PlacementSite> {
    grid.cell_bounds(coordinate)
        .map(|bounds| PlacementSite { coordinate, bounds })
}
