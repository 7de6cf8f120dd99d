//! Fixed-size world grid with road line-fill and region flood-fill
//!
//! The grid owns one [`CellType`] per cell, stored contiguously and indexed
//! `[x, y]`. Generation code mutates it through [`Grid::fill_line`] and
//! [`Grid::fill_region`] only; downstream consumers read it through
//! [`Grid::cells`], [`Grid::get`] and the world-space bounds queries.

use std::collections::HashSet;

use ndarray::{Array2, ArrayView2};
use tracing::{debug, error, warn};

use crate::io::configuration::GridConfig;
use crate::io::error::Result;
use crate::spatial::bounds::Bounds;
use crate::spatial::coordinate::Coordinate;

/// Classification of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellType {
    /// Unclaimed space
    #[default]
    Empty,
    /// Carved road
    Road,
    /// Building lot enclosed by roads
    Lot,
    /// Open green space enclosed by roads
    Park,
}

impl CellType {
    /// Every classification, in declaration order
    pub const ALL: [Self; 4] = [Self::Empty, Self::Road, Self::Lot, Self::Park];
}

/// Grid axis along which a line run varies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Run varies the first index; the fixed point is the second index
    X,
    /// Run varies the second index; the fixed point is the first index
    Y,
}

// Push order for flood-fill neighbours (full 8-connectivity)
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
    (1, 0),
    (0, 1),
    (0, -1),
];

/// Discrete world grid owned by one generation session
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2<CellType>,
    cell_size: f32,
    real_width: f32,
    real_height: f32,
    strict_checks: bool,
}

impl Default for Grid {
    fn default() -> Self {
        Self::from_config(GridConfig::default())
    }
}

impl Grid {
    /// Create a grid with every cell set to [`CellType::Empty`]
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: GridConfig) -> Self {
        Self {
            cells: Array2::from_elem((config.width, config.height), CellType::Empty),
            cell_size: config.cell_size,
            real_width: config.width as f32 * config.cell_size,
            real_height: config.height as f32 * config.cell_size,
            strict_checks: config.strict_checks,
        }
    }

    /// Number of cells along the first axis
    pub fn width(&self) -> usize {
        self.cells.dim().0
    }

    /// Number of cells along the second axis
    pub fn height(&self) -> usize {
        self.cells.dim().1
    }

    /// World units per cell
    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Whether contract violations abort
    pub const fn strict_checks(&self) -> bool {
        self.strict_checks
    }

    /// Check if a coordinate addresses a cell of this grid
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.is_valid(self.width(), self.height())
    }

    /// Classification at a coordinate, or `None` outside the grid
    pub fn get(&self, coordinate: Coordinate) -> Option<CellType> {
        coordinate
            .to_index(self.width(), self.height())
            .and_then(|index| self.cells.get(index))
            .copied()
    }

    /// Read-only view of the cell array, indexed `[x, y]`
    pub fn cells(&self) -> ArrayView2<'_, CellType> {
        self.cells.view()
    }

    /// Number of cells holding `kind`
    pub fn count(&self, kind: CellType) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }

    /// Cell counts for every classification
    pub fn census(&self) -> [(CellType, usize); 4] {
        let mut counts = CellType::ALL.map(|kind| (kind, 0));
        for &cell in &self.cells {
            if let Some(entry) = counts.iter_mut().find(|(kind, _)| *kind == cell) {
                entry.1 += 1;
            }
        }
        counts
    }

    /// Paint a straight run of cells along one axis
    ///
    /// Every index `i` in `start..end` is written: `(i, axis_point)` for
    /// [`Axis::X`], `(axis_point, i)` for [`Axis::Y`]. The end bound is
    /// exclusive.
    ///
    /// The caller must guarantee `start <= end < dimension(axis)` and
    /// `axis_point < dimension(other axis)`. Without strict checks a violation
    /// is logged and only the cells that lie inside the grid are written.
    ///
    /// # Panics
    ///
    /// Panics if strict checks are enabled and the arguments break the contract
    pub fn fill_line(
        &mut self,
        start: usize,
        end: usize,
        axis_point: usize,
        axis: Axis,
        fill: CellType,
    ) {
        let (width, height) = (self.width(), self.height());
        let (run_dimension, fixed_dimension) = match axis {
            Axis::X => (width, height),
            Axis::Y => (height, width),
        };

        if start > end || end >= run_dimension || axis_point >= fixed_dimension {
            assert!(
                !self.strict_checks,
                "fill_line contract violated: {start}..{end} at {axis_point} along {axis:?} on a {width}x{height} grid"
            );
            warn!(
                start,
                end,
                axis_point,
                ?axis,
                width,
                height,
                "fill_line arguments outside the grid, writing in-grid cells only"
            );
        }

        for i in start..end.min(run_dimension) {
            let index = match axis {
                Axis::X => [i, axis_point],
                Axis::Y => [axis_point, i],
            };
            if let Some(cell) = self.cells.get_mut(index) {
                *cell = fill;
            }
        }
    }

    /// Replace the 8-connected region containing `(x, y)` with `fill`
    ///
    /// The region is every cell reachable from the seed through neighbours
    /// (diagonals included) holding the seed's value at the time of the call.
    /// Traversal uses an explicit stack, so region size is bounded only by the
    /// grid, and work is proportional to the region rather than the grid.
    /// Returns the number of cells painted; a seed outside the grid is logged
    /// and paints nothing.
    ///
    /// # Panics
    ///
    /// Panics if strict checks are enabled and the seed lies outside the grid
    pub fn fill_region(&mut self, x: i32, y: i32, fill: CellType) -> usize {
        let (width, height) = (self.width(), self.height());
        let seed = Coordinate::new(x, y);

        let Some(seed_index) = seed.to_index(width, height) else {
            error!(%seed, width, height, "attempted to flood-fill outside of grid");
            assert!(
                !self.strict_checks,
                "flood-fill seed {seed} outside of a {width}x{height} grid"
            );
            return 0;
        };

        // Captured before any write: the value being replaced
        let Some(&target) = self.cells.get(seed_index) else {
            return 0;
        };

        // Painted cells stop matching the target unless fill == target, so
        // visits are only tracked in that case
        let mut visited = (fill == target).then(HashSet::new);
        let mut stack = vec![seed];
        let mut painted = 0;

        while let Some(current) = stack.pop() {
            let Some(index) = current.to_index(width, height) else {
                continue;
            };
            let Some(cell) = self.cells.get_mut(index) else {
                continue;
            };
            if *cell != target {
                continue;
            }
            if visited
                .as_mut()
                .is_some_and(|seen| !seen.insert(current))
            {
                continue;
            }

            *cell = fill;
            painted += 1;

            stack.extend(
                NEIGHBOR_OFFSETS
                    .iter()
                    .map(|&(dx, dy)| current.offset(dx, dy)),
            );
        }

        debug!(%seed, ?target, ?fill, painted, "flood-fill complete");
        painted
    }

    /// Full world-space extent of the grid
    pub fn real_bounds(&self) -> Bounds {
        Bounds::new(0.0, self.real_width, 0.0, self.real_height)
    }

    /// World-space extent of a single cell
    pub fn cell_bounds(&self, coordinate: Coordinate) -> Option<Bounds> {
        let [x, y] = coordinate.to_index(self.width(), self.height())?;
        let min_x = x as f32 * self.cell_size;
        let min_y = y as f32 * self.cell_size;
        Some(Bounds::new(
            min_x,
            min_x + self.cell_size,
            min_y,
            min_y + self.cell_size,
        ))
    }
}
