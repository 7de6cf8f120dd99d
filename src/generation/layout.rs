//! Seeded city layout driver
//!
//! Carves a ring road around the grid, then randomly spaced avenues and
//! streets, and finally classifies every enclosed block as a lot or a park
//! with one flood-fill per block. The same seed and configuration always
//! produce the same layout on a grid of the same size.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::io::configuration::{
    DEFAULT_BLOCK_MAX, DEFAULT_BLOCK_MIN, DEFAULT_PARK_RATIO, MAX_GRID_DIMENSION,
};
use crate::io::error::{LayoutError, Result};
use crate::spatial::coordinate::Coordinate;
use crate::spatial::grid::{Axis, CellType, Grid};

/// Parameters controlling road spacing and block classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Smallest number of cells between two parallel roads
    pub block_min: usize,
    /// Largest number of cells between two parallel roads
    pub block_max: usize,
    /// Probability that a block becomes a park
    pub park_ratio: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            block_min: DEFAULT_BLOCK_MIN,
            block_max: DEFAULT_BLOCK_MAX,
            park_ratio: DEFAULT_PARK_RATIO,
        }
    }
}

impl LayoutConfig {
    /// Check that the parameters can drive a generation
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `block_min` is zero or greater than `block_max`
    /// - `block_max` exceeds `MAX_GRID_DIMENSION`
    /// - `park_ratio` is outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.block_min == 0 {
            return Err(LayoutError::InvalidParameter {
                parameter: "block_min",
                value: self.block_min.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        if self.block_min > self.block_max {
            return Err(LayoutError::InvalidParameter {
                parameter: "block_max",
                value: self.block_max.to_string(),
                reason: format!("must not be smaller than block_min ({})", self.block_min),
            });
        }

        if self.block_max > MAX_GRID_DIMENSION {
            return Err(LayoutError::InvalidParameter {
                parameter: "block_max",
                value: self.block_max.to_string(),
                reason: format!("must not exceed {MAX_GRID_DIMENSION}"),
            });
        }

        if !(0.0..=1.0).contains(&self.park_ratio) {
            return Err(LayoutError::InvalidParameter {
                parameter: "park_ratio",
                value: self.park_ratio.to_string(),
                reason: "must be a probability between 0 and 1".to_string(),
            });
        }

        Ok(())
    }
}

/// Outcome of one layout generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSummary {
    /// Roads carved along the first axis, ring excluded
    pub avenues: usize,
    /// Roads carved along the second axis, ring excluded
    pub streets: usize,
    /// Blocks classified as lots
    pub lots: usize,
    /// Blocks classified as parks
    pub parks: usize,
    /// Final cell counts per classification
    pub census: [(CellType, usize); 4],
}

/// Procedural road and block generator bound to a seed
#[derive(Debug, Clone)]
pub struct CityLayout {
    seed: u64,
    config: LayoutConfig,
}

impl CityLayout {
    /// Create a generator for the given seed
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(seed: u64, config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { seed, config })
    }

    /// Seed driving every random choice
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generation parameters
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Carve roads and classify blocks on `grid`
    ///
    /// Existing roads are kept; any cell still empty after carving ends up in
    /// a lot or park.
    pub fn generate(&self, grid: &mut Grid) -> LayoutSummary {
        let mut rng = StdRng::seed_from_u64(self.seed);

        carve_ring(grid);
        let avenues = self.carve_parallel_roads(grid, &mut rng, Axis::X);
        let streets = self.carve_parallel_roads(grid, &mut rng, Axis::Y);
        let (lots, parks) = self.classify_blocks(grid, &mut rng);

        let summary = LayoutSummary {
            avenues,
            streets,
            lots,
            parks,
            census: grid.census(),
        };

        info!(
            seed = self.seed,
            avenues, streets, lots, parks, "city layout generated"
        );
        summary
    }

    // Returns the number of roads carved
    fn carve_parallel_roads(&self, grid: &mut Grid, rng: &mut StdRng, axis: Axis) -> usize {
        let (run_dimension, fixed_dimension) = match axis {
            Axis::X => (grid.width(), grid.height()),
            Axis::Y => (grid.height(), grid.width()),
        };
        let ring = fixed_dimension.saturating_sub(1);
        let run_end = run_dimension.saturating_sub(1);

        let mut position: usize = 0;
        let mut carved = 0;
        loop {
            let block = rng.random_range(self.config.block_min..=self.config.block_max);
            position = position.saturating_add(block).saturating_add(1);
            // Keep at least block_min cells between this road and the ring
            if position.saturating_add(self.config.block_min) >= ring {
                break;
            }
            grid.fill_line(0, run_end, position, axis, CellType::Road);
            debug!(?axis, position, "road carved");
            carved += 1;
        }
        carved
    }

    // Returns (lots, parks)
    fn classify_blocks(&self, grid: &mut Grid, rng: &mut StdRng) -> (usize, usize) {
        let mut lots = 0;
        let mut parks = 0;

        for x in 0..grid.width() as i32 {
            for y in 0..grid.height() as i32 {
                if grid.get(Coordinate::new(x, y)) != Some(CellType::Empty) {
                    continue;
                }

                let kind = if rng.random_bool(self.config.park_ratio) {
                    parks += 1;
                    CellType::Park
                } else {
                    lots += 1;
                    CellType::Lot
                };
                let size = grid.fill_region(x, y, kind);
                debug!(x, y, ?kind, size, "block classified");
            }
        }

        (lots, parks)
    }
}

// The end-exclusive line contract leaves the far corner uncarved; it joins
// the adjacent block.
fn carve_ring(grid: &mut Grid) {
    let (width, height) = (grid.width(), grid.height());
    let last_x = width.saturating_sub(1);
    let last_y = height.saturating_sub(1);

    grid.fill_line(0, last_x, 0, Axis::X, CellType::Road);
    grid.fill_line(0, last_x, last_y, Axis::X, CellType::Road);
    grid.fill_line(0, last_y, 0, Axis::Y, CellType::Road);
    grid.fill_line(0, last_y, last_x, Axis::Y, CellType::Road);
}
