//! Grid constants and runtime configuration defaults

use crate::io::error::{LayoutError, Result};

// Grid geometry
/// Default number of grid columns (extent of the first axis)
pub const DEFAULT_WIDTH: usize = 64;
/// Default number of grid rows (extent of the second axis)
pub const DEFAULT_HEIGHT: usize = 64;
/// Default world units per cell, used to scale grid bounds to world bounds
pub const DEFAULT_CELL_SIZE: f32 = 10.0;

// Safety limit to prevent excessive memory allocation and keep indices within i32
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Whether contract violations abort by default
///
/// Enabled for debug builds and whenever the `strict-checks` feature is on.
/// Release builds without the feature log violations and skip the offending
/// cells instead.
pub const STRICT_CHECKS_DEFAULT: bool = cfg!(any(debug_assertions, feature = "strict-checks"));

// Layout generation defaults
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Smallest number of cells between two parallel roads
pub const DEFAULT_BLOCK_MIN: usize = 4;
/// Largest number of cells between two parallel roads
pub const DEFAULT_BLOCK_MAX: usize = 9;
/// Probability that an enclosed block becomes a park instead of a lot
pub const DEFAULT_PARK_RATIO: f64 = 0.2;

/// Geometry and checking mode of a grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Grid columns
    pub width: usize,
    /// Grid rows
    pub height: usize,
    /// World units per cell
    pub cell_size: f32,
    /// Abort on contract violations instead of logging them
    pub strict_checks: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            strict_checks: STRICT_CHECKS_DEFAULT,
        }
    }
}

impl GridConfig {
    /// Configuration with the given geometry and the default checking mode
    pub const fn new(width: usize, height: usize, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
            strict_checks: STRICT_CHECKS_DEFAULT,
        }
    }

    /// Override the checking mode
    #[must_use]
    pub const fn with_strict_checks(mut self, strict_checks: bool) -> Self {
        self.strict_checks = strict_checks;
        self
    }

    /// Check that the configuration describes a usable grid
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero or exceeds `MAX_GRID_DIMENSION`
    /// - The cell size is not a finite positive number
    pub fn validate(&self) -> Result<()> {
        validate_dimension("width", self.width)?;
        validate_dimension("height", self.height)?;

        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(LayoutError::InvalidParameter {
                parameter: "cell_size",
                value: self.cell_size.to_string(),
                reason: "must be a finite positive number".to_string(),
            });
        }

        Ok(())
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 || value > MAX_GRID_DIMENSION {
        return Err(LayoutError::InvalidParameter {
            parameter,
            value: value.to_string(),
            reason: format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        });
    }
    Ok(())
}
