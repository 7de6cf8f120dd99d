//! Spatial data structures for the world grid
//!
//! This module contains:
//! - Integer grid coordinates
//! - The cell grid with its line-fill and flood-fill mutators
//! - World-space bounds derived from grid extent and cell size

/// World-space axis-aligned rectangles
pub mod bounds;
/// Integer grid coordinates
pub mod coordinate;
/// Cell grid and fill operations
pub mod grid;

pub use bounds::Bounds;
pub use coordinate::Coordinate;
pub use grid::{Axis, CellType, Grid};
