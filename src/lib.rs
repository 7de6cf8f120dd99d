//! Discrete world grid for procedural city generation
//!
//! A generation driver carves roads with directional line-fill and classifies
//! the enclosed space with 8-connected flood-fill. The resulting cell
//! classification, together with world-space bounds derived from the cell
//! size, is what mesh synthesis and object placement read downstream.

#![forbid(unsafe_code)]

/// Layout generation driver and placement queries
pub mod generation;
/// Configuration, errors, dumps and exports
pub mod io;
/// Coordinates, bounds and the cell grid
pub mod spatial;

pub use io::configuration::GridConfig;
pub use io::error::{LayoutError, Result};
pub use spatial::{Axis, Bounds, CellType, Coordinate, Grid};
