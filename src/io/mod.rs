//! Configuration, errors and the outward-facing surfaces of the grid

/// Command-line interface
pub mod cli;
/// Grid constants and configuration
pub mod configuration;
/// Text dump of grid state
pub mod dump;
/// Error types
pub mod error;
/// PNG export of grid state
pub mod image;
