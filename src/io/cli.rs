//! Command-line interface for generating and inspecting a city layout

use crate::generation::layout::{CityLayout, LayoutConfig, LayoutSummary};
use crate::io::configuration::{
    DEFAULT_BLOCK_MAX, DEFAULT_BLOCK_MIN, DEFAULT_CELL_SIZE, DEFAULT_HEIGHT, DEFAULT_PARK_RATIO,
    DEFAULT_SEED, DEFAULT_WIDTH, GridConfig, STRICT_CHECKS_DEFAULT,
};
use crate::io::dump::write_dump;
use crate::io::error::{LayoutError, Result};
use crate::io::image::export_grid_as_png;
use crate::spatial::grid::Grid;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "citygrid")]
#[command(
    author,
    version,
    about = "Carve roads and classify blocks on a procedural city grid"
)]
/// Command-line arguments for the layout generator
pub struct Cli {
    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Grid columns
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid rows
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// World units per cell
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f32,

    /// Smallest number of cells between parallel roads
    #[arg(long, default_value_t = DEFAULT_BLOCK_MIN)]
    pub block_min: usize,

    /// Largest number of cells between parallel roads
    #[arg(long, default_value_t = DEFAULT_BLOCK_MAX)]
    pub block_max: usize,

    /// Probability that a block becomes a park
    #[arg(short, long, default_value_t = DEFAULT_PARK_RATIO)]
    pub park_ratio: f64,

    /// Export the finished grid as a PNG image
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Do not print the text dump
    #[arg(short, long)]
    pub quiet: bool,

    /// Log grid contract violations instead of aborting
    #[arg(short, long)]
    pub lenient: bool,
}

impl Cli {
    /// Grid configuration described by the arguments
    pub const fn grid_config(&self) -> GridConfig {
        GridConfig::new(self.width, self.height, self.cell_size)
            .with_strict_checks(STRICT_CHECKS_DEFAULT && !self.lenient)
    }

    /// Layout configuration described by the arguments
    pub const fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            block_min: self.block_min,
            block_max: self.block_max,
            park_ratio: self.park_ratio,
        }
    }

    /// Generate the layout, then dump and export it as requested
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid or layout configuration is invalid
    /// - Writing the dump to stdout fails
    /// - The PNG export fails
    pub fn run(&self) -> Result<(Grid, LayoutSummary)> {
        let mut grid = Grid::new(self.grid_config())?;
        let layout = CityLayout::new(self.seed, self.layout_config())?;
        let summary = layout.generate(&mut grid);

        if !self.quiet {
            let mut stdout = std::io::stdout().lock();
            write_dump(&grid, &mut stdout).map_err(|e| LayoutError::FileSystem {
                path: PathBuf::from("<stdout>"),
                operation: "write dump",
                source: e,
            })?;
        }

        if let Some(output) = &self.output {
            export_grid_as_png(&grid, output)?;
            tracing::info!(path = %output.display(), "layout image written");
        }

        Ok((grid, summary))
    }
}
