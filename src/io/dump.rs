//! Fixed-width text rendering of grid state for consoles and logs
//!
//! Layout: a border of `width` underscores, one line per first-axis index with
//! one character per second-axis index (`#` for roads, space otherwise), then a
//! border of `width` equals signs. Every line ends with a newline.

use std::fmt;

use crate::spatial::grid::{CellType, Grid};

const ROAD_GLYPH: char = '#';
const OPEN_GLYPH: char = ' ';
const TOP_BORDER: char = '_';
const BOTTOM_BORDER: char = '=';

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells();
        let (width, height) = cells.dim();

        writeln!(f, "{}", border(TOP_BORDER, width))?;
        for x in 0..width {
            let line: String = (0..height)
                .map(|y| match cells.get([x, y]) {
                    Some(CellType::Road) => ROAD_GLYPH,
                    _ => OPEN_GLYPH,
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{}", border(BOTTOM_BORDER, width))
    }
}

fn border(glyph: char, width: usize) -> String {
    std::iter::repeat_n(glyph, width).collect()
}

/// Render the grid dump into a string
pub fn render_dump(grid: &Grid) -> String {
    grid.to_string()
}

/// Write the grid dump to any byte sink, such as a locked stdout
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_dump<W: std::io::Write>(grid: &Grid, writer: &mut W) -> std::io::Result<()> {
    write!(writer, "{grid}")?;
    writer.flush()
}
