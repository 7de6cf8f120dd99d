//! Integer grid coordinates with grid-membership checks

use std::fmt;

/// A position in grid index space
///
/// Components are signed so that traversal can step past the grid edge;
/// membership must be checked with [`Coordinate::is_valid`] before the
/// coordinate is used to address a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    /// Index along the first grid axis
    pub x: i32,
    /// Index along the second grid axis
    pub y: i32,
}

impl Coordinate {
    /// Create a coordinate from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check membership in a `width` x `height` grid
    pub const fn is_valid(self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < width && (self.y as usize) < height
    }

    /// Coordinate shifted by the given offsets
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Array index for this coordinate, if it lies inside the grid
    pub const fn to_index(self, width: usize, height: usize) -> Option<[usize; 2]> {
        if self.is_valid(width, height) {
            Some([self.x as usize, self.y as usize])
        } else {
            None
        }
    }
}

impl From<[i32; 2]> for Coordinate {
    fn from(value: [i32; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
