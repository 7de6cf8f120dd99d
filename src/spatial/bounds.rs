//! World-space axis-aligned rectangles

/// Axis-aligned rectangle in world units
///
/// Argument order follows `(min_x, max_x, min_y, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    /// Lower edge along the first axis
    pub min_x: f32,
    /// Upper edge along the first axis
    pub max_x: f32,
    /// Lower edge along the second axis
    pub min_y: f32,
    /// Upper edge along the second axis
    pub max_y: f32,
}

impl Bounds {
    /// Create bounds from its edges
    ///
    /// # Panics
    ///
    /// Panics in debug builds if either minimum exceeds its maximum
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        debug_assert!(min_x <= max_x, "min_x {min_x} exceeds max_x {max_x}");
        debug_assert!(min_y <= max_y, "min_y {min_y} exceeds max_y {max_y}");
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Extent along the first axis
    pub const fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Extent along the second axis
    pub const fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Midpoint of the rectangle
    pub const fn center(&self) -> [f32; 2] {
        [
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        ]
    }

    /// Check if a world point lies inside (edges inclusive)
    pub const fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Check if `other` lies entirely inside these bounds
    pub const fn encloses(&self, other: &Self) -> bool {
        other.min_x >= self.min_x
            && other.max_x <= self.max_x
            && other.min_y >= self.min_y
            && other.max_y <= self.max_y
    }
}
