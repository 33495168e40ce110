//! Rectangle value object, the codec's worked example of a typed value.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described by its side lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Horizontal side length.
    pub width: f64,
    /// Vertical side length.
    pub height: f64,
}

impl Rect {
    /// Construct a rectangle from its side lengths.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Surface area of the rectangle.
    pub fn area(self) -> f64 {
        self.width * self.height
    }

    /// Perimeter of the rectangle.
    pub fn perimeter(self) -> f64 {
        2.0 * (self.width + self.height)
    }
}
