//! Ruling lines drawn on a page.
//!
//! Lines are classified by their thickness along each axis: a segment that
//! is thinner than the threshold vertically is a horizontal rule, one that is
//! thinner horizontally is a vertical rule. A tiny segment can be both.

use crate::geometry::BBox;

/// Default thickness below which a line counts as a rule along that axis.
pub const DEFAULT_LINE_THICKNESS: f64 = 1.0;

/// A straight line segment drawn on a page.
///
/// Coordinates use the top-left origin system.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// Left x coordinate.
    pub x0: f64,
    /// Top y coordinate (distance from top of page).
    pub top: f64,
    /// Right x coordinate.
    pub x1: f64,
    /// Bottom y coordinate (distance from top of page).
    pub bottom: f64,
}

impl Line {
    pub fn new(x0: f64, top: f64, x1: f64, bottom: f64) -> Self {
        Self {
            x0,
            top,
            x1,
            bottom,
        }
    }

    /// A horizontal rule at `y` spanning `x0..x1`.
    pub fn horizontal(x0: f64, y: f64, x1: f64) -> Self {
        Self::new(x0, y, x1, y)
    }

    /// A vertical rule at `x` spanning `top..bottom`.
    pub fn vertical(x: f64, top: f64, bottom: f64) -> Self {
        Self::new(x, top, x, bottom)
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Returns `true` if the line is thinner than `thickness` vertically.
    pub fn is_horizontal(&self, thickness: f64) -> bool {
        self.height() < thickness
    }

    /// Returns `true` if the line is thinner than `thickness` horizontally.
    pub fn is_vertical(&self, thickness: f64) -> bool {
        self.width() < thickness
    }

    pub fn bbox(&self) -> BBox {
        BBox::new(self.x0, self.top, self.x1, self.bottom)
    }
}

/// Split lines into `(horizontal, vertical)` rules.
///
/// A line that qualifies on both axes appears in both sets; a line that
/// qualifies on neither (a thick or diagonal stroke) is dropped.
pub fn partition_rules(lines: &[Line], thickness: f64) -> (Vec<&Line>, Vec<&Line>) {
    let horizontal = lines.iter().filter(|l| l.is_horizontal(thickness)).collect();
    let vertical = lines.iter().filter(|l| l.is_vertical(thickness)).collect();
    (horizontal, vertical)
}
