//! Page geometry types.

use serde::{Deserialize, Serialize};

/// Points per millimetre (1 point = 1/72 inch).
pub const MM: f32 = 72.0 / 25.4;

/// Page size and margins, in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    /// Page width
    pub width: f32,

    /// Page height
    pub height: f32,

    /// Left margin
    pub margin_left: f32,

    /// Right margin
    pub margin_right: f32,

    /// Top margin
    pub margin_top: f32,

    /// Bottom margin
    pub margin_bottom: f32,
}

impl PageSetup {
    /// Create a page with the given dimensions and no margins.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            margin_left: 0.0,
            margin_right: 0.0,
            margin_top: 0.0,
            margin_bottom: 0.0,
        }
    }

    /// A4 page (210 x 297 mm).
    pub fn a4() -> Self {
        Self::new(210.0 * MM, 297.0 * MM)
    }

    /// A4 page with résumé margins (20 mm sides, 15 mm top and bottom).
    pub fn resume() -> Self {
        Self::a4().with_margins(20.0 * MM, 20.0 * MM, 15.0 * MM, 15.0 * MM)
    }

    /// A4 page with letter margins (25 mm on every side).
    pub fn letter() -> Self {
        Self::a4().with_margins(25.0 * MM, 25.0 * MM, 25.0 * MM, 25.0 * MM)
    }

    /// Set margins (left, right, top, bottom).
    pub fn with_margins(mut self, left: f32, right: f32, top: f32, bottom: f32) -> Self {
        self.margin_left = left;
        self.margin_right = right;
        self.margin_top = top;
        self.margin_bottom = bottom;
        self
    }

    /// Width available for text.
    pub fn text_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Height available for text.
    pub fn text_height(&self) -> f32 {
        self.height - self.margin_top - self.margin_bottom
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::a4()
    }
}
