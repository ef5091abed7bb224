//! Layout options and configuration.

use crate::model::DEFAULT_LINE_BREAK;

/// Header used when a résumé has no identity line.
pub const DEFAULT_PLACEHOLDER: &str = "Candidat";

/// Glyph introducing a bullet line.
pub const DEFAULT_BULLET: char = '•';

/// Options for laying out documents.
///
/// Every fixed string the layout needs is carried here; nothing is read
/// from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Header text for résumés without any identity line
    pub placeholder: String,

    /// Glyph that introduces a bullet line
    pub bullet: char,

    /// Marker joining the lines of multi-line elements
    pub line_break: String,
}

impl LayoutOptions {
    /// Create new layout options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the bullet glyph.
    pub fn with_bullet(mut self, bullet: char) -> Self {
        self.bullet = bullet;
        self
    }

    /// Set the line-break marker.
    pub fn with_line_break(mut self, marker: impl Into<String>) -> Self {
        self.line_break = marker.into();
        self
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            bullet: DEFAULT_BULLET,
            line_break: DEFAULT_LINE_BREAK.to_string(),
        }
    }
}
