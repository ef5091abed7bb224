//! Per-line classification of résumé body lines.

use super::{is_section_title, normalize};

/// Structural class of a single body line, decoration already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Empty or whitespace-only line
    Blank,
    /// Short all-caps heading
    SectionTitle(String),
    /// Line introduced by the bullet glyph, glyph removed
    Bullet(String),
    /// Anything else
    Text(String),
}

/// Classify one body line.
///
/// Checks run in priority order: blank, section title, bullet glyph, text.
/// A bullet line that also reads as a section title is a section title.
pub fn classify_line(line: &str, bullet: char) -> LineClass {
    let raw = line.trim();

    if raw.is_empty() {
        LineClass::Blank
    } else if is_section_title(raw) {
        LineClass::SectionTitle(normalize(raw))
    } else if let Some(rest) = raw.strip_prefix(bullet) {
        LineClass::Bullet(normalize(rest))
    } else {
        LineClass::Text(normalize(raw))
    }
}
