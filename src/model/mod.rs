//! Document model types for laid-out résumés and letters.
//!
//! This module defines the intermediate representation that bridges
//! segmentation and rendering: role-tagged elements, the style sheet that
//! maps each role to a presentation, and the page geometry.

mod document;
mod element;
mod page;
mod style;

pub use document::{Document, DocumentKind, Metadata, DEFAULT_LINE_BREAK};
pub use element::{Content, Element, Role, StyledElement};
pub use page::{PageSetup, MM};
pub use style::{Alignment, ParagraphStyle, StyleSheet, Weight};
