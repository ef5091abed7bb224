//! Role assignment and element emission.
//!
//! Turns segmented text into a [`Document`](crate::model::Document) of
//! styled elements and spacers, ready for a renderer.

mod letter;
mod options;
mod resume;

pub use letter::layout_letter;
pub use options::{LayoutOptions, DEFAULT_BULLET, DEFAULT_PLACEHOLDER};
pub use resume::{classify_body, layout_resume};
