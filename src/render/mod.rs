//! Rendering module for converting laid-out documents to output formats.

mod html;
mod json;
mod markdown;
mod options;
mod result;
mod text;

pub use html::{escape as escape_html, to_html, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::{RenderOptions, DEFAULT_FONT_FAMILY};
pub use result::{LayoutStats, RenderResult};
pub use text::to_text;
