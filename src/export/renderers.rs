//! Built-in renderer implementations.

use crate::error::Result;
use crate::model::Document;
use crate::render::{to_json, to_text, HtmlRenderer, JsonFormat, MarkdownRenderer};

use super::DocumentRenderer;

impl DocumentRenderer for HtmlRenderer {
    fn name(&self) -> &str {
        "html"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn mime_type(&self) -> &'static str {
        "text/html"
    }

    fn render_bytes(&self, doc: &Document) -> Result<Vec<u8>> {
        self.render(doc).map(String::into_bytes)
    }
}

impl DocumentRenderer for MarkdownRenderer {
    fn name(&self) -> &str {
        "markdown"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn mime_type(&self) -> &'static str {
        "text/markdown"
    }

    fn render_bytes(&self, doc: &Document) -> Result<Vec<u8>> {
        self.render(doc).map(String::into_bytes)
    }
}

/// JSON renderer.
///
/// Serializes the whole laid-out document, styles and page setup included.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    format: JsonFormat,
}

impl JsonRenderer {
    /// Create a new JSON renderer.
    pub fn new(format: JsonFormat) -> Self {
        Self { format }
    }
}

impl DocumentRenderer for JsonRenderer {
    fn name(&self) -> &str {
        "json"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn render_bytes(&self, doc: &Document) -> Result<Vec<u8>> {
        to_json(doc, self.format).map(String::into_bytes)
    }
}

/// Plain text renderer.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    _private: (),
}

impl TextRenderer {
    /// Create a new plain text renderer.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentRenderer for TextRenderer {
    fn name(&self) -> &str {
        "text"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }

    fn render_bytes(&self, doc: &Document) -> Result<Vec<u8>> {
        to_text(doc).map(String::into_bytes)
    }
}
