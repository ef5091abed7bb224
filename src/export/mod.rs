//! Renderer registry and file export.
//!
//! Renderers are looked up by file extension or by name, and exported files
//! are written through a temporary file so the destination is never left
//! half-written.
//!
//! # Example
//!
//! ```no_run
//! use cvpress::export::RendererRegistry;
//! use cvpress::layout::{layout_resume, LayoutOptions};
//! use std::path::Path;
//!
//! fn main() -> cvpress::Result<()> {
//!     let doc = layout_resume("Jean Dupont\njean@mail.com", &LayoutOptions::default());
//!     let registry = RendererRegistry::with_defaults();
//!     registry.export(&doc, Path::new("exports/CV - Jean Dupont.html"))?;
//!     Ok(())
//! }
//! ```

mod atomic;
mod naming;
mod renderers;

pub use atomic::write_atomic;
pub use naming::{clean_job_title, output_file_name, sanitize_title};
pub use renderers::{JsonRenderer, TextRenderer};

use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::{HtmlRenderer, MarkdownRenderer, RenderOptions};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for output renderers.
///
/// Implement this trait to add support for a new output format.
pub trait DocumentRenderer: Send + Sync {
    /// Get the name of this renderer.
    fn name(&self) -> &str;

    /// Get the file extensions this renderer produces.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["html"]`).
    fn supported_extensions(&self) -> &[&str];

    /// MIME type of the rendered output.
    fn mime_type(&self) -> &'static str;

    /// Render a document to bytes.
    fn render_bytes(&self, doc: &Document) -> Result<Vec<u8>>;

    /// Check if this renderer supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for output renderers.
///
/// Extensions and names are matched case-insensitively.
pub struct RendererRegistry {
    renderers: HashMap<String, Arc<dyn DocumentRenderer>>,
    by_name: HashMap<String, Arc<dyn DocumentRenderer>>,
}

impl RendererRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the built-in renderers and default options.
    pub fn with_defaults() -> Self {
        Self::with_options(&RenderOptions::default())
    }

    /// Create a registry with the built-in renderers (HTML, Markdown, JSON,
    /// text) configured from `options`.
    pub fn with_options(options: &RenderOptions) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HtmlRenderer::new(options.clone())));
        registry.register(Arc::new(MarkdownRenderer::new(options.clone())));
        registry.register(Arc::new(JsonRenderer::new(options.json_format)));
        registry.register(Arc::new(TextRenderer::new()));
        registry
    }

    /// Register a renderer.
    ///
    /// The renderer will be registered for all its supported extensions,
    /// replacing any renderer previously registered for them.
    pub fn register(&mut self, renderer: Arc<dyn DocumentRenderer>) {
        for ext in renderer.supported_extensions() {
            self.renderers.insert(ext.to_lowercase(), renderer.clone());
        }
        self.by_name.insert(renderer.name().to_lowercase(), renderer);
    }

    /// Get a renderer by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentRenderer>> {
        self.renderers.get(&ext.to_lowercase()).cloned()
    }

    /// Get a renderer by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentRenderer>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Get a renderer by extension first, then by name.
    pub fn find(&self, format: &str) -> Option<Arc<dyn DocumentRenderer>> {
        self.get_by_extension(format)
            .or_else(|| self.get_by_name(format))
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.renderers.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.renderers.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Render a document in the given format (extension or renderer name).
    pub fn render(&self, doc: &Document, format: &str) -> Result<Vec<u8>> {
        let renderer = self
            .find(format)
            .ok_or_else(|| Error::UnsupportedFormat(format.to_string()))?;
        renderer.render_bytes(doc)
    }

    /// Render a document and write it atomically to `path`.
    ///
    /// The renderer is picked from the path extension.
    pub fn export(&self, doc: &Document, path: &Path) -> Result<()> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::MissingExtension(path.to_path_buf()))?;

        let renderer = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))?;

        let bytes = renderer.render_bytes(doc)?;
        write_atomic(path, &bytes)?;

        log::info!(
            "Exported {} ({} bytes, {})",
            path.display(),
            bytes.len(),
            renderer.mime_type()
        );
        Ok(())
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
