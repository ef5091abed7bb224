//! # cvpress
//!
//! Layout engine for AI-generated résumés and cover letters.
//!
//! This library takes loosely-structured Markdown or plain text, recovers
//! its structural roles (header, identity lines, intro, section titles,
//! bullet lists, letter blocks) and maps each role to a presentation style,
//! producing a document ready for paginated rendering.
//!
//! ## Quick Start
//!
//! ```
//! use cvpress::{layout_resume, render, LayoutOptions};
//!
//! let text = "Jean Dupont\njean@mail.com\n\nIngénieur chimiste.\n\nEXPERIENCE\n• Poste A";
//! let doc = layout_resume(text, &LayoutOptions::default());
//!
//! let markdown = render::to_markdown(&doc, &render::RenderOptions::default()).unwrap();
//! assert!(markdown.starts_with("# Jean Dupont"));
//! ```
//!
//! ## Features
//!
//! - **Résumé layout**: identity block, intro paragraph, titles and grouped bullets
//! - **Letter layout**: positional date, recipient, subject, body and signature
//! - **Cleanup pipeline**: code fences, citation artifacts, agent instructions
//! - **Multiple output formats**: print-ready HTML, Markdown, JSON, plain text
//! - **Atomic export**: the destination file is never partially written

pub mod cleanup;
pub mod error;
pub mod export;
pub mod layout;
pub mod locale;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use error::{Error, Result};
pub use export::{output_file_name, DocumentRenderer, RendererRegistry};
pub use layout::{layout_letter, layout_resume, LayoutOptions};
pub use locale::{date_line, french_date};
pub use model::{
    Alignment, Content, Document, DocumentKind, Element, Metadata, PageSetup, ParagraphStyle,
    Role, StyleSheet, StyledElement,
};
pub use parser::normalize;
pub use render::{JsonFormat, LayoutStats, RenderOptions};

use std::path::{Path, PathBuf};

/// Lay out a résumé with standard cleanup and default options.
///
/// # Example
///
/// ```
/// use cvpress::{resume, Role};
///
/// let doc = resume("```markdown\n# Jean Dupont\n06 12 34 56 78\n```");
/// assert_eq!(doc.find(Role::Header).unwrap().as_text(), Some("Jean Dupont"));
/// ```
pub fn resume(text: &str) -> Document {
    Cvpress::new().resume(text).document
}

/// Lay out a cover letter with standard cleanup and default options.
///
/// # Example
///
/// ```
/// use cvpress::{letter, Error};
///
/// let err = letter("Paris, le 3 mars 2025\n\nSociété").unwrap_err();
/// assert!(matches!(err, Error::Structure { blocks: 2 }));
/// ```
pub fn letter(text: &str) -> Result<Document> {
    Ok(Cvpress::new().letter(text)?.document)
}

/// Read a résumé file and lay it out.
pub fn resume_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    Ok(Cvpress::new().resume_file(path)?.document)
}

/// Read a letter file and lay it out.
pub fn letter_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    Ok(Cvpress::new().letter_file(path)?.document)
}

/// Builder for laying out and exporting documents.
///
/// # Example
///
/// ```no_run
/// use cvpress::{CleanupPreset, Cvpress};
///
/// let path = Cvpress::new()
///     .with_cleanup(CleanupPreset::Aggressive)
///     .with_placeholder("Jean Dupont")
///     .resume_file("cv.md")?
///     .export_to_dir("exports", "html")?;
/// println!("{}", path.display());
/// # Ok::<(), cvpress::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Cvpress {
    cleanup: Option<CleanupOptions>,
    layout_options: LayoutOptions,
    render_options: RenderOptions,
}

impl Cvpress {
    /// Create a new builder: standard cleanup, default layout and rendering.
    pub fn new() -> Self {
        Self {
            cleanup: Some(CleanupOptions::standard()),
            layout_options: LayoutOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup_options(mut self, options: CleanupOptions) -> Self {
        self.cleanup = Some(options);
        self
    }

    /// Lay out the text exactly as given.
    pub fn without_cleanup(mut self) -> Self {
        self.cleanup = None;
        self
    }

    /// Set layout options.
    pub fn with_layout_options(mut self, options: LayoutOptions) -> Self {
        self.layout_options = options;
        self
    }

    /// Set the résumé header placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.layout_options = self.layout_options.with_placeholder(placeholder);
        self
    }

    /// Set the bullet glyph.
    pub fn with_bullet(mut self, bullet: char) -> Self {
        self.layout_options = self.layout_options.with_bullet(bullet);
        self.render_options = self.render_options.with_list_marker(bullet);
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Enable frontmatter in Markdown output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Apply the configured cleanup to raw text.
    pub fn prepare(&self, text: &str) -> String {
        match self.cleanup {
            Some(ref options) => CleanupPipeline::new(options.clone()).process(text),
            None => text.to_string(),
        }
    }

    /// Lay out a résumé.
    pub fn resume(&self, text: &str) -> CvpressResult {
        let document = layout_resume(&self.prepare(text), &self.layout_options);
        self.wrap(document)
    }

    /// Lay out a cover letter.
    pub fn letter(&self, text: &str) -> Result<CvpressResult> {
        let document = layout_letter(&self.prepare(text), &self.layout_options)?;
        Ok(self.wrap(document))
    }

    /// Read a résumé file and lay it out.
    pub fn resume_file<P: AsRef<Path>>(&self, path: P) -> Result<CvpressResult> {
        let text = std::fs::read_to_string(path)?;
        Ok(self.resume(&text))
    }

    /// Read a letter file and lay it out.
    pub fn letter_file<P: AsRef<Path>>(&self, path: P) -> Result<CvpressResult> {
        let text = std::fs::read_to_string(path)?;
        self.letter(&text)
    }

    fn wrap(&self, document: Document) -> CvpressResult {
        CvpressResult {
            document,
            render_options: self.render_options.clone(),
        }
    }
}

impl Default for Cvpress {
    fn default() -> Self {
        Self::new()
    }
}

/// A laid-out document with the render options to use.
#[derive(Debug, Clone)]
pub struct CvpressResult {
    /// The laid-out document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl CvpressResult {
    /// Set the title used for metadata and file naming.
    ///
    /// Letters have no header, so their exported name comes from here.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.document.metadata.title = Some(title.into());
        self
    }

    /// Append a job title to the title used for file naming.
    ///
    /// Gender markers such as `(H/F)` are removed first; a title that is
    /// empty once cleaned leaves the current title untouched.
    pub fn with_job_title(mut self, job_title: &str) -> Self {
        let job = export::clean_job_title(job_title);
        if !job.is_empty() {
            let title = match self.document.metadata.title.take() {
                Some(title) => format!("{} - {}", title, job),
                None => job,
            };
            self.document.metadata.title = Some(title);
        }
        self
    }

    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Layout statistics.
    pub fn stats(&self) -> LayoutStats {
        LayoutStats::from_document(&self.document)
    }

    /// Export file name for the given extension.
    pub fn file_name(&self, ext: &str) -> String {
        let title = self.document.metadata.title.as_deref().unwrap_or_default();
        output_file_name(self.document.kind, title, ext)
    }

    /// Export to an explicit path; the format follows the extension.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        RendererRegistry::with_options(&self.render_options).export(&self.document, path.as_ref())
    }

    /// Export into `dir` under the standard name, returning the written path.
    pub fn export_to_dir<P: AsRef<Path>>(&self, dir: P, ext: &str) -> Result<PathBuf> {
        let path = dir.as_ref().join(self.file_name(ext));
        self.export(&path)?;
        Ok(path)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "```markdown
# **Jean Dupont - Technicien chimiste**
06 12 34 56 78 | jean@mail.com

Ingénieur passionné par la chimie [cite_start]industrielle.

EXPERIENCE
• Poste A
• Poste B
```";

    #[test]
    fn test_cvpress_builder() {
        let builder = Cvpress::new()
            .with_cleanup(CleanupPreset::Aggressive)
            .with_placeholder("Jean")
            .with_bullet('-')
            .with_frontmatter();

        assert_eq!(builder.cleanup, Some(CleanupOptions::aggressive()));
        assert_eq!(builder.layout_options.placeholder, "Jean");
        assert_eq!(builder.layout_options.bullet, '-');
        assert_eq!(builder.render_options.list_marker, '-');
        assert!(builder.render_options.include_frontmatter);
    }

    #[test]
    fn test_cvpress_default() {
        let builder = Cvpress::default();
        assert_eq!(builder.cleanup, Some(CleanupOptions::standard()));
        assert!(!builder.render_options.include_frontmatter);
    }

    #[test]
    fn test_resume_with_cleanup() {
        let doc = resume(RESUME);
        assert_eq!(
            doc.roles(),
            vec![
                Role::Header,
                Role::IdentityLine,
                Role::Intro,
                Role::SectionTitle,
                Role::Bullet
            ]
        );
        assert_eq!(
            doc.find(Role::Intro).unwrap().as_text(),
            Some("Ingénieur passionné par la chimie industrielle.")
        );
        assert_eq!(
            doc.metadata.title.as_deref(),
            Some("Jean Dupont - Technicien chimiste")
        );
    }

    #[test]
    fn test_without_cleanup_keeps_fence() {
        let result = Cvpress::new().without_cleanup().resume(RESUME);
        assert_eq!(
            result.document.find(Role::Header).unwrap().as_text(),
            Some("```markdown")
        );
    }

    #[test]
    fn test_letter_structure_error() {
        let result = letter("a\n\nb\n\nc");
        assert!(matches!(result, Err(Error::Structure { blocks: 3 })));
    }

    #[test]
    fn test_file_name() {
        let result = Cvpress::new().resume(RESUME);
        assert_eq!(
            result.file_name("html"),
            "CV - Jean Dupont - Technicien chimiste.html"
        );

        let letter = Cvpress::new()
            .letter("d\n\nr\n\ns\n\nsig")
            .unwrap()
            .with_title("Jean Dupont");
        assert_eq!(letter.file_name("md"), "Lettre - Jean Dupont.md");
    }

    #[test]
    fn test_job_title_file_name() {
        let letter = Cvpress::new()
            .letter("d\n\nr\n\ns\n\nsig")
            .unwrap()
            .with_title("Jean Dupont")
            .with_job_title("Technicien R&D/Qualité (H/F)");
        assert_eq!(
            letter.file_name("html"),
            "Lettre - Jean Dupont - Technicien R&D Qualité.html"
        );

        let untouched = Cvpress::new()
            .letter("d\n\nr\n\ns\n\nsig")
            .unwrap()
            .with_title("Jean Dupont")
            .with_job_title(" (F/H) ");
        assert_eq!(untouched.file_name("md"), "Lettre - Jean Dupont.md");
    }

    #[test]
    fn test_untitled_letter_file_name() {
        let letter = Cvpress::new().letter("d\n\nr\n\ns\n\nsig").unwrap();
        assert_eq!(letter.file_name("json"), "Lettre - Candidat.json");
    }

    #[test]
    fn test_result_outputs() {
        let result = Cvpress::new().resume(RESUME);
        assert!(result.to_html().unwrap().contains("<ul class=\"bullet\""));
        assert!(result.to_markdown().unwrap().contains("## EXPERIENCE"));
        assert!(result.to_text().unwrap().contains("• Poste A"));
        assert!(result
            .to_json(JsonFormat::Compact)
            .unwrap()
            .contains("\"role\":\"section_title\""));
        assert_eq!(result.stats().bullet_count, 2);
    }
}
