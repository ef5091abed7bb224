//! Rendering options and configuration.

use super::JsonFormat;

/// Default font stack of the HTML renderer.
pub const DEFAULT_FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// Options for rendering a laid-out document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include YAML frontmatter with metadata (Markdown only)
    pub include_frontmatter: bool,

    /// Character used as bullet list marker
    pub list_marker: char,

    /// CSS font family of the HTML output
    pub font_family: String,

    /// Document language written to the HTML root element
    pub language: String,

    /// JSON output layout
    pub json_format: JsonFormat,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Set the HTML font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the document language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the JSON output layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            list_marker: '•',
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            language: "fr".to_string(),
            json_format: JsonFormat::Pretty,
        }
    }
}
