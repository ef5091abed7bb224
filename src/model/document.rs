//! Document-level types.

use super::{Content, Element, PageSetup, Role, StyleSheet, StyledElement};
use serde::{Deserialize, Serialize};

/// Default marker joining the lines of a multi-line element.
pub const DEFAULT_LINE_BREAK: &str = "<br/>";

/// Kind of document being laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Curriculum vitae
    Resume,
    /// Cover letter
    Letter,
}

impl DocumentKind {
    /// File name prefix used when naming exported documents.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            DocumentKind::Resume => "CV",
            DocumentKind::Letter => "Lettre",
        }
    }
}

/// A laid-out document: styled elements plus the page and style information
/// a renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Résumé or letter
    pub kind: DocumentKind,

    /// Document metadata (title, subject)
    pub metadata: Metadata,

    /// Page size and margins
    pub page: PageSetup,

    /// Role to style mapping
    pub styles: StyleSheet,

    /// Marker separating lines inside multi-line elements
    pub line_break: String,

    /// Elements in reading order
    pub elements: Vec<Element>,
}

impl Document {
    /// Create an empty document with the page setup and styles of its kind.
    pub fn new(kind: DocumentKind) -> Self {
        let (page, styles) = match kind {
            DocumentKind::Resume => (PageSetup::resume(), StyleSheet::resume()),
            DocumentKind::Letter => (PageSetup::letter(), StyleSheet::letter()),
        };
        Self {
            kind,
            metadata: Metadata::default(),
            page,
            styles,
            line_break: DEFAULT_LINE_BREAK.to_string(),
            elements: Vec::new(),
        }
    }

    /// Set the line-break marker.
    pub fn with_line_break(mut self, marker: impl Into<String>) -> Self {
        self.line_break = marker.into();
        self
    }

    /// Append an element.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Append several elements.
    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) {
        self.elements.extend(elements);
    }

    /// Iterate over styled elements, skipping spacers.
    pub fn styled(&self) -> impl Iterator<Item = &StyledElement> {
        self.elements.iter().filter_map(Element::as_styled)
    }

    /// Roles of the styled elements, in order.
    pub fn roles(&self) -> Vec<Role> {
        self.styled().map(|s| s.role).collect()
    }

    /// First element with the given role.
    pub fn find(&self, role: Role) -> Option<&StyledElement> {
        self.styled().find(|s| s.role == role)
    }

    /// Check if the document has any styled content.
    pub fn is_empty(&self) -> bool {
        self.styled().next().is_none()
    }

    /// Split a text on the line-break marker.
    pub fn split_lines<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split(self.line_break.as_str())
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.styled()
            .map(|styled| match &styled.content {
                Content::Text(text) => self.split_lines(text).collect::<Vec<_>>().join("\n"),
                Content::Items(items) => items
                    .iter()
                    .map(|item| format!("• {}", item))
                    .collect::<Vec<_>>()
                    .join("\n"),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title (the résumé header)
    pub title: Option<String>,

    /// Letter subject line
    pub subject: Option<String>,
}

impl Metadata {
    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self, kind: DocumentKind) -> String {
        let mut lines = vec!["---".to_string()];

        let kind = match kind {
            DocumentKind::Resume => "resume",
            DocumentKind::Letter => "letter",
        };
        lines.push(format!("kind: {}", kind));
        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref subject) = self.subject {
            lines.push(format!("subject: \"{}\"", escape_yaml(subject)));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
