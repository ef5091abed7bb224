//! Rendering result with metadata and statistics.

use crate::model::{Content, Document, Element, Metadata, Role};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML, Markdown, etc.)
    pub content: String,

    /// Document metadata (copied from source document)
    pub metadata: Metadata,

    /// Layout statistics
    pub stats: LayoutStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: LayoutStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Counts collected over a laid-out document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Number of section titles
    pub title_count: u32,

    /// Number of grouped bullet lists
    pub list_count: u32,

    /// Number of bullet items across all lists
    pub bullet_count: u32,

    /// Number of intro, paragraph and letter body elements
    pub paragraph_count: u32,

    /// Number of spacers
    pub spacer_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl LayoutStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics over every element of a document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        for element in &doc.elements {
            stats.add_element(element, &doc.line_break);
        }
        stats
    }

    /// Account for one element; `line_break` is not counted as text.
    pub fn add_element(&mut self, element: &Element, line_break: &str) {
        let styled = match element {
            Element::Spacer { .. } => {
                self.spacer_count += 1;
                return;
            }
            Element::Styled(styled) => styled,
        };

        match styled.role {
            Role::SectionTitle => self.title_count += 1,
            Role::Intro | Role::Paragraph | Role::Body => self.paragraph_count += 1,
            _ => {}
        }

        match &styled.content {
            Content::Text(text) => text
                .split(line_break)
                .for_each(|line| self.count_text(line)),
            Content::Items(items) => {
                self.list_count += 1;
                for item in items {
                    self.bullet_count += 1;
                    self.count_text(item);
                }
            }
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &LayoutStats) {
        self.title_count += other.title_count;
        self.list_count += other.list_count;
        self.bullet_count += other.bullet_count;
        self.paragraph_count += other.paragraph_count;
        self.spacer_count += other.spacer_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentKind;

    #[test]
    fn test_layout_stats_count_text() {
        let mut stats = LayoutStats::new();
        stats.count_text("Ingénieur passionné, chimie industrielle.");

        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.char_count, 38);
    }

    #[test]
    fn test_layout_stats_from_document() {
        let mut doc = Document::new(DocumentKind::Resume);
        doc.push(Element::text(Role::Header, "Jean Dupont"));
        doc.push(Element::spacer(8.0));
        doc.push(Element::text(Role::SectionTitle, "EXPERIENCE"));
        doc.push(Element::bullets(["Poste A", "Poste B"]));
        doc.push(Element::text(Role::Paragraph, "Texte<br/>suite"));

        let stats = LayoutStats::from_document(&doc);
        assert_eq!(stats.title_count, 1);
        assert_eq!(stats.list_count, 1);
        assert_eq!(stats.bullet_count, 2);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.spacer_count, 1);
        assert_eq!(stats.word_count, 9);
    }

    #[test]
    fn test_layout_stats_merge() {
        let mut stats1 = LayoutStats {
            paragraph_count: 5,
            list_count: 2,
            ..Default::default()
        };
        let stats2 = LayoutStats {
            paragraph_count: 3,
            list_count: 1,
            spacer_count: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.paragraph_count, 8);
        assert_eq!(stats1.list_count, 3);
        assert_eq!(stats1.spacer_count, 4);
    }
}
