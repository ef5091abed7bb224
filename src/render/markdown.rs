//! Markdown rendering for laid-out documents.
//!
//! The output is the constrained dialect the layout accepts, so rendering a
//! document and laying it out again yields the same roles.

use crate::error::Result;
use crate::model::{Content, Document, Role, StyledElement};

use super::{LayoutStats, RenderOptions, RenderResult};

/// Markdown hard line break.
const HARD_BREAK: &str = "  \n";

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    MarkdownRenderer::new(options.clone()).render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    MarkdownRenderer::new(options.clone()).render_with_stats(doc)
}

/// Markdown renderer.
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        if self.options.include_frontmatter {
            output.push_str(&doc.metadata.to_yaml_frontmatter(doc.kind));
            output.push('\n');
        }

        // The header and its identity lines stay one block: a blank line
        // inside them would end the identity region on re-layout.
        let mut blocks: Vec<String> = Vec::new();
        let mut in_identity = false;
        for styled in doc.styled() {
            let text = self.render_element(doc, styled);
            match (styled.role, blocks.last_mut()) {
                (Role::IdentityLine, Some(last)) if in_identity => {
                    last.push('\n');
                    last.push_str(&text);
                }
                _ => blocks.push(text),
            }
            in_identity = matches!(styled.role, Role::Header | Role::IdentityLine);
        }
        output.push_str(&blocks.join("\n\n"));

        Ok(output.trim().to_string())
    }

    /// Render a document to Markdown with layout statistics.
    pub fn render_with_stats(&self, doc: &Document) -> Result<RenderResult> {
        let content = self.render(doc)?;
        Ok(RenderResult::new(
            content,
            doc.metadata.clone(),
            LayoutStats::from_document(doc),
        ))
    }

    fn render_element(&self, doc: &Document, styled: &StyledElement) -> String {
        match &styled.content {
            Content::Items(items) => items
                .iter()
                .map(|item| format!("{} {}", self.options.list_marker, item))
                .collect::<Vec<_>>()
                .join("\n"),
            Content::Text(text) => {
                let text = doc.split_lines(text).collect::<Vec<_>>().join(HARD_BREAK);
                match styled.role {
                    Role::Header => format!("# {}", text),
                    Role::SectionTitle => format!("## {}", text),
                    Role::Subject => format!("**{}**", text),
                    _ => text,
                }
            }
        }
    }
}
