//! Print-ready HTML rendering for laid-out documents.
//!
//! Each styled element becomes one `<p>` (or `<ul>` for grouped bullets)
//! carrying its paragraph style inline; the page size and margins go into an
//! `@page` rule so the file prints to A4 as laid out.

use std::fmt::Write;

use crate::error::{Error, Result};
use crate::model::{Content, Document, Element, ParagraphStyle, StyledElement};

use super::RenderOptions;

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    HtmlRenderer::new(options.clone()).render(doc)
}

/// HTML renderer.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to a standalone HTML page.
    pub fn render(&self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
            .map_err(|e| Error::Render(format!("HTML formatting error: {}", e)))
    }

    fn render_internal(&self, doc: &Document) -> std::result::Result<String, std::fmt::Error> {
        let mut out = String::new();
        let page = &doc.page;
        let title = doc.metadata.title.as_deref().unwrap_or_default();

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"{}\">", escape(&self.options.language))?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{}</title>", escape(title))?;
        writeln!(out, "<style>")?;
        writeln!(
            out,
            "@page {{ size: {} {}; margin: {} {} {} {}; }}",
            pt(page.width),
            pt(page.height),
            pt(page.margin_top),
            pt(page.margin_right),
            pt(page.margin_bottom),
            pt(page.margin_left)
        )?;
        writeln!(
            out,
            "body {{ margin: 0; font-family: {}; }}",
            css_value(&self.options.font_family)
        )?;
        writeln!(out, "p, ul {{ margin: 0; }}")?;
        writeln!(out, "</style>")?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;

        for element in &doc.elements {
            match element {
                Element::Spacer { height } => {
                    writeln!(out, "<div style=\"height: {}\"></div>", pt(*height))?;
                }
                Element::Styled(styled) => {
                    self.render_styled(&mut out, doc, styled)?;
                }
            }
        }

        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(out)
    }

    fn render_styled(
        &self,
        out: &mut String,
        doc: &Document,
        styled: &StyledElement,
    ) -> std::fmt::Result {
        let style = doc.styles.style(styled.role);
        let class = styled.role.name();

        match &styled.content {
            Content::Text(text) => {
                let lines: Vec<String> = doc.split_lines(text).map(escape).collect();
                writeln!(
                    out,
                    "<p class=\"{}\" style=\"{}\">{}</p>",
                    class,
                    text_css(&style),
                    lines.join("<br/>")
                )
            }
            Content::Items(items) => {
                writeln!(
                    out,
                    "<ul class=\"{}\" style=\"{} padding-left: {}; list-style-type: '{} ';\">",
                    class,
                    font_css(&style),
                    pt(style.list_indent),
                    escape(&css_string(&self.options.list_marker.to_string()))
                )?;
                for item in items {
                    writeln!(
                        out,
                        "<li style=\"margin: {} 0 {} {};\">{}</li>",
                        pt(style.space_before),
                        pt(style.space_after),
                        pt(style.left_indent),
                        escape(item)
                    )?;
                }
                writeln!(out, "</ul>")
            }
        }
    }
}

/// Alignment, font and spacing declarations of a paragraph.
fn text_css(style: &ParagraphStyle) -> String {
    format!(
        "text-align: {}; {} margin: {} 0 {} {};",
        style.alignment.as_css(),
        font_css(style),
        pt(style.space_before),
        pt(style.space_after),
        pt(style.left_indent)
    )
}

fn font_css(style: &ParagraphStyle) -> String {
    let weight = if style.is_bold() { "bold" } else { "normal" };
    format!(
        "font-weight: {}; font-size: {}; line-height: {};",
        weight,
        pt(style.font_size),
        pt(style.leading)
    )
}

/// Format a length in points, two decimals at most.
fn pt(value: f32) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{}pt", trimmed)
}

/// Drop the characters that would end a CSS declaration or the style
/// element.
fn css_value(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>'))
        .collect()
}

/// Escape text for a single-quoted CSS string.
fn css_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Escape text for HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentKind, Role};

    #[test]
    fn test_pt() {
        assert_eq!(pt(16.0), "16pt");
        assert_eq!(pt(1.5), "1.5pt");
        assert_eq!(pt(56.692_91), "56.69pt");
        assert_eq!(pt(0.0), "0pt");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("R&D <chimie> \"x\""), "R&amp;D &lt;chimie&gt; &quot;x&quot;");
    }

    #[test]
    fn test_html_page_rule() {
        let doc = Document::new(DocumentKind::Letter);
        let html = to_html(&doc, &RenderOptions::default()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("@page { size: 595.28pt 841.89pt; margin: 70.87pt"));
        assert!(html.contains("<html lang=\"fr\">"));
    }

    #[test]
    fn test_html_language() {
        let doc = Document::new(DocumentKind::Resume);
        let options = RenderOptions::new().with_language("en");
        let html = to_html(&doc, &options).unwrap();
        assert!(html.contains("<html lang=\"en\">"));
    }

    #[test]
    fn test_hostile_font_family() {
        let doc = Document::new(DocumentKind::Resume);
        let options = RenderOptions::new().with_font_family("Evil; } body { color: red </style>");
        let html = to_html(&doc, &options).unwrap();
        assert!(html.contains("font-family: Evil  body  color: red /style; }"));
        assert_eq!(html.matches("</style>").count(), 1);
    }

    #[test]
    fn test_list_marker_quotes() {
        let mut doc = Document::new(DocumentKind::Resume);
        doc.push(Element::bullets(["Poste A"]));

        let html = to_html(&doc, &RenderOptions::new().with_list_marker('"')).unwrap();
        assert!(html.contains("list-style-type: '&quot; ';\">"));

        let html = to_html(&doc, &RenderOptions::new().with_list_marker('\'')).unwrap();
        assert!(html.contains("list-style-type: '\\&#39; ';\">"));
    }

    #[test]
    fn test_html_elements() {
        let mut doc = Document::new(DocumentKind::Resume);
        doc.metadata.title = Some("Jean & Co".to_string());
        doc.push(Element::text(Role::Header, "Jean & Co"));
        doc.push(Element::spacer(8.0));
        doc.push(Element::bullets(["Poste <A>"]));
        doc.push(Element::text(Role::Paragraph, "ligne 1<br/>ligne 2"));

        let html = to_html(&doc, &RenderOptions::default()).unwrap();
        assert!(html.contains("<title>Jean &amp; Co</title>"));
        assert!(html.contains(
            "<p class=\"header\" style=\"text-align: center; font-weight: bold; font-size: 16pt;"
        ));
        assert!(html.contains("<div style=\"height: 8pt\"></div>"));
        assert!(html.contains("<ul class=\"bullet\""));
        assert!(html.contains(">Poste &lt;A&gt;</li>"));
        assert!(html.contains(">ligne 1<br/>ligne 2</p>"));
    }
}
