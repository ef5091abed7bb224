//! Résumé segmentation into identity block, intro paragraph and body.

use super::{normalize, split_lines, Line};

/// The three regions of a résumé.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResumeSections<'a> {
    /// Header and identity lines, including the blank separator line that
    /// ended the block
    pub identity: Vec<&'a str>,

    /// First paragraph after the identity block, lines trimmed and joined
    /// with single spaces
    pub intro: String,

    /// Remaining lines, unmodified
    pub body: Vec<&'a str>,
}

impl<'a> ResumeSections<'a> {
    /// Normalized non-empty identity lines, header first.
    fn identity_texts(&self) -> impl Iterator<Item = String> + '_ {
        self.identity
            .iter()
            .map(|line| normalize(line))
            .filter(|line| !line.is_empty())
    }

    /// Header text: the first identity line with content.
    pub fn header(&self) -> Option<String> {
        self.identity_texts().next()
    }

    /// Identity lines rendered below the header.
    pub fn identity_lines(&self) -> Vec<String> {
        self.identity_texts().skip(1).collect()
    }
}

/// Split a résumé into identity, intro and body.
///
/// The identity block starts at the first non-blank line and ends at the
/// first blank line met once two non-blank lines have been collected; that
/// blank line is kept as the block's last entry. The intro is the next
/// paragraph. Everything after the blank lines that follow the intro is
/// the body.
///
/// # Example
///
/// ```
/// use cvpress::parser::segment_resume;
///
/// let sections = segment_resume("Jean Dupont\njean@mail.com\n\nIngénieur.\n\nEXPERIENCE");
/// assert_eq!(sections.identity, vec!["Jean Dupont", "jean@mail.com", ""]);
/// assert_eq!(sections.intro, "Ingénieur.");
/// assert_eq!(sections.body, vec!["EXPERIENCE"]);
/// ```
pub fn segment_resume(text: &str) -> ResumeSections<'_> {
    let lines = split_lines(text);
    let mut i = skip_blank(&lines, 0);

    let mut identity = Vec::new();
    let mut filled = 0;
    while i < lines.len() {
        let line = lines[i];
        identity.push(line.raw());
        if !line.is_blank() {
            filled += 1;
        }
        i += 1;

        if filled >= 2 && i < lines.len() && lines[i].is_blank() {
            identity.push(lines[i].raw());
            i += 1;
            break;
        }
    }

    i = skip_blank(&lines, i);

    let mut intro = Vec::new();
    while i < lines.len() && !lines[i].is_blank() {
        intro.push(lines[i].trimmed());
        i += 1;
    }

    i = skip_blank(&lines, i);

    let body = lines[i..].iter().map(Line::raw).collect();

    let sections = ResumeSections {
        identity,
        intro: intro.join(" "),
        body,
    };
    log::debug!(
        "Segmented résumé: {} identity lines, intro {} chars, {} body lines",
        sections.identity.len(),
        sections.intro.len(),
        sections.body.len()
    );
    sections
}

fn skip_blank(lines: &[Line<'_>], mut i: usize) -> usize {
    while i < lines.len() && lines[i].is_blank() {
        i += 1;
    }
    i
}
