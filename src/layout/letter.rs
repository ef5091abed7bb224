//! Cover letter emission.

use crate::error::Result;
use crate::model::{Document, DocumentKind, Element, Role};
use crate::parser::{normalize, segment_letter, Block};

use super::LayoutOptions;

/// Gap after the date line.
const DATE_GAP: f32 = 10.0;
/// Gap after the subject line.
const SUBJECT_GAP: f32 = 10.0;

/// Lay out a cover letter.
///
/// Blocks map positionally to date, recipient, subject, body paragraphs and
/// signature. Fails with [`Error::Structure`](crate::Error::Structure) when
/// the text has fewer than four blocks; nothing is emitted in that case.
pub fn layout_letter(text: &str, options: &LayoutOptions) -> Result<Document> {
    let sections = segment_letter(text)?;
    let marker = options.line_break.as_str();
    let mut doc = Document::new(DocumentKind::Letter).with_line_break(marker);

    doc.push(Element::text(Role::DateLine, normalize(sections.date)));
    doc.push(Element::spacer(DATE_GAP));
    doc.push(Element::text(
        Role::Recipient,
        join_block(&sections.recipient, marker),
    ));

    let subject = normalize(sections.subject);
    doc.metadata.subject = Some(subject.clone());
    doc.push(Element::text(Role::Subject, subject));
    doc.push(Element::spacer(SUBJECT_GAP));

    doc.extend(
        sections
            .body
            .iter()
            .map(|block| Element::text(Role::Body, join_block(block, marker))),
    );
    doc.push(Element::text(
        Role::Signature,
        join_block(&sections.signature, marker),
    ));

    Ok(doc)
}

/// Normalize every line of a block and join them with the marker.
fn join_block(block: &Block<'_>, marker: &str) -> String {
    block
        .lines()
        .iter()
        .map(|line| normalize(line))
        .collect::<Vec<_>>()
        .join(marker)
}
