//! Résumé classification and emission.

use crate::model::{Document, DocumentKind, Element, Role};
use crate::parser::{classify_line, normalize, segment_resume, LineClass};

use super::LayoutOptions;

/// Gap before the intro paragraph.
const INTRO_GAP_BEFORE: f32 = 10.0;
/// Gap after the intro paragraph.
const INTRO_GAP_AFTER: f32 = 6.0;
/// Gap between the header region and the body.
const BODY_GAP: f32 = 8.0;
/// Gap emitted for each blank body line.
const BLANK_LINE_GAP: f32 = 6.0;

/// Lay out a résumé.
///
/// Emits the header, identity lines, the intro paragraph (when present) and
/// the classified body. A document without any identity line gets
/// `options.placeholder` as its header.
pub fn layout_resume(text: &str, options: &LayoutOptions) -> Document {
    let sections = segment_resume(text);
    let mut doc = Document::new(DocumentKind::Resume).with_line_break(options.line_break.as_str());

    let header = sections.header().unwrap_or_else(|| {
        log::warn!(
            "Résumé has no identity line, using placeholder header {:?}",
            options.placeholder
        );
        options.placeholder.clone()
    });
    doc.metadata.title = Some(header.clone());
    doc.push(Element::text(Role::Header, header));
    doc.extend(
        sections
            .identity_lines()
            .into_iter()
            .map(|line| Element::text(Role::IdentityLine, line)),
    );

    let intro = normalize(&sections.intro);
    if !intro.is_empty() {
        doc.push(Element::spacer(INTRO_GAP_BEFORE));
        doc.push(Element::text(Role::Intro, intro));
        doc.push(Element::spacer(INTRO_GAP_AFTER));
    }
    doc.push(Element::spacer(BODY_GAP));

    doc.extend(classify_body(&sections.body, options.bullet));
    doc
}

/// Classify résumé body lines into styled elements.
///
/// Consecutive bullet lines are grouped into one list element; a blank
/// line, title or paragraph ends the group. The first plain text line is
/// emitted as an intro paragraph, later ones as ordinary paragraphs. Each
/// blank line becomes a spacer.
pub fn classify_body<S: AsRef<str>>(lines: &[S], bullet: char) -> Vec<Element> {
    lines
        .iter()
        .fold(BodyWalk::default(), |walk, line| {
            walk.step(classify_line(line.as_ref(), bullet))
        })
        .finish()
}

/// Bullets waiting to be emitted as one list.
#[derive(Debug, Default)]
struct BulletBuffer {
    items: Vec<String>,
}

impl BulletBuffer {
    fn push(&mut self, item: String) {
        self.items.push(item);
    }

    fn flush(&mut self) -> Option<Element> {
        if self.items.is_empty() {
            None
        } else {
            Some(Element::bullets(std::mem::take(&mut self.items)))
        }
    }
}

/// One-shot flag for the body intro paragraph.
#[derive(Debug, Default)]
struct IntroLatch {
    consumed: bool,
}

impl IntroLatch {
    /// True the first time only.
    fn take(&mut self) -> bool {
        !std::mem::replace(&mut self.consumed, true)
    }
}

/// Fold state of the body walk.
#[derive(Debug, Default)]
struct BodyWalk {
    pending: BulletBuffer,
    intro: IntroLatch,
    out: Vec<Element>,
}

impl BodyWalk {
    fn step(mut self, class: LineClass) -> Self {
        match class {
            LineClass::Blank => {
                self.flush();
                self.out.push(Element::spacer(BLANK_LINE_GAP));
            }
            LineClass::SectionTitle(text) => {
                self.flush();
                self.out.push(Element::text(Role::SectionTitle, text));
            }
            LineClass::Bullet(text) => self.pending.push(text),
            LineClass::Text(text) => {
                self.flush();
                let role = if self.intro.take() {
                    Role::Intro
                } else {
                    Role::Paragraph
                };
                self.out.push(Element::text(role, text));
            }
        }
        self
    }

    fn flush(&mut self) {
        if let Some(list) = self.pending.flush() {
            self.out.push(list);
        }
    }

    fn finish(mut self) -> Vec<Element> {
        self.flush();
        self.out
    }
}
