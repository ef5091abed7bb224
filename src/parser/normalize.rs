//! Whole-line markdown decoration stripping and section-title detection.

/// Lines at or above this many characters are never section titles.
pub const SECTION_TITLE_MAX_CHARS: usize = 40;

/// Strip whole-line decoration from a single line.
///
/// Removes surrounding whitespace, then in order: `**` markers wrapping the
/// entire line, `*` markers wrapping the entire line, and leading `#`
/// markers with the whitespace that follows them. Inline decoration inside
/// a longer line is left untouched.
///
/// The sequence is repeated until the line stops changing, so
/// `normalize(&normalize(x)) == normalize(x)` for every input.
///
/// # Example
///
/// ```
/// use cvpress::parser::normalize;
///
/// assert_eq!(normalize("  **EXPERIENCE**  "), "EXPERIENCE");
/// assert_eq!(normalize("## Formation"), "Formation");
/// assert_eq!(normalize("Chimie **industrielle**"), "Chimie **industrielle**");
/// ```
pub fn normalize(line: &str) -> String {
    let mut current = line;
    loop {
        let next = strip_once(current);
        // strip_once only ever returns a sub-slice
        if next.len() == current.len() {
            return next.to_string();
        }
        current = next;
    }
}

fn strip_once(line: &str) -> &str {
    let mut text = line.trim();
    if let Some(inner) = wrapped(text, "**") {
        text = inner;
    }
    if let Some(inner) = wrapped(text, "*") {
        text = inner;
    }
    if text.starts_with('#') {
        text = text.trim_start_matches('#').trim_start();
    }
    text.trim()
}

/// Inner text when `marker` both opens and closes the line around at least
/// one character.
fn wrapped<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let inner = text.strip_prefix(marker)?.strip_suffix(marker)?;
    if inner.is_empty() || inner.contains('\n') {
        None
    } else {
        Some(inner)
    }
}

/// Check whether a line reads as a section title.
///
/// After normalization the line must be shorter than
/// [`SECTION_TITLE_MAX_CHARS`] characters, contain at least one letter, and
/// every letter must be uppercase. Digits and punctuation are ignored.
pub fn is_section_title(line: &str) -> bool {
    let clean = normalize(line);
    if clean.chars().count() >= SECTION_TITLE_MAX_CHARS {
        return false;
    }

    let mut letters = clean.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(is_upper)
}

fn is_upper(c: char) -> bool {
    c.to_uppercase().eq(std::iter::once(c))
}
