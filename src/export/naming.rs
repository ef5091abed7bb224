//! Output file naming.

use crate::layout::DEFAULT_PLACEHOLDER;
use crate::model::DocumentKind;

/// Characters that cannot appear in a file name on common file systems.
const PATH_HOSTILE: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Gender markers appended to French job titles.
const GENDER_MARKERS: [&str; 4] = ["(H/F)", "(F/H)", "H/F", "F/H"];

/// Remove gender markers such as `(H/F)` from a job title.
///
/// Remaining slashes become spaces.
pub fn clean_job_title(title: &str) -> String {
    let mut cleaned = title.to_string();
    for marker in GENDER_MARKERS {
        cleaned = cleaned.replace(marker, "");
    }
    cleaned.replace('/', " ").trim().to_string()
}

/// Make a title safe to embed in a file name.
///
/// Path-hostile and control characters become spaces, whitespace runs
/// collapse to one space. An empty result falls back to the placeholder.
pub fn sanitize_title(title: &str) -> String {
    let replaced: String = title
        .chars()
        .map(|c| {
            if PATH_HOSTILE.contains(&c) || c.is_control() {
                ' '
            } else {
                c
            }
        })
        .collect();

    let words: Vec<&str> = replaced.split_whitespace().collect();
    if words.is_empty() {
        DEFAULT_PLACEHOLDER.to_string()
    } else {
        words.join(" ")
    }
}

/// File name for an exported document: `CV - {title}.{ext}` or
/// `Lettre - {title}.{ext}`.
pub fn output_file_name(kind: DocumentKind, title: &str, ext: &str) -> String {
    format!(
        "{} - {}.{}",
        kind.file_prefix(),
        sanitize_title(title),
        ext.trim_start_matches('.')
    )
}
