//! Segmentation of loosely-structured résumé and letter text.
//!
//! Everything here is a pure function of the input text: no styling, no
//! rendering. The layout module turns these results into documents.

mod classify;
mod letter;
mod lines;
mod normalize;
mod resume;

pub use classify::{classify_line, LineClass};
pub use letter::{segment_letter, LetterSections};
pub use lines::{split_blocks, split_lines, Block, Line};
pub use normalize::{is_section_title, normalize, SECTION_TITLE_MAX_CHARS};
pub use resume::{segment_resume, ResumeSections};
