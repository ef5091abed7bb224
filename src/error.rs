//! Error types for cvpress library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cvpress operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while laying out or exporting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A letter does not have enough blank-line-delimited blocks.
    #[error("Letter structure invalid: expected at least 4 blocks, found {blocks}")]
    Structure {
        /// Number of blocks found in the input
        blocks: usize,
    },

    /// No renderer is registered for the requested format.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// The output path has no extension to pick a renderer from.
    #[error("Output path has no extension: {0}")]
    MissingExtension(PathBuf),

    /// Error during rendering (HTML, Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Writing or replacing the output file failed.
    ///
    /// The final path is left untouched; the partially written temporary
    /// file is kept at `temp` for inspection.
    #[error("Failed to export {target} (partial output kept at {temp}): {source}")]
    Export {
        /// Preserved temporary file
        temp: PathBuf,
        /// Intended output path
        target: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}
