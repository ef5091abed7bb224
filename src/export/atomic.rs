//! Temp-then-rename file writes.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};

use crate::error::{Error, Result};

/// Write `bytes` to `path` through a temporary file in the same directory.
///
/// The destination is replaced in one rename, so readers see either the old
/// file or the complete new one. On failure nothing is retried: the
/// temporary file is kept and its path is reported in [`Error::Export`].
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if path.file_name().is_none() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a file path: {}", path.display()),
        )));
    }

    let mut temp = Builder::new()
        .prefix(".cvpress-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    log::debug!("Writing {} bytes to {}", bytes.len(), temp.path().display());

    if let Err(source) = temp.write_all(bytes).and_then(|_| temp.as_file().sync_all()) {
        return Err(keep(temp, path, source));
    }

    temp.persist(path).map_err(|e| keep(e.file, path, e.error))?;
    Ok(())
}

/// Keep the temporary file on disk and build the export error.
fn keep(temp: NamedTempFile, target: &Path, source: io::Error) -> Error {
    let temp_path = match temp.keep() {
        Ok((_, path)) => path,
        Err(e) => {
            log::warn!("Could not keep temporary file: {}", e.error);
            e.file.path().to_path_buf()
        }
    };
    log::error!(
        "Export to {} failed, partial output kept at {}",
        target.display(),
        temp_path.display()
    );
    Error::Export {
        temp: temp_path,
        target: PathBuf::from(target),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn leftovers(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect()
    }

    #[test]
    fn test_write_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Lettre - Jean.html");

        write_atomic(&path, b"<p>Bonjour</p>").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"<p>Bonjour</p>");
        assert!(leftovers(dir.path()).is_empty());
    }

    #[test]
    fn test_replace_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("CV - Jean.md");
        fs::write(&path, "old content that is longer").unwrap();

        write_atomic(&path, b"new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(leftovers(dir.path()).is_empty());
    }

    #[test]
    fn test_persist_failure_keeps_temp() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the destination makes the rename fail.
        let target = dir.path().join("CV - Jean.md");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("inside"), "x").unwrap();

        let err = write_atomic(&target, b"content").unwrap_err();
        match err {
            Error::Export { temp, target: t, .. } => {
                assert_eq!(t, target);
                assert_eq!(fs::read(&temp).unwrap(), b"content");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(target.is_dir());
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("CV.md");
        assert!(matches!(write_atomic(&path, b"x"), Err(Error::Io(_))));
    }
}
