//! Filesystem utilities.
//!
//! Helper functions for file operations.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{IoResultExt, Result};

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        std::fs::create_dir_all(path).at_path("create directory", path)?;
    }
    Ok(())
}

/// Remove a file, returning `false` if it did not exist.
pub fn remove_if_exists(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(crate::error::ImportError::path("delete", path, err)),
    }
}

/// Write lines to `path` through a temp file in the same directory.
///
/// Every line is terminated with `\n`. The target only ever holds the old
/// content or the complete new content.
pub fn write_lines_atomic<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = NamedTempFile::new_in(parent).at_path("create temp file in", parent)?;
    {
        let mut writer = std::io::BufWriter::new(temp.as_file_mut());
        for line in lines {
            writer.write_all(line.as_ref().as_bytes()).at_path("write", path)?;
            writer.write_all(b"\n").at_path("write", path)?;
        }
        writer.flush().at_path("write", path)?;
    }
    temp.persist(path)
        .map_err(|err| crate::error::ImportError::path("replace", path, err.error))?;
    Ok(())
}
