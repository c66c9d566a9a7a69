//! Copying recorded request bodies into the project.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::cleanup::name_contains;
use crate::error::{ImportError, IoResultExt, Result};
use crate::utils::fs::ensure_dir;

/// Copy every file below `source` whose name contains `marker` into `target`.
///
/// Files land directly in `target` under their own file name, overwriting
/// any existing file. Returns the written paths sorted by file name.
pub fn copy_bodies(source: &Path, target: &Path, marker: &str) -> Result<Vec<PathBuf>> {
    info!(from = %source.display(), to = %target.display(), "Copying new request bodies");
    if !source.is_dir() {
        return Err(ImportError::path(
            "read body directory",
            source,
            std::io::Error::new(std::io::ErrorKind::NotFound, "directory not found"),
        ));
    }
    ensure_dir(target)?;

    let mut copied = Vec::new();
    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !name_contains(entry.path(), marker) {
            continue;
        }
        let destination = target.join(entry.file_name());
        std::fs::copy(entry.path(), &destination).at_path("copy", entry.path())?;
        debug!(from = %entry.path().display(), to = %destination.display(), "Copied request body");
        copied.push(destination);
    }

    copied.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(copied)
}
