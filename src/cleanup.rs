//! Removal of artifacts left by a previous import.

use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{ImportError, IoResultExt, Result};
use crate::utils::fs::remove_if_exists;

/// What a cleanup pass removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    pub bodies_removed: usize,
    pub output_removed: bool,
}

/// Delete generated body files and the previously generated script.
///
/// Files under `bodies_target` whose name contains `marker` are deleted. A
/// missing `bodies_target` or `simulation_output` is not an error.
pub fn clean(bodies_target: &Path, simulation_output: &Path, marker: &str) -> Result<CleanupReport> {
    info!(dir = %bodies_target.display(), "Deleting old request bodies");
    let bodies_removed = remove_marked_files(bodies_target, marker)?;

    info!(path = %simulation_output.display(), "Deleting old simulation");
    let output_removed = remove_if_exists(simulation_output)?;

    Ok(CleanupReport {
        bodies_removed,
        output_removed,
    })
}

/// Delete every file below `dir` whose file name contains `marker`.
///
/// A missing `dir` counts as empty; an existing non-directory is an error.
pub fn remove_marked_files(dir: &Path, marker: &str) -> Result<usize> {
    if !dir.is_dir() {
        if dir.exists() {
            return Err(ImportError::path(
                "scan body directory",
                dir,
                io::Error::from(io::ErrorKind::NotADirectory),
            ));
        }
        debug!(dir = %dir.display(), "Body directory absent, nothing to delete");
        return Ok(0);
    }

    let mut removed = 0;
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() || !name_contains(entry.path(), marker) {
            continue;
        }
        std::fs::remove_file(entry.path()).at_path("delete", entry.path())?;
        debug!(path = %entry.path().display(), "Deleted request body");
        removed += 1;
    }
    Ok(removed)
}

pub(crate) fn name_contains(path: &Path, marker: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().contains(marker))
}
