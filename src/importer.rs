//! The two import steps, cleanup followed by the import proper.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::bodies::copy_bodies;
use crate::cleanup::{CleanupReport, clean};
use crate::config::ImportPaths;
use crate::error::{IoResultExt, Result};
use crate::rewrite::{RewriteStats, Rewriter};
use crate::utils::fs::write_lines_atomic;

/// Result of copying bodies and rewriting the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub bodies_copied: Vec<PathBuf>,
    pub simulation_output: PathBuf,
    pub rewrite: RewriteStats,
}

/// Result of a full run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub cleanup: CleanupReport,
    pub import: ImportReport,
}

/// Remove artifacts of a previous import.
pub fn run_cleanup(paths: &ImportPaths) -> Result<CleanupReport> {
    clean(&paths.bodies_target, &paths.simulation_output, &paths.marker)
}

/// Copy request bodies, then rewrite the generated simulation.
///
/// The output file is only written once the whole script has been rewritten.
pub fn run_import(paths: &ImportPaths, rewriter: &Rewriter) -> Result<ImportReport> {
    let bodies_copied = copy_bodies(&paths.bodies_source, &paths.bodies_target, &paths.marker)?;

    info!(path = %paths.simulation_input.display(), "Processing generated simulation");
    let script = std::fs::read_to_string(&paths.simulation_input)
        .at_path("read", &paths.simulation_input)?;
    let rewrite = rewriter.rewrite_str(&script)?;
    write_lines_atomic(&paths.simulation_output, &rewrite.lines)?;

    Ok(ImportReport {
        bodies_copied,
        simulation_output: paths.simulation_output.clone(),
        rewrite: rewrite.stats,
    })
}

/// Cleanup followed by import.
pub fn run(paths: &ImportPaths, rewriter: &Rewriter) -> Result<RunReport> {
    let cleanup = run_cleanup(paths)?;
    let import = run_import(paths, rewriter)?;
    info!(
        bodies = import.bodies_copied.len(),
        lines = import.rewrite.lines_written,
        "Done"
    );
    Ok(RunReport { cleanup, import })
}
