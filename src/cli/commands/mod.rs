//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use std::path::PathBuf;

use clap::Args;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::config::ImportPaths;
use crate::error::Result;

pub mod clean;
pub mod config;
pub mod import;
pub mod rewrite;
pub mod run;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Run(args) => run::run(ctx, args),
        Commands::Clean(args) => clean::run(ctx, args),
        Commands::Import(args) => import::run(ctx, args),
        Commands::Rewrite(args) => rewrite::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
    }
}

/// Path overrides shared by the commands that touch the project.
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// Project the simulation is imported into
    #[arg(long)]
    pub project_root: Option<PathBuf>,

    /// Root of the Gatling bundle that produced the recording
    #[arg(long)]
    pub recorder_root: Option<PathBuf>,

    /// Substring identifying generated files
    #[arg(long)]
    pub marker: Option<String>,
}

impl PathArgs {
    /// Resolve the import locations, letting flags win over config.
    #[must_use]
    pub fn resolve(&self, ctx: &AppContext) -> ImportPaths {
        let mut paths = ctx.config.paths.clone();
        if let Some(root) = &self.project_root {
            paths.project_root.clone_from(root);
        }
        if let Some(root) = &self.recorder_root {
            paths.recorder_root.clone_from(root);
        }
        if let Some(marker) = &self.marker {
            paths.marker.clone_from(marker);
        }
        paths.resolve()
    }
}
