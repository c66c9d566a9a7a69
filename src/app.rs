//! Per-invocation context shared by the commands.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{IoResultExt, Result};

/// Loaded configuration plus global flags.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub machine: bool,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().at_path("resolve", Path::new("."))?;
        let config = Config::load(cli.config.as_deref(), &cwd)?;
        Ok(Self {
            config,
            config_path: cli.config.clone(),
            machine: cli.machine,
        })
    }
}
