//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod output;

/// Import recorder-generated Gatling simulations into a project
#[derive(Parser, Debug)]
#[command(name = "sim-import")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit machine-readable JSON instead of the human summary
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ./sim-import.toml and ~/.config/sim-import/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean previous artifacts, then import the recorded simulation
    Run(commands::run::RunArgs),

    /// Delete generated request bodies and the generated simulation
    Clean(commands::clean::CleanArgs),

    /// Copy request bodies and rewrite the simulation without cleaning first
    Import(commands::import::ImportArgs),

    /// Apply the rewrite rules to a single script
    Rewrite(commands::rewrite::RewriteArgs),

    /// Show the effective configuration
    Config(commands::config::ConfigArgs),
}
