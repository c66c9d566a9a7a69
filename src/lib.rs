pub mod app;
pub mod bodies;
pub mod cleanup;
pub mod cli;
pub mod config;
pub mod error;
pub mod importer;
pub mod rewrite;
pub mod test_utils;
pub mod utils;

pub use error::{ImportError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
