//! Error handling for sim-import.
//!
//! This module provides:
//! - [`ImportError`]: The main error enum for all import operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing

mod codes;

use std::io;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type for sim-import operations.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{action} {}: {source}", .path.display())]
    Path {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Malformed request at line {line}: {reason}")]
    MalformedRequest { line: usize, reason: String },
}

impl ImportError {
    /// Wrap an I/O error with the path and action that produced it.
    pub fn path(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Path {
            action,
            path: path.into(),
            source,
        }
    }

    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) | Self::Path { .. } => ErrorCode::IoError,
            Self::Walk(_) => ErrorCode::WalkError,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::InvalidPattern(_) => ErrorCode::InvalidPattern,
            Self::MalformedRequest { .. } => ErrorCode::MalformedRequest,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::Path { action, path, .. } => {
                Some(serde_json::json!({ "action": action, "path": path }))
            }
            Self::MalformedRequest { line, reason } => {
                Some(serde_json::json!({ "line": line, "reason": reason }))
            }
            _ => None,
        }
    }

    /// Render this error as the JSON object printed in machine mode.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let code = self.code();
        serde_json::json!({
            "error": true,
            "code": code,
            "numeric_code": code.numeric(),
            "category": code.category(),
            "message": self.to_string(),
            "suggestion": code.suggestion(),
            "context": self.context(),
        })
    }
}

/// Result type alias using `ImportError`.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Extension for attaching a path to I/O results.
pub trait IoResultExt<T> {
    fn at_path(self, action: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at_path(self, action: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| ImportError::path(action, path, source))
    }
}
