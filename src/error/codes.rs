//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Script errors
//! - 3xx: Config errors
//! - 6xx: Filesystem errors

use serde::Serialize;

/// Standardized error codes for machine mode output.
///
/// Each variant maps to a numeric code (e.g., `MalformedRequest` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Script errors (1xx)
    // ========================================
    /// E101: A request placeholder is not followed by a method call line
    MalformedRequest,
    /// E102: A configured pattern is not a valid regular expression
    InvalidPattern,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,

    // ========================================
    // Filesystem errors (6xx)
    // ========================================
    /// E601: Reading, writing or deleting a file failed
    IoError,
    /// E602: Walking a body directory failed
    WalkError,
}

impl ErrorCode {
    /// Numeric value of the code (e.g. 101).
    #[must_use]
    pub const fn numeric(self) -> u16 {
        match self {
            Self::MalformedRequest => 101,
            Self::InvalidPattern => 102,
            Self::ConfigInvalid => 302,
            Self::IoError => 601,
            Self::WalkError => 602,
        }
    }

    /// Category name used to group codes.
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::MalformedRequest | Self::InvalidPattern => "script",
            Self::ConfigInvalid => "config",
            Self::IoError | Self::WalkError => "filesystem",
        }
    }

    /// Short recovery hint shown next to the error.
    #[must_use]
    pub const fn suggestion(self) -> &'static str {
        match self {
            Self::MalformedRequest => {
                "Re-record the simulation or fix the request block by hand, then run again"
            }
            Self::InvalidPattern => "Check the regular expression in [rewrite.anchor] pattern",
            Self::ConfigInvalid => "Run `sim-import config` to inspect the effective configuration",
            Self::IoError | Self::WalkError => {
                "Check that the configured paths exist and are writable, then rerun `sim-import run`"
            }
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}", self.numeric())
    }
}
