//! Errors surfaced by the binary and the exit code each maps to.

use std::fmt;
use winpath::{ConfigError, PathError};

/// Everything a command can fail with.
#[derive(Debug)]
pub enum CliError {
    /// A path argument was rejected by the library.
    InvalidPath {
        /// The argument as given.
        raw: String,
        /// Why it was rejected.
        source: PathError,
    },

    /// Some path arguments were rejected; each was already reported.
    RejectedPaths {
        /// Number of rejected arguments.
        rejected: usize,
        /// Number of arguments processed.
        total: usize,
    },

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 4: Invalid path argument
    /// - 5: I/O error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidPath { .. } | CliError::RejectedPaths { .. } => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPath { raw, source } => write!(f, "invalid path '{raw}': {source}"),
            CliError::RejectedPaths { rejected, total } => {
                write!(f, "{rejected} of {total} paths rejected")
            }
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::InvalidPath { source, .. } => Some(source),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
