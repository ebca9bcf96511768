//! Command implementations for the winpath CLI.
//!
//! Each command reads its path arguments, reports rejected ones on stderr
//! and keeps going, and fails with exit code 4 at the end if any were
//! rejected.

pub mod classify;
pub mod convert;

pub use classify::ClassifyCommand;
pub use convert::{ConvertCommand, Target};

use clap::ValueEnum;

/// Output format shared by the commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One result per line
    Plain,
    /// One JSON object per line
    Json,
}
