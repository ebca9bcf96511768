//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{ClassifyCommand, ConvertCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Convert paths between Windows path dialects.
#[derive(Parser)]
#[command(name = "winpath")]
#[command(version, about = "Convert paths between Windows path dialects", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration file (default: ~/.winpath/config.yaml)
    #[arg(long, value_name = "FILE", global = true, env = "WINPATH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert paths to another dialect
    Convert(ConvertCommand),

    /// Report the dialect of each path
    Classify(ClassifyCommand),
}
