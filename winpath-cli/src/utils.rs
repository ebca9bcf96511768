//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by every command and the
//! configuration loading that runs before the first path is touched.

use crate::error::CliError;
use std::fs;
use std::path::{Path, PathBuf};
use winpath::Config;

/// Global CLI options shared across all commands.
///
/// `--verbose` and `--quiet` only select the log level and are consumed by
/// logger setup in main.rs before this is built.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// The configuration file used when none is given, if a home directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(".winpath").join("config.yaml"))
}

/// Load configuration.
///
/// Sources, lowest priority first:
/// 1. Built-in defaults
/// 2. The configuration file (`--config`, else `~/.winpath/config.yaml` when it exists)
/// 3. `WINPATH_*` environment variables
///
/// An explicitly named file must exist; the default file is optional.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let path = match &global.config {
        Some(path) => Some(path.clone()),
        None => default_config_path().filter(|path| path.is_file()),
    };

    let config = match path {
        Some(path) => read_config_file(&path)?,
        None => Config::default(),
    };

    config.with_env_overrides().map_err(CliError::from)
}

/// Parse a YAML configuration file without applying environment overrides.
pub fn read_config_file(path: &Path) -> Result<Config, CliError> {
    let contents = fs::read_to_string(path)?;
    Config::from_yaml_str(&contents)
        .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
}

/// Load configuration and install it as the process-wide engine.
pub fn init_engine(global: &GlobalOptions) -> Result<(), CliError> {
    let config = load_configuration(global)?;
    log::debug!(
        "cache capacity {}, {} shards, git bash demangling {}",
        config.cache.capacity,
        config.cache.shards,
        if config.git_bash.demangle { "on" } else { "off" }
    );
    winpath::init(config)?;
    Ok(())
}

/// Print one per-path rejection in the shared `error: invalid path` form.
pub fn report_rejection(raw: &str, source: winpath::PathError) {
    let err = CliError::InvalidPath {
        raw: raw.to_string(),
        source,
    };
    eprintln!("error: {err}");
}

/// Turn a rejection count into the command result.
pub fn finish(rejected: usize, total: usize) -> Result<(), CliError> {
    if rejected == 0 {
        Ok(())
    } else {
        Err(CliError::RejectedPaths { rejected, total })
    }
}
