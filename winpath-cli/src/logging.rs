//! Logger setup for the CLI.
//!
//! The library only emits `log` records; the binary decides where they go.
//! Level precedence: `--verbose` / `--quiet`, then `WINPATH_LOG_MODE`
//! (`quiet`, `normal` or `verbose`), then `RUST_LOG`, then `warn`.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::env;

/// Environment variable selecting a log mode when no flag is given.
pub const LOG_MODE_VAR: &str = "WINPATH_LOG_MODE";

/// Install the global logger.
///
/// Only the first call installs anything; a later call leaves the existing
/// logger in place and reports that at debug level through it.
pub fn init_logging(verbose: bool, quiet: bool) {
    let mode = env::var(LOG_MODE_VAR).ok();
    let mut builder = match resolve_level(verbose, quiet, mode.as_deref()) {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(level);
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };
    builder.format_timestamp(None);
    if let Err(e) = builder.try_init() {
        log::debug!("keeping the logger already installed: {e}");
    }
}

/// The fixed level chosen by flags or `WINPATH_LOG_MODE`, if any.
///
/// `None` leaves the decision to `RUST_LOG`.
pub fn resolve_level(verbose: bool, quiet: bool, mode: Option<&str>) -> Option<LevelFilter> {
    if verbose {
        return Some(LevelFilter::Debug);
    }
    if quiet {
        return Some(LevelFilter::Error);
    }
    match mode.map(|m| m.trim().to_lowercase()).as_deref() {
        Some("quiet") => Some(LevelFilter::Error),
        Some("normal") => Some(LevelFilter::Warn),
        Some("verbose") => Some(LevelFilter::Debug),
        _ => None,
    }
}
