#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # winpath
//!
//! A library for classifying, normalizing and converting Windows-adjacent
//! path strings.
//!
//! Every supported dialect normalizes into one [`CanonicalPath`], which can
//! be rendered into any dialect on demand. Results are memoized in a
//! concurrent two-tier cache so repeated lookups are cheap. Nothing here
//! touches the filesystem.
//!
//! ## Dialects
//!
//! | [`PathFormat`] | Example                      |
//! |----------------|------------------------------|
//! | `Dos`          | `C:\Users\x`, `\Windows`, `docs\a.txt` |
//! | `Unix`         | `/c/Users/x`, `/usr/bin`, `//server/share` |
//! | `Wsl`          | `/mnt/c/Users/x`             |
//! | `Cygwin`       | `/cygdrive/c/Users/x`        |
//! | `Unc`          | `\\?\C:\Users\x`, `\\?\UNC\server\share` |
//! | `NetworkShare` | `\\server\share\x`           |
//!
//! ## Core Types
//!
//! - [`CanonicalPath`] and [`PathRoot`]: the normalized representation
//! - [`PathFormat`]: the closed set of dialects
//! - [`PathError`] and [`Result`]: rejection reasons
//! - [`PathEngine`]: a normalizer with its own cache
//! - [`Config`]: cache sizing and Git Bash settings
//!
//! ## Examples
//!
//! ```
//! use winpath::PathFormat;
//!
//! assert_eq!(winpath::to_dos("/mnt/c/Users/x").unwrap(), r"C:\Users\x");
//! assert_eq!(winpath::to_wsl(r"C:\Users\x").unwrap(), "/mnt/c/Users/x");
//! assert_eq!(winpath::classify("/cygdrive/d/tmp").unwrap(), PathFormat::Cygwin);
//!
//! let a = winpath::normalize(r"c:\Users\x").unwrap();
//! let b = winpath::normalize("/c/Users/x").unwrap();
//! assert_eq!(a, b);
//! ```

pub mod cache;
pub mod canonical;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod normalize;
pub mod render;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at crate root for convenience
pub use cache::{CacheEntry, CacheStats, NormalizationCache};
pub use canonical::{CanonicalPath, PathRoot};
pub use classify::{classify, MAX_INPUT_LEN};
pub use config::Config;
pub use engine::{init, is_initialized, PathEngine};
pub use error::{ConfigError, PathError, Result};
pub use format::PathFormat;
pub use normalize::Normalizer;
pub use render::{render, MAX_PATH};

/// Normalize a raw path through the process-wide cache.
///
/// # Errors
///
/// Returns the [`PathError`] the input is rejected with. Rejections are
/// cached as well.
///
/// # Examples
///
/// ```
/// use winpath::{PathError, PathRoot};
///
/// let path = winpath::normalize(r"\\server\share\docs").unwrap();
/// assert!(matches!(path.root(), PathRoot::Share { .. }));
/// assert_eq!(winpath::normalize("a<b").unwrap_err().kind(), "reserved-character");
/// assert_eq!(winpath::normalize(""), Err(PathError::EmptyInput));
/// ```
pub fn normalize(raw: &str) -> Result<CanonicalPath> {
    engine::global().normalize(raw)
}

/// Normalize and render into `target`.
///
/// # Errors
///
/// Returns the [`PathError`] the input is rejected with.
pub fn to_format(raw: &str, target: PathFormat) -> Result<String> {
    engine::global().to_format(raw, target)
}

/// Convert to the `Dos` dialect (`C:\Users\x`).
///
/// # Errors
///
/// Returns the [`PathError`] the input is rejected with.
pub fn to_dos(raw: &str) -> Result<String> {
    to_format(raw, PathFormat::Dos)
}

/// Convert to the `Unix` dialect (`/c/Users/x`).
///
/// # Errors
///
/// Returns the [`PathError`] the input is rejected with.
pub fn to_unix(raw: &str) -> Result<String> {
    to_format(raw, PathFormat::Unix)
}

/// Convert to the `Wsl` dialect (`/mnt/c/Users/x`).
///
/// # Errors
///
/// Returns the [`PathError`] the input is rejected with.
pub fn to_wsl(raw: &str) -> Result<String> {
    to_format(raw, PathFormat::Wsl)
}

/// Convert to the `Cygwin` dialect (`/cygdrive/c/Users/x`).
///
/// # Errors
///
/// Returns the [`PathError`] the input is rejected with.
pub fn to_cygwin(raw: &str) -> Result<String> {
    to_format(raw, PathFormat::Cygwin)
}

/// Convert to the long-path `Unc` dialect (`\\?\C:\Users\x`).
///
/// # Errors
///
/// Returns the [`PathError`] the input is rejected with.
pub fn to_unc(raw: &str) -> Result<String> {
    to_format(raw, PathFormat::Unc)
}

/// Convert to the `NetworkShare` dialect (`\\server\share\x`). Paths that
/// are not on a share render as `Dos`.
///
/// # Errors
///
/// Returns the [`PathError`] the input is rejected with.
pub fn to_network_share(raw: &str) -> Result<String> {
    to_format(raw, PathFormat::NetworkShare)
}

/// Convert for Win32 APIs: `Dos`, or `Unc` when longer than [`MAX_PATH`].
///
/// # Errors
///
/// Returns the [`PathError`] the input is rejected with.
///
/// # Examples
///
/// ```
/// assert_eq!(winpath::to_win32("/mnt/c/x").unwrap(), r"C:\x");
/// let long = format!("/mnt/c/{}", "x".repeat(300));
/// assert!(winpath::to_win32(&long).unwrap().starts_with(r"\\?\C:\"));
/// ```
pub fn to_win32(raw: &str) -> Result<String> {
    engine::global().to_win32(raw)
}

/// Statistics of the process-wide cache.
#[must_use]
pub fn cache_stats() -> CacheStats {
    engine::global().stats()
}
