//! Configuration schema definitions.
//!
//! This module defines the configuration structure for winpath: cache sizing
//! for both tiers and the Git Bash de-mangling settings. Every field has a
//! default, so an empty YAML document is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use winpath::config::{CacheConfig, Config};
///
/// let config = Config {
///     cache: CacheConfig {
///         capacity: 4096,
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// assert_eq!(config.cache.shards, 16);
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Normalization cache sizing.
    pub cache: CacheConfig,

    /// Git Bash argument de-mangling.
    pub git_bash: GitBashConfig,
}

impl Config {
    /// Parse a configuration from a YAML document.
    ///
    /// Missing fields take their defaults. The result is not validated; see
    /// [`ConfigValidator`](crate::config::ConfigValidator).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the document is malformed or names an
    /// unknown field.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpath::config::Config;
    ///
    /// let config = Config::from_yaml_str("cache:\n  capacity: 64\n  shards: 4\n").unwrap();
    /// assert_eq!(config.cache.capacity, 64);
    /// assert!(config.git_bash.demangle);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// Sizing for the two cache tiers.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Positive tier entries, across all shards.
    pub capacity: usize,

    /// Number of independently locked shards per tier.
    pub shards: usize,

    /// Rejected-input entries, across all shards.
    pub negative_capacity: usize,

    /// Items the Bloom filter is sized for before it is rebuilt.
    pub negative_expected_items: usize,

    /// Target false-positive rate of the Bloom filter.
    pub false_positive_rate: f64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            shards: 16,
            negative_capacity: 256,
            negative_expected_items: 4096,
            false_positive_rate: 0.01,
        }
    }
}

/// Git Bash rewrites `/mnt/c/x` arguments into paths under its install
/// directory (`C:\Program Files\Git\mnt\c\x`); these settings control undoing
/// that.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GitBashConfig {
    /// Whether to de-mangle at all.
    pub demangle: bool,

    /// Directory names that identify a Git install (case-insensitive).
    pub install_dirs: Vec<String>,
}

impl Default for GitBashConfig {
    fn default() -> Self {
        Self {
            demangle: true,
            install_dirs: vec!["git".into(), "portablegit".into(), "mingit".into()],
        }
    }
}
