//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `WINPATH_*` environment variables that
//! override configuration file values.

use std::env;
use std::str::FromStr;

use crate::config::schema::Config;
use crate::error::ConfigError;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use winpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads the `WINPATH_*` variables and applies them with higher
    /// precedence than file-based configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the variable if any value
    /// cannot be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<(), ConfigError> {
        if let Some(capacity) = Self::parse_var("WINPATH_CACHE_CAPACITY")? {
            config.cache.capacity = capacity;
        }

        if let Some(shards) = Self::parse_var("WINPATH_CACHE_SHARDS")? {
            config.cache.shards = shards;
        }

        if let Some(capacity) = Self::parse_var("WINPATH_NEGATIVE_CAPACITY")? {
            config.cache.negative_capacity = capacity;
        }

        if let Some(items) = Self::parse_var("WINPATH_NEGATIVE_EXPECTED_ITEMS")? {
            config.cache.negative_expected_items = items;
        }

        if let Some(rate) = Self::parse_var("WINPATH_FALSE_POSITIVE_RATE")? {
            config.cache.false_positive_rate = rate;
        }

        if let Ok(val) = env::var("WINPATH_GIT_BASH_DEMANGLE") {
            config.git_bash.demangle = Self::parse_bool("WINPATH_GIT_BASH_DEMANGLE", &val)?;
        }

        Ok(())
    }

    /// Read and parse a numeric variable, if set.
    fn parse_var<T: FromStr>(field: &str) -> Result<Option<T>, ConfigError> {
        match env::var(field) {
            Ok(val) => val
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::Validation {
                    field: field.into(),
                    message: format!("Invalid numeric value: '{val}'"),
                }),
            Err(_) => Ok(None),
        }
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool, ConfigError> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
