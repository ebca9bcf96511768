//! Configuration validation.
//!
//! This module checks that cache sizing is usable and that the Git Bash
//! install directory names can ever match a single path component.

use crate::config::schema::{CacheConfig, Config, GitBashConfig};
use crate::error::ConfigError;

/// Upper bound on shards per tier.
pub const MAX_SHARDS: usize = 256;

/// Upper bound on entries per tier. Tiers allocate their full capacity up front.
pub const MAX_CAPACITY: usize = 1 << 20;

/// Upper bound on `negative_expected_items`, which sizes the Bloom filter.
pub const MAX_EXPECTED_ITEMS: usize = 1 << 22;

/// Lowest accepted Bloom filter false-positive rate.
pub const MIN_FALSE_POSITIVE_RATE: f64 = 1e-6;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use winpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for the first invalid field.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_cache(&config.cache)?;
        Self::validate_git_bash(&config.git_bash)?;
        Ok(())
    }

    fn validate_cache(cache: &CacheConfig) -> Result<(), ConfigError> {
        Self::validate_size("cache.capacity", cache.capacity, MAX_CAPACITY)?;
        Self::validate_size(
            "cache.negative_capacity",
            cache.negative_capacity,
            MAX_CAPACITY,
        )?;
        Self::validate_size(
            "cache.negative_expected_items",
            cache.negative_expected_items,
            MAX_EXPECTED_ITEMS,
        )?;

        if cache.shards == 0 || cache.shards > MAX_SHARDS {
            return Err(ConfigError::Validation {
                field: "cache.shards".into(),
                message: format!("Must be between 1 and {MAX_SHARDS}"),
            });
        }

        // Every shard must hold at least one entry in each tier.
        if cache.shards > cache.capacity || cache.shards > cache.negative_capacity {
            return Err(ConfigError::Validation {
                field: "cache.shards".into(),
                message: format!(
                    "Cannot exceed cache.capacity ({}) or cache.negative_capacity ({})",
                    cache.capacity, cache.negative_capacity
                ),
            });
        }

        let rate = cache.false_positive_rate;
        if rate.is_nan() || rate < MIN_FALSE_POSITIVE_RATE || rate >= 1.0 {
            return Err(ConfigError::Validation {
                field: "cache.false_positive_rate".into(),
                message: format!(
                    "Must be at least {MIN_FALSE_POSITIVE_RATE} and below 1, got {rate}"
                ),
            });
        }

        Ok(())
    }

    fn validate_git_bash(git_bash: &GitBashConfig) -> Result<(), ConfigError> {
        for dir in &git_bash.install_dirs {
            if dir.trim().is_empty() {
                return Err(ConfigError::Validation {
                    field: "git_bash.install_dirs".into(),
                    message: "Cannot contain empty names".into(),
                });
            }
            if dir.contains(|c: char| c == '\\' || c == '/') {
                return Err(ConfigError::Validation {
                    field: "git_bash.install_dirs".into(),
                    message: format!("'{dir}' must be a single directory name"),
                });
            }
        }
        Ok(())
    }

    fn validate_size(field: &str, value: usize, max: usize) -> Result<(), ConfigError> {
        if value == 0 {
            return Err(ConfigError::Validation {
                field: field.into(),
                message: "Must be greater than 0".into(),
            });
        }
        if value > max {
            return Err(ConfigError::Validation {
                field: field.into(),
                message: format!("Cannot exceed {max}, got {value}"),
            });
        }
        Ok(())
    }
}
