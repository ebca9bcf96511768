//! Configuration system for winpath.
//!
//! This module provides:
//! - A serde schema with a default for every field
//! - YAML parsing
//! - Environment variable overrides (`WINPATH_*`)
//! - Validation
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Environment variables (`WINPATH_*`)
//! 2. A YAML document supplied by the caller
//! 3. Built-in defaults
//!
//! The library never reads configuration files itself; the caller reads the
//! file and hands over its contents.
//!
//! # Examples
//!
//! ```
//! use winpath::config::{Config, ConfigValidator, EnvironmentConfig};
//!
//! let mut config = Config::from_yaml_str("cache:\n  capacity: 128\n  shards: 8\n").unwrap();
//! EnvironmentConfig::apply_overrides(&mut config).unwrap();
//! ConfigValidator::validate(&config).unwrap();
//! ```

pub mod environment;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use environment::EnvironmentConfig;
pub use schema::{CacheConfig, Config, GitBashConfig};
pub use validator::{
    ConfigValidator, MAX_CAPACITY, MAX_EXPECTED_ITEMS, MAX_SHARDS, MIN_FALSE_POSITIVE_RATE,
};

use crate::error::ConfigError;

impl Config {
    /// Defaults with environment overrides applied, validated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if an environment variable is
    /// malformed or the resulting configuration is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// This configuration with environment overrides applied, validated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if an environment variable is
    /// malformed or the resulting configuration is out of range.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        EnvironmentConfig::apply_overrides(&mut self)?;
        ConfigValidator::validate(&self)?;
        Ok(self)
    }
}
