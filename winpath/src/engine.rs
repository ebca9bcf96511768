//! The path engine and the process-wide instance behind the facade.
//!
//! A [`PathEngine`] bundles a [`Normalizer`] with its own
//! [`NormalizationCache`]. The crate-root functions use one global engine,
//! created on first use from [`Config::from_env`] or explicitly, exactly
//! once, by [`init`].

use log::{debug, warn};
use once_cell::sync::OnceCell;

use crate::cache::{CacheStats, NormalizationCache};
use crate::canonical::CanonicalPath;
use crate::classify;
use crate::config::{Config, ConfigValidator};
use crate::error::{ConfigError, Result};
use crate::format::PathFormat;
use crate::normalize::Normalizer;

static GLOBAL: OnceCell<PathEngine> = OnceCell::new();

/// A normalizer and its cache.
///
/// Independent engines share nothing, which makes them useful for tests and
/// for embedding with a configuration different from the global one.
///
/// # Examples
///
/// ```
/// use winpath::{Config, PathEngine, PathFormat};
///
/// let engine = PathEngine::new(&Config::default()).unwrap();
/// assert_eq!(
///     engine.to_format("/cygdrive/d/tmp", PathFormat::Wsl).unwrap(),
///     "/mnt/d/tmp"
/// );
/// assert_eq!(engine.stats().misses, 1);
/// ```
pub struct PathEngine {
    normalizer: Normalizer,
    cache: NormalizationCache,
}

impl PathEngine {
    /// Build an engine from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the configuration is invalid.
    pub fn new(config: &Config) -> std::result::Result<Self, ConfigError> {
        ConfigValidator::validate(config)?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: &Config) -> Self {
        debug!(
            "creating path engine: capacity {}, {} shards, negative capacity {}",
            config.cache.capacity, config.cache.shards, config.cache.negative_capacity
        );
        Self {
            normalizer: Normalizer::new(&config.git_bash),
            cache: NormalizationCache::new(&config.cache),
        }
    }

    /// Normalize through the cache.
    ///
    /// # Errors
    ///
    /// Returns the [`PathError`](crate::PathError) the input is rejected with.
    pub fn normalize(&self, raw: &str) -> Result<CanonicalPath> {
        self.cache
            .get_or_compute(raw, |raw| self.normalizer.normalize(raw))
    }

    /// Classify without normalizing. Not cached.
    ///
    /// # Errors
    ///
    /// See [`crate::classify()`].
    #[allow(clippy::unused_self)]
    pub fn classify(&self, raw: &str) -> Result<PathFormat> {
        classify::classify(raw)
    }

    /// Normalize and render into `target`.
    ///
    /// # Errors
    ///
    /// Returns the [`PathError`](crate::PathError) the input is rejected with.
    pub fn to_format(&self, raw: &str, target: PathFormat) -> Result<String> {
        self.normalize(raw).map(|path| path.render(target))
    }

    /// Normalize and render for Win32 APIs (see [`CanonicalPath::render_win32`]).
    ///
    /// # Errors
    ///
    /// Returns the [`PathError`](crate::PathError) the input is rejected with.
    pub fn to_win32(&self, raw: &str) -> Result<String> {
        self.normalize(raw).map(|path| path.render_win32())
    }

    /// Cache statistics for this engine.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// The engine's cache.
    #[must_use]
    pub fn cache(&self) -> &NormalizationCache {
        &self.cache
    }
}

/// Initialize the process-wide engine with an explicit configuration.
///
/// Must be called before the first facade call; the configuration cannot be
/// changed afterwards.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] for an invalid configuration and
/// [`ConfigError::AlreadyInitialized`] if the global engine already exists.
pub fn init(config: Config) -> std::result::Result<(), ConfigError> {
    let engine = PathEngine::new(&config)?;
    GLOBAL
        .set(engine)
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// The process-wide engine, created from the environment on first use.
pub(crate) fn global() -> &'static PathEngine {
    GLOBAL.get_or_init(|| {
        let config = Config::from_env().unwrap_or_else(|err| {
            warn!("ignoring invalid winpath environment configuration: {err}");
            Config::default()
        });
        PathEngine::from_valid(&config)
    })
}

/// Whether the process-wide engine exists yet.
#[must_use]
pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CacheConfig;
    use crate::error::PathError;

    fn engine() -> PathEngine {
        PathEngine::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = Config {
            cache: CacheConfig {
                capacity: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            PathEngine::new(&config),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn test_oversized_cache_is_an_error_not_a_panic() {
        let config = Config {
            cache: CacheConfig {
                capacity: usize::MAX / 2,
                shards: 1,
                ..Default::default()
            },
            ..Default::default()
        };
        match PathEngine::new(&config) {
            Err(ConfigError::Validation { field, .. }) => assert_eq!(field, "cache.capacity"),
            Err(other) => panic!("expected validation error, got {other}"),
            Ok(_) => panic!("expected validation error"),
        }
    }

    #[test]
    fn test_to_format() {
        let engine = engine();
        assert_eq!(
            engine.to_format(r"C:\Users\x", PathFormat::Wsl).unwrap(),
            "/mnt/c/Users/x"
        );
        assert_eq!(
            engine.to_format("/mnt/c/Users/x", PathFormat::Dos).unwrap(),
            r"C:\Users\x"
        );
        assert_eq!(
            engine.to_format("", PathFormat::Dos),
            Err(PathError::EmptyInput)
        );
    }

    #[test]
    fn test_to_win32() {
        let engine = engine();
        assert_eq!(engine.to_win32("/mnt/c/x").unwrap(), r"C:\x");
        let long = format!("/mnt/c/{}", "d".repeat(300));
        assert!(engine.to_win32(&long).unwrap().starts_with(r"\\?\C:\"));
    }

    #[test]
    fn test_engines_are_independent() {
        let a = engine();
        let b = engine();
        a.normalize("/usr/bin").unwrap();
        assert_eq!(a.stats().entries, 1);
        assert_eq!(b.stats().entries, 0);
    }

    #[test]
    fn test_git_bash_config_reaches_normalizer() {
        let mut config = Config::default();
        config.git_bash.demangle = false;
        let engine = PathEngine::new(&config).unwrap();
        let path = engine.normalize(r"C:\Git\mnt\d\x").unwrap();
        assert_eq!(path.drive(), Some('C'));
    }
}
