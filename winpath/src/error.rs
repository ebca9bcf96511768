//! Error types for the winpath library.
//!
//! Two error families live here:
//!
//! - [`PathError`]: the closed taxonomy of reasons a raw path string is
//!   rejected. Callers are expected to match on the variant.
//! - [`ConfigError`]: problems with configuration values or with
//!   initializing the process-wide engine.
//!
//! Both use `thiserror` for their `Display` and `Error` implementations.

use thiserror::Error;

/// Result type alias for path operations.
///
/// # Examples
///
/// ```
/// use winpath::{PathFormat, Result};
///
/// fn always_dos() -> Result<PathFormat> {
///     Ok(PathFormat::Dos)
/// }
/// ```
pub type Result<T> = std::result::Result<T, PathError>;

/// Reasons a raw path string cannot be normalized.
///
/// The set is closed: every rejection produced by this crate is one of these
/// variants. Values are cheap to clone so rejections can be cached.
///
/// # Examples
///
/// ```
/// use winpath::PathError;
///
/// let err = winpath::normalize("").unwrap_err();
/// assert_eq!(err, PathError::EmptyInput);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum PathError {
    /// The input does not match any recognized dialect, or is too long to
    /// be considered.
    #[error("unrecognized path format: {reason}")]
    UnrecognizedFormat {
        /// Why the input was not recognized.
        reason: String,
    },

    /// A drive token is not a single ASCII letter.
    #[error("invalid drive letter '{token}'")]
    InvalidDriveLetter {
        /// The offending drive token as it appeared in the input.
        token: String,
    },

    /// A `\\?\`, `\\server\share` or `//server/share` prefix is incomplete.
    #[error("malformed UNC prefix: {reason}")]
    MalformedUncPrefix {
        /// What is missing or wrong in the prefix.
        reason: String,
    },

    /// The input string is empty.
    #[error("path is empty")]
    EmptyInput,

    /// A component contains a character that no supported dialect accepts.
    #[error("component '{component}' contains reserved character {character:?}")]
    ComponentContainsReservedCharacter {
        /// The offending component.
        component: String,
        /// The first reserved character found in it.
        character: char,
    },
}

impl PathError {
    pub(crate) fn unrecognized(reason: impl Into<String>) -> Self {
        Self::UnrecognizedFormat {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_unc(reason: impl Into<String>) -> Self {
        Self::MalformedUncPrefix {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_drive(token: impl Into<String>) -> Self {
        Self::InvalidDriveLetter {
            token: token.into(),
        }
    }

    /// Short, stable name of the error kind.
    ///
    /// Useful for machine-readable output where the `Display` text is too
    /// detailed.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpath::PathError;
    ///
    /// assert_eq!(PathError::EmptyInput.kind(), "empty-input");
    /// ```
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnrecognizedFormat { .. } => "unrecognized-format",
            Self::InvalidDriveLetter { .. } => "invalid-drive-letter",
            Self::MalformedUncPrefix { .. } => "malformed-unc-prefix",
            Self::EmptyInput => "empty-input",
            Self::ComponentContainsReservedCharacter { .. } => "reserved-character",
        }
    }
}

/// Errors raised while building configuration or initializing the engine.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration value is out of range or malformed.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field (or environment variable) that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A YAML document could not be parsed into a configuration.
    #[error("configuration error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The process-wide engine was already initialized.
    #[error("winpath is already initialized; init must run before the first normalization")]
    AlreadyInitialized,
}
