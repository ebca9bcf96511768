//! The closed set of path dialects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A textual path dialect.
///
/// Every accepted input classifies to exactly one variant. The set is closed
/// so that conversions can be checked exhaustively.
///
/// # Examples
///
/// ```
/// use winpath::PathFormat;
///
/// let format: PathFormat = "wsl".parse().unwrap();
/// assert_eq!(format, PathFormat::Wsl);
/// assert_eq!(format.to_string(), "wsl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathFormat {
    /// Native drive-letter paths: `C:\Users\x`, `C:/Users/x`, `\Windows`,
    /// and relative paths.
    Dos,
    /// MSYS / Git Bash style POSIX paths: `/c/Users/x`, `/usr/bin`,
    /// `//server/share/x`.
    Unix,
    /// WSL drive mounts: `/mnt/c/Users/x`.
    Wsl,
    /// Cygwin drive mounts: `/cygdrive/c/Users/x`.
    Cygwin,
    /// Long-path prefixed paths: `\\?\C:\Users\x`, `\\?\UNC\server\share\x`.
    Unc,
    /// Network shares: `\\server\share\x`.
    NetworkShare,
}

impl PathFormat {
    /// All dialects, in classification priority order.
    pub const ALL: [Self; 6] = [
        Self::Unc,
        Self::NetworkShare,
        Self::Cygwin,
        Self::Wsl,
        Self::Unix,
        Self::Dos,
    ];

    /// The separator this dialect renders with.
    ///
    /// # Examples
    ///
    /// ```
    /// use winpath::PathFormat;
    ///
    /// assert_eq!(PathFormat::Dos.separator(), '\\');
    /// assert_eq!(PathFormat::Cygwin.separator(), '/');
    /// ```
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Dos | Self::Unc | Self::NetworkShare => '\\',
            Self::Unix | Self::Wsl | Self::Cygwin => '/',
        }
    }

    /// Returns true for the dialects written with forward slashes.
    #[must_use]
    pub const fn is_posix(self) -> bool {
        matches!(self, Self::Unix | Self::Wsl | Self::Cygwin)
    }

    /// Stable lower-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dos => "dos",
            Self::Unix => "unix",
            Self::Wsl => "wsl",
            Self::Cygwin => "cygwin",
            Self::Unc => "unc",
            Self::NetworkShare => "network-share",
        }
    }
}

impl fmt::Display for PathFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathFormat {
    type Err = String;

    /// Parses a dialect name (case-insensitive). `windows` is accepted as an
    /// alias for `dos`, `msys` for `unix`, `share` for `network-share`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dos" | "windows" => Ok(Self::Dos),
            "unix" | "msys" => Ok(Self::Unix),
            "wsl" => Ok(Self::Wsl),
            "cygwin" => Ok(Self::Cygwin),
            "unc" => Ok(Self::Unc),
            "network-share" | "share" => Ok(Self::NetworkShare),
            _ => Err(format!("unknown path format: {s}")),
        }
    }
}
