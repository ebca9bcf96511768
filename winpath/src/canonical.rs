//! The canonical path representation.
//!
//! Every dialect normalizes into a [`CanonicalPath`]: a root, an ordered list
//! of components and a trailing-separator flag. Equality on this type is what
//! "the same location" means for the rest of the crate.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::format::PathFormat;
use crate::render;

/// The root of a canonical path.
///
/// Drive letters are stored upper-case. Server and share names keep their
/// original spelling but compare and hash ASCII case-insensitively.
#[derive(Debug, Clone, Eq)]
pub enum PathRoot {
    /// A relative path.
    Relative,
    /// An absolute path without a volume, such as `\Windows` or `/usr`.
    Rooted,
    /// A drive letter, `A` through `Z`.
    Drive(char),
    /// A network share.
    Share {
        /// Server (host) name.
        server: String,
        /// Share name.
        share: String,
    },
}

impl PartialEq for PathRoot {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Relative, Self::Relative) | (Self::Rooted, Self::Rooted) => true,
            (Self::Drive(a), Self::Drive(b)) => a.eq_ignore_ascii_case(b),
            (
                Self::Share {
                    server: server_a,
                    share: share_a,
                },
                Self::Share {
                    server: server_b,
                    share: share_b,
                },
            ) => server_a.eq_ignore_ascii_case(server_b) && share_a.eq_ignore_ascii_case(share_b),
            _ => false,
        }
    }
}

impl Hash for PathRoot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Relative | Self::Rooted => {}
            Self::Drive(letter) => letter.to_ascii_uppercase().hash(state),
            Self::Share { server, share } => {
                hash_ignore_ascii_case(server, state);
                hash_ignore_ascii_case(share, state);
            }
        }
    }
}

fn hash_ignore_ascii_case<H: Hasher>(s: &str, state: &mut H) {
    for b in s.bytes() {
        state.write_u8(b.to_ascii_lowercase());
    }
    state.write_u8(0xff);
}

/// A path in canonical form.
///
/// Two raw strings that denote the same location in any supported dialect
/// normalize to equal `CanonicalPath` values. Components are never empty,
/// never `.`, and never contain a separator; `..` is kept verbatim.
///
/// # Examples
///
/// ```
/// use winpath::{normalize, PathFormat};
///
/// let wsl = normalize("/mnt/c/Users/x").unwrap();
/// let dos = normalize(r"c:\Users\x").unwrap();
/// assert_eq!(wsl, dos);
/// assert_eq!(wsl.drive(), Some('C'));
/// assert_eq!(wsl.render(PathFormat::Cygwin), "/cygdrive/c/Users/x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPath {
    root: PathRoot,
    components: Vec<String>,
    trailing_separator: bool,
}

impl CanonicalPath {
    /// Assemble a canonical path from already validated parts.
    ///
    /// The trailing separator flag is dropped when there are no components,
    /// since the separator then belongs to the root.
    pub(crate) fn from_parts(
        root: PathRoot,
        components: Vec<String>,
        trailing_separator: bool,
    ) -> Self {
        let trailing_separator = trailing_separator && !components.is_empty();
        Self {
            root,
            components,
            trailing_separator,
        }
    }

    /// The root of this path.
    #[must_use]
    pub fn root(&self) -> &PathRoot {
        &self.root
    }

    /// The upper-case drive letter, if this path is on a drive.
    #[must_use]
    pub fn drive(&self) -> Option<char> {
        match self.root {
            PathRoot::Drive(letter) => Some(letter),
            _ => None,
        }
    }

    /// The `(server, share)` pair, if this path is on a network share.
    #[must_use]
    pub fn share(&self) -> Option<(&str, &str)> {
        match &self.root {
            PathRoot::Share { server, share } => Some((server, share)),
            _ => None,
        }
    }

    /// The path components in order.
    #[must_use]
    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Whether the original path ended in a separator.
    #[must_use]
    pub fn has_trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    /// Whether the path is absolute (has any root).
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        !matches!(self.root, PathRoot::Relative)
    }

    /// Render into the given dialect. See [`render::render`].
    #[must_use]
    pub fn render(&self, target: PathFormat) -> String {
        render::render(self, target)
    }

    /// Whether the `Dos` rendering exceeds the classic `MAX_PATH` limit and
    /// needs the `\\?\` form to be usable with Win32 APIs.
    ///
    /// # Examples
    ///
    /// ```
    /// let long = format!("/mnt/c/{}", "a".repeat(300));
    /// assert!(winpath::normalize(&long).unwrap().requires_long_path());
    /// assert!(!winpath::normalize("/mnt/c/short").unwrap().requires_long_path());
    /// ```
    #[must_use]
    pub fn requires_long_path(&self) -> bool {
        matches!(self.root, PathRoot::Drive(_) | PathRoot::Share { .. })
            && render::render(self, PathFormat::Dos).len() > render::MAX_PATH
    }

    /// Render for Win32 consumption: `Dos` normally, `Unc` when the path is
    /// too long for `MAX_PATH`.
    #[must_use]
    pub fn render_win32(&self) -> String {
        let dos = render::render(self, PathFormat::Dos);
        if dos.len() > render::MAX_PATH
            && matches!(self.root, PathRoot::Drive(_) | PathRoot::Share { .. })
        {
            render::render(self, PathFormat::Unc)
        } else {
            dos
        }
    }
}

impl fmt::Display for CanonicalPath {
    /// Displays the `Dos` rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(self, PathFormat::Dos))
    }
}
