//! Rendering canonical paths into a target dialect.
//!
//! Rendering is total: every [`CanonicalPath`] has a textual form in every
//! [`PathFormat`]. Where a dialect cannot express a root, the nearest
//! equivalent is used:
//!
//! | root     | Dos        | NetworkShare | Unc              | Unix     | Wsl          | Cygwin            |
//! |----------|------------|--------------|------------------|----------|--------------|-------------------|
//! | drive    | `C:\a`     | as Dos       | `\\?\C:\a`       | `/c/a`   | `/mnt/c/a`   | `/cygdrive/c/a`   |
//! | share    | `\\s\h\a`  | `\\s\h\a`    | `\\?\UNC\s\h\a`  | `//s/h/a`| as Unix      | as Unix           |
//! | rooted   | `\a`       | as Dos       | as Dos           | `/a`     | as Unix      | as Unix           |
//! | relative | `a`        | as Dos       | as Dos           | `a`      | as Unix      | as Unix           |
//!
//! Rendering a path and normalizing the result gives back an equal path.

use crate::canonical::{CanonicalPath, PathRoot};
use crate::format::PathFormat;

/// Classic Win32 `MAX_PATH`.
pub const MAX_PATH: usize = 260;

/// Render a canonical path into the target dialect.
///
/// # Examples
///
/// ```
/// use winpath::{normalize, render, PathFormat};
///
/// let path = normalize("/mnt/c/Users/x").unwrap();
/// assert_eq!(render(&path, PathFormat::Dos), r"C:\Users\x");
/// assert_eq!(render(&path, PathFormat::Unc), r"\\?\C:\Users\x");
/// assert_eq!(render(&path, PathFormat::Unix), "/c/Users/x");
/// ```
#[must_use]
pub fn render(path: &CanonicalPath, target: PathFormat) -> String {
    let mut out = String::with_capacity(estimated_len(path));
    match target {
        PathFormat::Dos | PathFormat::NetworkShare => write_windows(&mut out, path, ""),
        PathFormat::Unc => write_windows(&mut out, path, r"\\?\"),
        PathFormat::Unix => write_posix(&mut out, path, "/"),
        PathFormat::Wsl => write_posix(&mut out, path, "/mnt/"),
        PathFormat::Cygwin => write_posix(&mut out, path, "/cygdrive/"),
    }
    out
}

fn estimated_len(path: &CanonicalPath) -> usize {
    let components: usize = path.components().iter().map(|c| c.len() + 1).sum();
    let root = match path.root() {
        PathRoot::Share { server, share } => server.len() + share.len() + 8,
        _ => 12,
    };
    components + root
}

/// Byte length of the longest rendering of `path` across all dialects.
///
/// The normalizer rejects paths whose longest rendering would not classify
/// again, so every rendering of an accepted path is itself accepted.
pub(crate) fn longest_len(path: &CanonicalPath) -> usize {
    let components = path.components();
    let joined = components.iter().map(String::len).sum::<usize>()
        + components.len().saturating_sub(1)
        + usize::from(path.has_trailing_separator());
    // Separator plus joined components, when there are any after a root.
    let tail = if components.is_empty() { 0 } else { 1 + joined };

    match path.root() {
        // `\\?\C:\` + joined, or `/cygdrive/c` + tail
        PathRoot::Drive(_) => (7 + joined).max(11 + tail),
        // `\\?\UNC\server\share` + tail
        PathRoot::Share { server, share } => 9 + server.len() + share.len() + tail,
        PathRoot::Rooted => {
            let escape = components
                .first()
                .map_or(0, |first| if looks_like_mount(first) { 2 } else { 0 });
            1 + escape + joined
        }
        PathRoot::Relative => joined.max(1),
    }
}

/// Backslash dialects. `long_prefix` is `\\?\` for `Unc`, empty otherwise.
fn write_windows(out: &mut String, path: &CanonicalPath, long_prefix: &str) {
    match path.root() {
        PathRoot::Drive(letter) => {
            out.push_str(long_prefix);
            out.push(*letter);
            out.push_str(":\\");
            join_components(out, path, '\\');
        }
        PathRoot::Share { server, share } => {
            if long_prefix.is_empty() {
                out.push_str(r"\\");
            } else {
                out.push_str(long_prefix);
                out.push_str(r"UNC\");
            }
            out.push_str(server);
            out.push('\\');
            out.push_str(share);
            if !path.components().is_empty() {
                out.push('\\');
                join_components(out, path, '\\');
            }
        }
        PathRoot::Rooted => {
            out.push('\\');
            join_components(out, path, '\\');
        }
        PathRoot::Relative => write_relative(out, path, '\\'),
    }
}

/// Forward-slash dialects. `drive_prefix` is what precedes the lower-case
/// drive letter: `/`, `/mnt/` or `/cygdrive/`.
fn write_posix(out: &mut String, path: &CanonicalPath, drive_prefix: &str) {
    match path.root() {
        PathRoot::Drive(letter) => {
            out.push_str(drive_prefix);
            out.push(letter.to_ascii_lowercase());
            if !path.components().is_empty() {
                out.push('/');
                join_components(out, path, '/');
            }
        }
        PathRoot::Share { server, share } => {
            out.push_str("//");
            out.push_str(server);
            out.push('/');
            out.push_str(share);
            if !path.components().is_empty() {
                out.push('/');
                join_components(out, path, '/');
            }
        }
        PathRoot::Rooted => {
            out.push('/');
            if path
                .components()
                .first()
                .is_some_and(|first| looks_like_mount(first))
            {
                out.push_str("./");
            }
            join_components(out, path, '/');
        }
        PathRoot::Relative => write_relative(out, path, '/'),
    }
}

fn write_relative(out: &mut String, path: &CanonicalPath, separator: char) {
    if path.components().is_empty() {
        out.push('.');
    } else {
        join_components(out, path, separator);
    }
}

/// Components joined by `separator`, plus the trailing separator if recorded.
fn join_components(out: &mut String, path: &CanonicalPath, separator: char) {
    for (i, component) in path.components().iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(component);
    }
    if path.has_trailing_separator() {
        out.push(separator);
    }
}

/// A rooted first component that would reclassify as a drive or mount in a
/// POSIX dialect (`/c`, `/mnt/...`, `/cygdrive/...`).
fn looks_like_mount(first: &str) -> bool {
    (first.len() == 1 && first.as_bytes()[0].is_ascii_alphabetic())
        || first == "mnt"
        || first == "cygdrive"
}
