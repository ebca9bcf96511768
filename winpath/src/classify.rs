//! Dialect classification.
//!
//! The classifier looks only at fixed prefixes and separator positions, most
//! specific dialect first, so an input can never match two dialects:
//!
//! 1. `\\?\` or `\\.\` long-path prefix ([`PathFormat::Unc`])
//! 2. `\\server\share` ([`PathFormat::NetworkShare`])
//! 3. `/cygdrive/<letter>` ([`PathFormat::Cygwin`])
//! 4. `/mnt/<letter>` ([`PathFormat::Wsl`])
//! 5. any other leading `/` ([`PathFormat::Unix`])
//! 6. `<letter>:`, a leading `\`, or no prefix at all ([`PathFormat::Dos`])
//!
//! Nothing here touches the filesystem.

use crate::error::{PathError, Result};
use crate::format::PathFormat;

/// Longest input considered, in bytes (the Windows long-path ceiling).
pub const MAX_INPUT_LEN: usize = 32_767;

const LONG_PREFIX: &str = r"\\?\";
const DEVICE_PREFIX: &str = r"\\.\";
const SHARE_PREFIX: &str = r"\\";
const CYGWIN_PREFIX: &str = "/cygdrive/";
const WSL_PREFIX: &str = "/mnt/";

/// The root part of a classified input, still in raw form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RootToken<'a> {
    /// No root: the body is relative.
    Relative,
    /// Absolute without a volume (`\Windows`, `/usr`).
    Rooted,
    /// A drive token; not yet validated as a letter.
    Drive(&'a str),
    /// A server/share pair.
    Share { server: &'a str, share: &'a str },
}

/// An input split into its dialect, root and the remaining body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Classified<'a> {
    pub(crate) format: PathFormat,
    pub(crate) root: RootToken<'a>,
    pub(crate) body: &'a str,
}

impl<'a> Classified<'a> {
    fn new(format: PathFormat, root: RootToken<'a>, body: &'a str) -> Self {
        Self { format, root, body }
    }
}

/// Determine the dialect of a raw path string.
///
/// # Errors
///
/// Returns an error if:
/// - the input is empty ([`PathError::EmptyInput`])
/// - the input is longer than [`MAX_INPUT_LEN`] ([`PathError::UnrecognizedFormat`])
/// - a UNC or share prefix is incomplete ([`PathError::MalformedUncPrefix`])
///
/// # Examples
///
/// ```
/// use winpath::{classify, PathFormat};
///
/// assert_eq!(classify(r"C:\Users\x").unwrap(), PathFormat::Dos);
/// assert_eq!(classify("/mnt/c/Users/x").unwrap(), PathFormat::Wsl);
/// assert_eq!(classify("/cygdrive/c/Users/x").unwrap(), PathFormat::Cygwin);
/// assert_eq!(classify(r"\\server\share\x").unwrap(), PathFormat::NetworkShare);
/// assert_eq!(classify(r"\\?\C:\Users\x").unwrap(), PathFormat::Unc);
/// ```
pub fn classify(raw: &str) -> Result<PathFormat> {
    classify_parts(raw).map(|classified| classified.format)
}

pub(crate) fn classify_parts(raw: &str) -> Result<Classified<'_>> {
    if raw.is_empty() {
        return Err(PathError::EmptyInput);
    }
    if raw.len() > MAX_INPUT_LEN {
        return Err(PathError::unrecognized(format!(
            "input is {} bytes long, limit is {MAX_INPUT_LEN}",
            raw.len()
        )));
    }

    if let Some(rest) = raw
        .strip_prefix(LONG_PREFIX)
        .or_else(|| raw.strip_prefix(DEVICE_PREFIX))
    {
        return classify_long(rest);
    }

    if let Some(rest) = raw.strip_prefix(SHARE_PREFIX) {
        return classify_share(rest, PathFormat::NetworkShare);
    }

    if let Some(rest) = raw.strip_prefix(CYGWIN_PREFIX) {
        let (token, body) = split_first_segment(rest);
        return Ok(Classified::new(
            PathFormat::Cygwin,
            RootToken::Drive(token),
            body,
        ));
    }

    if let Some((letter, body)) = raw.strip_prefix(WSL_PREFIX).and_then(drive_segment) {
        return Ok(Classified::new(
            PathFormat::Wsl,
            RootToken::Drive(letter),
            body,
        ));
    }

    if let Some(rest) = raw.strip_prefix('/') {
        if let Some(rest) = rest.strip_prefix('/') {
            return classify_share(rest, PathFormat::Unix);
        }
        if let Some((letter, body)) = drive_segment(rest) {
            return Ok(Classified::new(
                PathFormat::Unix,
                RootToken::Drive(letter),
                body,
            ));
        }
        return Ok(Classified::new(PathFormat::Unix, RootToken::Rooted, rest));
    }

    if let Some((token, body)) = dos_drive(raw) {
        return Ok(Classified::new(PathFormat::Dos, RootToken::Drive(token), body));
    }

    if let Some(rest) = raw.strip_prefix('\\') {
        return Ok(Classified::new(PathFormat::Dos, RootToken::Rooted, rest));
    }

    Ok(Classified::new(PathFormat::Dos, RootToken::Relative, raw))
}

/// Body of a `\\?\` or `\\.\` path: either `C:...` or `UNC\server\share...`.
fn classify_long(rest: &str) -> Result<Classified<'_>> {
    if rest.is_empty() {
        return Err(PathError::malformed_unc(
            "nothing follows the long-path prefix",
        ));
    }

    if let Some((token, body)) = dos_drive(rest) {
        return Ok(Classified::new(PathFormat::Unc, RootToken::Drive(token), body));
    }

    let (head, after) = split_first_segment(rest);
    if head.eq_ignore_ascii_case("UNC") {
        if after.is_empty() {
            return Err(PathError::malformed_unc("missing server name after UNC"));
        }
        return classify_share(&after[1..], PathFormat::Unc);
    }

    Err(PathError::malformed_unc(format!(
        "expected a drive or UNC after the long-path prefix, found '{head}'"
    )))
}

/// `server<sep>share[body]`, the part after a `\\`, `//` or `\\?\UNC\` prefix.
fn classify_share(rest: &str, format: PathFormat) -> Result<Classified<'_>> {
    let (server, after) = split_first_segment(rest);
    if server.is_empty() {
        return Err(PathError::malformed_unc("missing server name"));
    }
    if after.is_empty() {
        return Err(PathError::malformed_unc(format!(
            "missing share name after server '{server}'"
        )));
    }

    let (share, body) = split_first_segment(&after[1..]);
    if share.is_empty() {
        return Err(PathError::malformed_unc(format!(
            "missing share name after server '{server}'"
        )));
    }
    for name in [server, share] {
        if name == "." || name == ".." {
            return Err(PathError::malformed_unc(format!(
                "'{name}' is not a valid server or share name"
            )));
        }
    }

    Ok(Classified::new(format, RootToken::Share { server, share }, body))
}

#[inline]
pub(crate) fn is_separator(b: u8) -> bool {
    b == b'\\' || b == b'/'
}

/// Split at the first separator; the second half keeps the separator.
#[inline]
fn split_first_segment(s: &str) -> (&str, &str) {
    match memchr::memchr2(b'\\', b'/', s.as_bytes()) {
        Some(idx) => s.split_at(idx),
        None => (s, ""),
    }
}

/// A single ASCII letter followed by a separator or the end of input.
#[inline]
fn drive_segment(s: &str) -> Option<(&str, &str)> {
    let bytes = s.as_bytes();
    let first = *bytes.first()?;
    if first.is_ascii_alphabetic() && bytes.get(1).map_or(true, |&b| is_separator(b)) {
        Some(s.split_at(1))
    } else {
        None
    }
}

/// `<char>:` followed by a separator or end of input. The character is
/// returned unvalidated so that `1:\x` can be reported as a bad drive.
#[inline]
fn dos_drive(s: &str) -> Option<(&str, &str)> {
    let mut chars = s.chars();
    let first = chars.next()?;
    if first == '\\' || first == '/' || chars.next()? != ':' {
        return None;
    }
    let token_len = first.len_utf8();
    let body = &s[token_len + 1..];
    if body.is_empty() || is_separator(body.as_bytes()[0]) {
        Some((&s[..token_len], body))
    } else {
        None
    }
}
