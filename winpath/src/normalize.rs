//! Canonical normalization.
//!
//! This module turns a classified raw path into a [`CanonicalPath`]:
//! - Validating and upper-casing drive letters
//! - Splitting on both `\` and `/`, dropping empty and `.` segments
//! - Rejecting reserved characters in every component
//! - Undoing Git Bash argument mangling (`C:\Program Files\Git\mnt\c\x`)
//!
//! `..` segments are kept verbatim. Resolving them would need the filesystem
//! (symlinks, junctions) and this crate never touches it.

use log::debug;

use crate::canonical::{CanonicalPath, PathRoot};
use crate::classify::{classify_parts, is_separator, RootToken, MAX_INPUT_LEN};
use crate::config::GitBashConfig;
use crate::error::{PathError, Result};
use crate::render;

/// Characters no supported dialect accepts inside a component.
const RESERVED: [char; 7] = ['<', '>', ':', '"', '|', '?', '*'];

/// Stateless normalizer carrying the Git Bash de-mangling settings.
///
/// The cache sits in front of this; calling it directly always recomputes.
///
/// # Examples
///
/// ```
/// use winpath::Normalizer;
///
/// let normalizer = Normalizer::default();
/// let path = normalizer.normalize(r"C:\Program Files\Git\mnt\d\data").unwrap();
/// assert_eq!(path.to_string(), r"D:\data");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    demangle: bool,
    install_dirs: Vec<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&GitBashConfig::default())
    }
}

impl Normalizer {
    /// Build a normalizer from the Git Bash section of the configuration.
    #[must_use]
    pub fn new(git_bash: &GitBashConfig) -> Self {
        Self {
            demangle: git_bash.demangle,
            install_dirs: git_bash.install_dirs.clone(),
        }
    }

    /// Normalize a raw path string, bypassing any cache.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - classification fails (see [`crate::classify`])
    /// - a drive token is not a single ASCII letter
    /// - a component, server or share name contains a reserved character
    /// - some dialect's rendering would exceed [`MAX_INPUT_LEN`]
    pub fn normalize(&self, raw: &str) -> Result<CanonicalPath> {
        let classified = classify_parts(raw)?;

        let root = match classified.root {
            RootToken::Relative => PathRoot::Relative,
            RootToken::Rooted => PathRoot::Rooted,
            RootToken::Drive(token) => PathRoot::Drive(drive_letter(token)?),
            RootToken::Share { server, share } => {
                check_component(server)?;
                check_component(share)?;
                PathRoot::Share {
                    server: server.to_owned(),
                    share: share.to_owned(),
                }
            }
        };

        let mut components = split_components(classified.body)?;
        let trailing = classified
            .body
            .as_bytes()
            .last()
            .is_some_and(|&b| is_separator(b));

        let root = match root {
            PathRoot::Drive(letter) if self.demangle => {
                match self.demangle_git_bash(&components) {
                    Some((mounted, rest)) => {
                        debug!("undid Git Bash mangling of '{raw}' to drive {mounted}");
                        components.drain(..rest);
                        PathRoot::Drive(mounted)
                    }
                    None => PathRoot::Drive(letter),
                }
            }
            other => other,
        };

        let path = CanonicalPath::from_parts(root, components, trailing);
        let longest = render::longest_len(&path);
        if longest > MAX_INPUT_LEN {
            return Err(PathError::unrecognized(format!(
                "path renders to {longest} bytes in some dialects, limit is {MAX_INPUT_LEN}"
            )));
        }
        Ok(path)
    }

    /// Find the last `<install dir>/mnt/<letter>` run.
    ///
    /// Returns the mounted drive and the index of the first component after
    /// the run.
    fn demangle_git_bash(&self, components: &[String]) -> Option<(char, usize)> {
        if components.len() < 3 {
            return None;
        }
        (1..components.len() - 1).rev().find_map(|i| {
            if !components[i].eq_ignore_ascii_case("mnt") {
                return None;
            }
            let letter = single_letter(&components[i + 1])?;
            let parent = &components[i - 1];
            self.install_dirs
                .iter()
                .any(|dir| dir.eq_ignore_ascii_case(parent))
                .then(|| (letter.to_ascii_uppercase(), i + 2))
        })
    }
}

fn single_letter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

fn drive_letter(token: &str) -> Result<char> {
    single_letter(token)
        .map(|c| c.to_ascii_uppercase())
        .ok_or_else(|| PathError::invalid_drive(token))
}

fn check_component(component: &str) -> Result<()> {
    match component
        .chars()
        .find(|c| RESERVED.contains(c) || c.is_ascii_control())
    {
        Some(character) => Err(PathError::ComponentContainsReservedCharacter {
            component: component.to_owned(),
            character,
        }),
        None => Ok(()),
    }
}

/// Split a body on both separators, dropping empty and `.` segments.
fn split_components(body: &str) -> Result<Vec<String>> {
    let bytes = body.as_bytes();
    let mut components = Vec::new();
    let mut start = 0;

    // Separators are ASCII, so every cut lands on a char boundary.
    for end in memchr::memchr2_iter(b'\\', b'/', bytes).chain(std::iter::once(bytes.len())) {
        let segment = &body[start..end];
        start = end + 1;
        if segment.is_empty() || segment == "." {
            continue;
        }
        check_component(segment)?;
        components.push(segment.to_owned());
    }

    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PathFormat;

    fn normalize(raw: &str) -> Result<CanonicalPath> {
        Normalizer::default().normalize(raw)
    }

    fn components(raw: &str) -> Vec<String> {
        normalize(raw).unwrap().components().to_vec()
    }

    #[test]
    fn test_same_location_across_dialects() {
        let expected = normalize(r"C:\Users\x").unwrap();
        for raw in [
            "C:/Users/x",
            "c:\\Users\\x",
            "/c/Users/x",
            "/mnt/c/Users/x",
            "/cygdrive/c/Users/x",
            r"\\?\C:\Users\x",
            r"\\.\C:\Users\x",
            r"C:\\Users\.\x",
        ] {
            assert_eq!(normalize(raw).unwrap(), expected, "{raw}");
        }
    }

    #[test]
    fn test_share_across_dialects() {
        let expected = normalize(r"\\server\share\dir").unwrap();
        assert_eq!(normalize("//server/share/dir").unwrap(), expected);
        assert_eq!(normalize(r"\\?\UNC\server\share\dir").unwrap(), expected);
        assert_eq!(normalize(r"\\SERVER\Share\dir").unwrap(), expected);
        assert_eq!(expected.share(), Some(("server", "share")));
    }

    #[test]
    fn test_drive_letter_upper_cased() {
        assert_eq!(normalize("/mnt/d/x").unwrap().drive(), Some('D'));
        assert_eq!(normalize("e:").unwrap().drive(), Some('E'));
    }

    #[test]
    fn test_invalid_drive_tokens() {
        assert_eq!(
            normalize("/cygdrive/1/x"),
            Err(PathError::InvalidDriveLetter { token: "1".into() })
        );
        assert_eq!(
            normalize("/cygdrive/cd/x"),
            Err(PathError::InvalidDriveLetter { token: "cd".into() })
        );
        assert_eq!(
            normalize(r"1:\x"),
            Err(PathError::InvalidDriveLetter { token: "1".into() })
        );
        assert!(matches!(
            normalize(r"\\?\é:\x"),
            Err(PathError::InvalidDriveLetter { .. })
        ));
    }

    #[test]
    fn test_dot_segments() {
        assert_eq!(components(r"C:\a\.\b\..\c"), ["a", "b", "..", "c"]);
        assert_eq!(components("../temp"), ["..", "temp"]);
        assert!(components(".").is_empty());
        assert!(components(r"C:\.").is_empty());
    }

    #[test]
    fn test_reserved_characters() {
        assert_eq!(
            normalize("a<b"),
            Err(PathError::ComponentContainsReservedCharacter {
                component: "a<b".into(),
                character: '<',
            })
        );
        for raw in [r"C:\a|b", "/usr/a*b", "/mnt/c/what?", "x\u{1}y", r"\\ser:ver\share"] {
            assert!(
                matches!(
                    normalize(raw),
                    Err(PathError::ComponentContainsReservedCharacter { .. })
                ),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_drive_relative_is_rejected() {
        assert!(matches!(
            normalize("c:file.txt"),
            Err(PathError::ComponentContainsReservedCharacter { character: ':', .. })
        ));
    }

    #[test]
    fn test_trailing_separator() {
        let path = normalize(r"C:\dir\").unwrap();
        assert!(path.has_trailing_separator());
        assert_eq!(path.render(PathFormat::Wsl), "/mnt/c/dir/");

        assert!(!normalize(r"C:\").unwrap().has_trailing_separator());
        assert!(!normalize("/").unwrap().has_trailing_separator());
        assert!(!normalize(r"C:\dir").unwrap().has_trailing_separator());
    }

    #[test]
    fn test_rooted_and_relative_roots() {
        assert_eq!(normalize(r"\Windows").unwrap().root(), &PathRoot::Rooted);
        assert_eq!(normalize("/usr/bin").unwrap().root(), &PathRoot::Rooted);
        assert_eq!(normalize("docs").unwrap().root(), &PathRoot::Relative);
        assert_eq!(
            normalize(r"\usr\bin").unwrap(),
            normalize("/usr/bin").unwrap()
        );
    }

    #[test]
    fn test_git_bash_demangling() {
        let expected = normalize("/mnt/c/Users/x").unwrap();
        for raw in [
            r"C:\Program Files\Git\mnt\c\Users\x",
            r"D:\Tools\PortableGit\mnt\c\Users\x",
            "/c/Program Files/git/MNT/c/Users/x",
        ] {
            assert_eq!(normalize(raw).unwrap(), expected, "{raw}");
        }

        let nested = normalize(r"C:\Git\mnt\d\Git\mnt\e\x").unwrap();
        assert_eq!(nested.drive(), Some('E'));
        assert_eq!(nested.components(), ["x".to_string()]);

        let root = normalize(r"C:\Program Files\Git\mnt\c\").unwrap();
        assert_eq!(root.to_string(), r"C:\");
    }

    #[test]
    fn test_git_bash_lookalikes_untouched() {
        assert_eq!(components(r"C:\Users\mnt\c\x"), ["Users", "mnt", "c", "x"]);
        assert_eq!(components(r"C:\Git\mnt\cd\x"), ["Git", "mnt", "cd", "x"]);
        assert_eq!(components("/usr/git/mnt/c"), ["usr", "git", "mnt", "c"]);
    }

    #[test]
    fn test_git_bash_demangling_disabled() {
        let normalizer = Normalizer::new(&GitBashConfig {
            demangle: false,
            ..GitBashConfig::default()
        });
        let path = normalizer
            .normalize(r"C:\Program Files\Git\mnt\c\x")
            .unwrap();
        assert_eq!(path.components().len(), 5);
    }

    #[test]
    fn test_custom_install_dirs() {
        let normalizer = Normalizer::new(&GitBashConfig {
            demangle: true,
            install_dirs: vec!["msys64".into()],
        });
        assert_eq!(
            normalizer.normalize(r"C:\msys64\mnt\d\x").unwrap().drive(),
            Some('D')
        );
        assert_eq!(
            normalizer.normalize(r"C:\Git\mnt\d\x").unwrap().drive(),
            Some('C')
        );
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn component_strategy() -> impl Strategy<Value = String> {
            prop_oneof![
                8 => "[a-zA-Z0-9_ -]{1,10}",
                1 => Just("..".to_string()),
                1 => Just(".".to_string()),
            ]
        }

        fn raw_path_strategy() -> impl Strategy<Value = String> {
            (
                0usize..8,
                "[a-z]",
                prop::collection::vec(component_strategy(), 0..=6),
                any::<bool>(),
            )
                .prop_map(|(dialect, letter, parts, trailing)| {
                    let mut body = parts.join("/");
                    if trailing && !body.is_empty() {
                        body.push('/');
                    }
                    match dialect {
                        0 => format!("{}:\\{}", letter.to_uppercase(), body.replace('/', "\\")),
                        1 => format!("/{letter}/{body}"),
                        2 => format!("/mnt/{letter}/{body}"),
                        3 => format!("/cygdrive/{letter}/{body}"),
                        4 => format!("\\\\?\\{letter}:\\{body}"),
                        5 => format!("\\\\srv\\share\\{body}"),
                        6 => format!("/usr/{body}"),
                        _ => format!("rel/{body}"),
                    }
                })
        }

        proptest! {
            /// Normalizing any rendering gives back the same canonical path
            #[test]
            fn normalize_idempotent_across_dialects(raw in raw_path_strategy()) {
                let normalizer = Normalizer::default();
                let canonical = normalizer.normalize(&raw).unwrap();
                for target in PathFormat::ALL {
                    let rendered = canonical.render(target);
                    let again = normalizer.normalize(&rendered).unwrap();
                    prop_assert_eq!(&again, &canonical, "via {} as {}", target, rendered);
                }
            }

            /// Canonical components are never empty or `.` and hold no separator
            #[test]
            fn components_are_clean(raw in raw_path_strategy()) {
                let canonical = Normalizer::default().normalize(&raw).unwrap();
                for component in canonical.components() {
                    prop_assert!(!component.is_empty());
                    prop_assert_ne!(component.as_str(), ".");
                    prop_assert!(!component.contains(|c: char| c == '\\' || c == '/'));
                }
            }

            /// Drive letter case never changes the result
            #[test]
            fn drive_case_insensitive(letter in "[a-z]", rest in "[a-zA-Z0-9]{1,10}") {
                let normalizer = Normalizer::default();
                let lower = normalizer.normalize(&format!("{letter}:\\{rest}")).unwrap();
                let upper = normalizer
                    .normalize(&format!("{}:\\{rest}", letter.to_uppercase()))
                    .unwrap();
                prop_assert_eq!(lower, upper);
            }
        }
    }
}
