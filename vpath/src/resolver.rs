//! Wildcard substitution and path reassembly.
//!
//! This module provides the [`Resolver`] type, which rewrites the wildcard
//! token in a path's parent component and reassembles a normalized path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::split::is_separator;
use crate::path::{join_directory, join_file, split_directory, split_file, PathKind, SEPARATOR};
use crate::wildcard::{WildcardEntry, WildcardRegistry};

/// How to choose between several tokens that all occur in one parent path.
///
/// # Examples
///
/// ```
/// use vpath::TieBreak;
///
/// assert_eq!(TieBreak::default(), TieBreak::LongestToken);
/// assert_eq!("first-match".parse::<TieBreak>().unwrap(), TieBreak::FirstMatch);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// The earliest-registered matching token.
    FirstMatch,
    /// The longest matching token; equal lengths fall back to registration
    /// order.
    #[default]
    LongestToken,
    /// Refuse to resolve when more than one token matches.
    ErrorOnAmbiguity,
}

impl TieBreak {
    /// Every policy, in declaration order.
    pub const ALL: [Self; 3] = [Self::FirstMatch, Self::LongestToken, Self::ErrorOnAmbiguity];

    /// The kebab-case name used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstMatch => "first-match",
            Self::LongestToken => "longest-token",
            Self::ErrorOnAmbiguity => "error-on-ambiguity",
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid tie-break policy: {s}"))
    }
}

/// Resolves virtual paths against a borrowed [`WildcardRegistry`].
///
/// # Examples
///
/// ```
/// use vpath::{Resolver, WildcardRegistry};
///
/// let mut registry = WildcardRegistry::new();
/// registry.register("$DATA", "/abs/data");
///
/// let resolver = Resolver::new(&registry);
/// assert_eq!(resolver.resolve("$DATA/config.ini").unwrap(), "/abs/data/config.ini");
/// assert_eq!(resolver.resolve("$DATA/nested/logs").unwrap(), "/abs/data/nested/logs");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'r> {
    registry: &'r WildcardRegistry,
    tie_break: TieBreak,
}

impl<'r> Resolver<'r> {
    /// Create a resolver using the default tie-break policy.
    #[must_use]
    pub fn new(registry: &'r WildcardRegistry) -> Self {
        Self {
            registry,
            tie_break: TieBreak::default(),
        }
    }

    /// Configure the tie-break policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{Resolver, TieBreak, WildcardRegistry};
    ///
    /// let registry = WildcardRegistry::new();
    /// let resolver = Resolver::new(&registry).with_tie_break(TieBreak::FirstMatch);
    /// assert_eq!(resolver.tie_break(), TieBreak::FirstMatch);
    /// ```
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// The active tie-break policy.
    #[must_use]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Resolve `path` to a normalized, forward-slash path.
    ///
    /// The path is classified once with [`PathKind::classify`], split into
    /// parent and name components, and the selected token is replaced
    /// everywhere it occurs in the parent. A parent that contains no
    /// registered token passes through unchanged. A path anchored at the
    /// root keeps its leading separator.
    ///
    /// Where a token is directly followed by a separator, trailing
    /// separators of its replacement are dropped so segments are joined by
    /// exactly one separator.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No wildcards are registered
    /// - The tie-break policy is [`TieBreak::ErrorOnAmbiguity`] and several
    ///   tokens match
    pub fn resolve(&self, path: &str) -> Result<String> {
        if self.registry.is_empty() {
            log::warn!("No wildcards available to resolve path '{path}'");
            return Err(Error::NoWildcards {
                path: path.to_string(),
            });
        }

        let (parent, joined) = match PathKind::classify(path) {
            PathKind::File => {
                let parts = split_file(path)?;
                let parent = self.substitute(path, parts.parent())?;
                let joined = join_file(&parent, parts.base_name(), parts.extension());
                (parts.parent(), joined)
            }
            PathKind::Directory => {
                let parts = split_directory(path);
                let parent = self.substitute(path, parts.parent())?;
                (parts.parent(), join_directory(&parent, parts.name()))
            }
        };

        // A separator at index 0 leaves an empty parent.
        if parent.is_empty() && path.starts_with(is_separator) {
            return Ok(format!("{SEPARATOR}{joined}"));
        }
        Ok(joined)
    }

    /// Replace the selected token in `parent`, or return it unchanged.
    fn substitute(&self, path: &str, parent: &str) -> Result<String> {
        Ok(match self.select(path, parent)? {
            Some(entry) => {
                log::debug!(
                    "Substituting wildcard '{}' -> '{}' in '{parent}'",
                    entry.token,
                    entry.replacement
                );
                replace_token(parent, entry)
            }
            None => parent.to_string(),
        })
    }

    /// Pick the entry to apply according to the tie-break policy.
    fn select<'s>(&'s self, path: &str, parent: &'s str) -> Result<Option<&'s WildcardEntry>> {
        let mut matches = self.registry.lookup_matches(parent);

        Ok(match self.tie_break {
            TieBreak::FirstMatch => matches.next(),
            // `max_by_key` keeps the last maximum, so reverse to prefer the
            // earliest registration among equal lengths.
            TieBreak::LongestToken => matches
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .max_by_key(|e| e.token.len()),
            TieBreak::ErrorOnAmbiguity => {
                let all: Vec<_> = matches.collect();
                if all.len() > 1 {
                    return Err(Error::AmbiguousWildcard {
                        path: path.to_string(),
                        tokens: all.iter().map(|e| e.token.clone()).collect(),
                    });
                }
                all.into_iter().next()
            }
        })
    }
}

/// Replace every occurrence of the entry's token in `parent`.
fn replace_token(parent: &str, entry: &WildcardEntry) -> String {
    let token = entry.token.as_str();
    let trimmed = entry.replacement.trim_end_matches(is_separator);

    let mut out = String::with_capacity(parent.len() + entry.replacement.len());
    let mut last = 0;
    for (start, _) in parent.match_indices(token) {
        out.push_str(&parent[last..start]);
        let end = start + token.len();
        if parent[end..].starts_with(is_separator) {
            out.push_str(trimmed);
        } else {
            out.push_str(&entry.replacement);
        }
        last = end;
    }
    out.push_str(&parent[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(entries: &[(&str, &str)]) -> WildcardRegistry {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_resolve_file() {
        let reg = registry(&[("$DATA", "/abs/data")]);
        let resolver = Resolver::new(&reg);
        assert_eq!(
            resolver.resolve("$DATA/config.ini").unwrap(),
            "/abs/data/config.ini"
        );
    }

    #[test]
    fn test_resolve_directory() {
        let reg = registry(&[("$DATA", "/abs/data")]);
        let resolver = Resolver::new(&reg);
        assert_eq!(
            resolver.resolve("$DATA/nested/logs").unwrap(),
            "/abs/data/nested/logs"
        );
    }

    #[test]
    fn test_resolve_empty_registry_fails() {
        let reg = WildcardRegistry::new();
        let err = Resolver::new(&reg).resolve("$DATA/config.ini").unwrap_err();
        assert!(matches!(err, Error::NoWildcards { .. }));
    }

    #[test]
    fn test_no_matching_token_passes_through() {
        let reg = registry(&[("$DATA", "/abs/data")]);
        let resolver = Resolver::new(&reg);
        assert_eq!(resolver.resolve("other/dir/file.txt").unwrap(), "other/dir/file.txt");
        assert_eq!(resolver.resolve("other\\dir\\logs").unwrap(), "other/dir/logs");
    }

    #[test]
    fn test_backslash_input_normalizes() {
        let reg = registry(&[("$DATA", "/abs/data")]);
        let resolved = Resolver::new(&reg).resolve("$DATA\\sub\\file.txt").unwrap();
        assert_eq!(resolved, "/abs/data/sub/file.txt");
        assert!(!resolved.contains('\\'));
    }

    #[test]
    fn test_windows_replacement_normalizes() {
        let reg = registry(&[("$DATA", "D:\\data\\")]);
        let resolved = Resolver::new(&reg).resolve("$DATA/file.txt").unwrap();
        assert_eq!(resolved, "D:/data/file.txt");
    }

    #[test]
    fn test_trailing_separator_replacement_before_more_segments() {
        let reg = registry(&[("$ASSETS", "C:\\game\\assets\\"), ("$DATA", "/abs/data/")]);
        let resolver = Resolver::new(&reg);
        assert_eq!(
            resolver.resolve("$ASSETS/textures/grass.png").unwrap(),
            "C:/game/assets/textures/grass.png"
        );
        assert_eq!(
            resolver.resolve("$DATA\\nested\\deeper\\logs").unwrap(),
            "/abs/data/nested/deeper/logs"
        );
        assert_eq!(resolver.resolve("$DATA/a.txt").unwrap(), "/abs/data/a.txt");
    }

    #[test]
    fn test_trailing_separators_kept_when_token_not_followed_by_separator() {
        let reg = registry(&[("$V", "v2/")]);
        let resolved = Resolver::new(&reg).resolve("$V-cache/x.bin").unwrap();
        assert_eq!(resolved, "v2/-cache/x.bin");
    }

    #[test]
    fn test_rooted_paths_keep_leading_separator() {
        let reg = registry(&[("$DATA", "/abs/data")]);
        let resolver = Resolver::new(&reg);
        assert_eq!(resolver.resolve("/x.txt").unwrap(), "/x.txt");
        assert_eq!(resolver.resolve("/logs").unwrap(), "/logs");
        assert_eq!(resolver.resolve("\\x.txt").unwrap(), "/x.txt");
        assert_eq!(resolver.resolve("/var/log/app.log").unwrap(), "/var/log/app.log");
    }

    #[test]
    fn test_substitution_is_global() {
        let reg = registry(&[("$V", "v2")]);
        let resolved = Resolver::new(&reg).resolve("$V/cache/$V/x.bin").unwrap();
        assert_eq!(resolved, "v2/cache/v2/x.bin");
    }

    #[test]
    fn test_token_in_name_is_not_substituted() {
        let reg = registry(&[("$DATA", "/abs/data")]);
        let resolver = Resolver::new(&reg);
        assert_eq!(resolver.resolve("dir/$DATA.txt").unwrap(), "dir/$DATA.txt");
        assert_eq!(resolver.resolve("$DATA").unwrap(), "$DATA");
    }

    #[test]
    fn test_dotted_directory_segment_resolves_as_directory() {
        let reg = registry(&[("$DATA", "/abs/data")]);
        let resolved = Resolver::new(&reg).resolve("$DATA/v1.2/logs").unwrap();
        assert_eq!(resolved, "/abs/data/v1.2/logs");
    }

    #[test]
    fn test_longest_token_wins() {
        let reg = registry(&[("$D", "/short"), ("$DATA", "/long")]);
        let resolved = Resolver::new(&reg).resolve("$DATA/a.txt").unwrap();
        assert_eq!(resolved, "/long/a.txt");
    }

    #[test]
    fn test_longest_token_ties_prefer_first_registered() {
        let reg = registry(&[("$A", "/a"), ("$B", "/b")]);
        let resolved = Resolver::new(&reg).resolve("$B/$A/f.txt").unwrap();
        assert_eq!(resolved, "$B//a/f.txt");
    }

    #[test]
    fn test_first_match_policy() {
        let reg = registry(&[("$D", "/short"), ("$DATA", "/long")]);
        let resolved = Resolver::new(&reg)
            .with_tie_break(TieBreak::FirstMatch)
            .resolve("$DATA/a.txt")
            .unwrap();
        assert_eq!(resolved, "/shortATA/a.txt");
    }

    #[test]
    fn test_error_on_ambiguity_policy() {
        let reg = registry(&[("$D", "/short"), ("$DATA", "/long")]);
        let resolver = Resolver::new(&reg).with_tie_break(TieBreak::ErrorOnAmbiguity);

        let err = resolver.resolve("$DATA/a.txt").unwrap_err();
        match err {
            Error::AmbiguousWildcard { tokens, .. } => {
                assert_eq!(tokens, vec!["$D".to_string(), "$DATA".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }

        let reg = registry(&[("$DATA", "/long")]);
        let resolver = Resolver::new(&reg).with_tie_break(TieBreak::ErrorOnAmbiguity);
        assert_eq!(resolver.resolve("$DATA/a.txt").unwrap(), "/long/a.txt");
    }

    #[test]
    fn test_tie_break_parse_and_display() {
        for policy in TieBreak::ALL {
            assert_eq!(policy.to_string().parse::<TieBreak>().unwrap(), policy);
        }
        assert_eq!("LONGEST-TOKEN".parse::<TieBreak>().unwrap(), TieBreak::LongestToken);
        assert!("random".parse::<TieBreak>().is_err());
    }

    #[test]
    fn test_tie_break_deserialize() {
        let policy: TieBreak = serde_yaml::from_str("error-on-ambiguity").unwrap();
        assert_eq!(policy, TieBreak::ErrorOnAmbiguity);
    }
}
