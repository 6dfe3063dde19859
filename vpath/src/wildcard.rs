//! Wildcard token registry.
//!
//! A [`WildcardRegistry`] maps wildcard tokens (such as `$DATA`) to the real
//! path prefixes they stand for. Entries are only ever added or overwritten;
//! the registry never shrinks.

use serde::{Deserialize, Serialize};

/// A single token and the path it expands to.
///
/// In configuration files the replacement is spelled `path`:
///
/// ```yaml
/// - token: $DATA
///   path: /abs/data
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WildcardEntry {
    /// The substring to look for in a path's parent component.
    pub token: String,
    /// The text substituted for every occurrence of `token`.
    #[serde(rename = "path")]
    pub replacement: String,
}

impl WildcardEntry {
    /// Create a new entry.
    pub fn new(token: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            replacement: replacement.into(),
        }
    }

    /// Whether this entry's token occurs anywhere in `text`.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        text.contains(self.token.as_str())
    }
}

/// Registry of wildcard tokens.
///
/// Tokens are unique; registering an existing token replaces its path but
/// keeps its original registration position, which the resolver's
/// tie-break policies rely on.
///
/// # Examples
///
/// ```
/// use vpath::WildcardRegistry;
///
/// let mut registry = WildcardRegistry::new();
/// registry.register("$DATA", "/abs/data");
/// registry.register("$DATA", "/mnt/data");
///
/// assert_eq!(registry.len(), 1);
/// assert_eq!(registry.get("$DATA"), Some("/mnt/data"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WildcardRegistry {
    entries: Vec<WildcardEntry>,
}

impl WildcardRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `token`, or overwrite its replacement if already present.
    ///
    /// The token is not validated. An empty token matches every path, so it
    /// is accepted with a warning.
    pub fn register(&mut self, token: impl Into<String>, replacement: impl Into<String>) {
        let token = token.into();
        let replacement = replacement.into();

        if token.is_empty() {
            log::warn!("Registering an empty wildcard token; it matches every path");
        }

        match self.entries.iter_mut().find(|e| e.token == token) {
            Some(existing) => existing.replacement = replacement,
            None => self.entries.push(WildcardEntry { token, replacement }),
        }
    }

    /// The replacement registered for `token`.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.token == token)
            .map(|e| e.replacement.as_str())
    }

    /// Whether `token` is registered.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    /// Number of registered tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tokens are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &WildcardEntry> {
        self.entries.iter()
    }

    /// Entries whose token occurs within `parent`, in registration order.
    pub fn lookup_matches<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'a WildcardEntry> {
        self.entries.iter().filter(move |e| e.matches(parent))
    }
}

impl<K, V> FromIterator<(K, V)> for WildcardRegistry
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl<K, V> Extend<(K, V)> for WildcardRegistry
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (token, replacement) in iter {
            self.register(token, replacement);
        }
    }
}

impl<'a> IntoIterator for &'a WildcardRegistry {
    type Item = &'a WildcardEntry;
    type IntoIter = std::slice::Iter<'a, WildcardEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
