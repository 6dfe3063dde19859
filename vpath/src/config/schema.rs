//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::resolver::TieBreak;
use crate::wildcard::{WildcardEntry, WildcardRegistry};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use vpath::config::Config;
///
/// let yaml = "
/// wildcards:
///   - token: $DATA
///     path: /abs/data
/// tie_break: first-match
/// ";
/// let config: Config = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.registry().get("$DATA"), Some("/abs/data"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Wildcard declarations, in the order they should be registered.
    pub wildcards: Option<Vec<WildcardEntry>>,

    /// Policy for choosing between several matching tokens.
    pub tie_break: Option<TieBreak>,
}

impl Config {
    /// Build a registry from the declared wildcards.
    ///
    /// Tokens are unique in any configuration that passed validation. For a
    /// configuration built in code, a repeated token keeps its first position
    /// and its last path.
    #[must_use]
    pub fn registry(&self) -> WildcardRegistry {
        self.wildcards
            .iter()
            .flatten()
            .map(|e| (e.token.as_str(), e.replacement.as_str()))
            .collect()
    }

    /// The configured tie-break policy, or the default.
    #[must_use]
    pub fn tie_break_or_default(&self) -> TieBreak {
        self.tie_break.unwrap_or_default()
    }
}
