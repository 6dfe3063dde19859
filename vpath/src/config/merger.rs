//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use vpath::config::{Config, ConfigMerger};
/// use vpath::WildcardEntry;
///
/// let mut low = Config {
///     wildcards: Some(vec![WildcardEntry::new("$DATA", "/low")]),
///     ..Default::default()
/// };
/// let high = Config {
///     wildcards: Some(vec![WildcardEntry::new("$DATA", "/high")]),
///     ..Default::default()
/// };
///
/// ConfigMerger::merge_into(&mut low, &high);
/// assert_eq!(low.registry().get("$DATA"), Some("/high"));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - `tie_break`: source overwrites if set
    /// - `wildcards`: accumulated by token; a token already present keeps
    ///   its position and takes the source's path
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.tie_break.is_some() {
            target.tie_break = source.tie_break;
        }

        let Some(ref incoming) = source.wildcards else {
            return;
        };
        let merged = target.wildcards.get_or_insert_with(Vec::new);
        for entry in incoming {
            match merged.iter_mut().find(|e| e.token == entry.token) {
                Some(existing) => existing.replacement.clone_from(&entry.replacement),
                None => merged.push(entry.clone()),
            }
        }
    }
}
