//! Environment variable handling for configuration overrides.
//!
//! - `VPATH_WILDCARDS`: `TOKEN=PATH` pairs separated by `;`
//! - `VPATH_TIE_BREAK`: `first-match`, `longest-token` or `error-on-ambiguity`

use std::env;

use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::wildcard::WildcardEntry;

/// Variable holding extra wildcard declarations.
pub const WILDCARDS_ENV: &str = "VPATH_WILDCARDS";

/// Variable holding the tie-break policy.
pub const TIE_BREAK_ENV: &str = "VPATH_TIE_BREAK";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use vpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(raw) = env::var(WILDCARDS_ENV) {
            let overrides = Config {
                wildcards: Some(Self::parse_wildcards(WILDCARDS_ENV, &raw)?),
                tie_break: None,
            };
            ConfigMerger::merge_into(config, &overrides);
        }

        if let Ok(raw) = env::var(TIE_BREAK_ENV) {
            config.tie_break = Some(raw.trim().parse().map_err(|message| Error::Validation {
                field: TIE_BREAK_ENV.into(),
                message,
            })?);
        }

        Ok(())
    }

    /// Parse `TOKEN=PATH` pairs separated by `;`.
    ///
    /// Empty segments are skipped, so a trailing `;` is harmless. The first
    /// `=` splits token from path; paths may contain further `=`.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming `field` if a segment has no `=`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::config::EnvironmentConfig;
    ///
    /// let entries = EnvironmentConfig::parse_wildcards("X", "$DATA=/abs/data;$TMP=/tmp").unwrap();
    /// assert_eq!(entries.len(), 2);
    /// assert_eq!(entries[1].replacement, "/tmp");
    /// ```
    pub fn parse_wildcards(field: &str, raw: &str) -> Result<Vec<WildcardEntry>> {
        raw.split(';')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                segment
                    .split_once('=')
                    .map(|(token, path)| WildcardEntry::new(token.trim(), path.trim()))
                    .ok_or_else(|| Error::Validation {
                        field: field.into(),
                        message: format!("expected TOKEN=PATH, found '{segment}'"),
                    })
            })
            .collect()
    }
}
