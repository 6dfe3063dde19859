//! Configuration validation.

use std::collections::HashSet;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use vpath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// Each wildcard token must be non-empty, free of NUL bytes and
    /// declared only once. Replacement paths must not contain NUL bytes.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn validate(config: &Config) -> Result<()> {
        let Some(ref wildcards) = config.wildcards else {
            return Ok(());
        };

        let mut seen = HashSet::new();
        for (index, entry) in wildcards.iter().enumerate() {
            let field = format!("wildcards[{index}]");

            if entry.token.is_empty() {
                return Err(Error::Validation {
                    field: format!("{field}.token"),
                    message: "Token cannot be empty; it would match every path".into(),
                });
            }

            if entry.token.contains('\0') {
                return Err(Error::Validation {
                    field: format!("{field}.token"),
                    message: "Token cannot contain null bytes".into(),
                });
            }

            if entry.replacement.contains('\0') {
                return Err(Error::Validation {
                    field: format!("{field}.path"),
                    message: "Path cannot contain null bytes".into(),
                });
            }

            if !seen.insert(entry.token.as_str()) {
                return Err(Error::Validation {
                    field: format!("{field}.token"),
                    message: format!("Token '{}' is declared more than once", entry.token),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wildcard::WildcardEntry;

    fn with_wildcards(entries: Vec<WildcardEntry>) -> Config {
        Config {
            wildcards: Some(entries),
            tie_break: None,
        }
    }

    #[test]
    fn test_valid_config() {
        let config = with_wildcards(vec![
            WildcardEntry::new("$DATA", "/abs/data"),
            WildcardEntry::new("$ASSETS", "C:\\assets"),
        ]);
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_empty_token_rejected() {
        let config = with_wildcards(vec![WildcardEntry::new("", "/x")]);
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "wildcards[0].token"));
    }

    #[test]
    fn test_null_bytes_rejected() {
        let config = with_wildcards(vec![WildcardEntry::new("$A\0", "/x")]);
        assert!(ConfigValidator::validate(&config).is_err());

        let config = with_wildcards(vec![WildcardEntry::new("$A", "/x\0")]);
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "wildcards[0].path"));
    }

    #[test]
    fn test_duplicate_token_rejected() {
        let config = with_wildcards(vec![
            WildcardEntry::new("$A", "/a"),
            WildcardEntry::new("$A", "/b"),
        ]);
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "wildcards[1].token"));
    }
}
