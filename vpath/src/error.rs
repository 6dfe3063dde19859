//! Error types for the vpath library.
//!
//! This module provides the error hierarchy for path splitting, wildcard
//! resolution, file reading and configuration, using `thiserror` for
//! ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a vpath error.
///
/// # Examples
///
/// ```
/// use vpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/abs/data/config.ini".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the vpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A file split was requested for a path whose last segment has no
    /// extension.
    #[error("path '{path}' has no file extension")]
    MissingExtension {
        /// The offending path.
        path: String,
    },

    /// Resolution was attempted while no wildcards were registered.
    #[error("no wildcards registered to resolve '{path}'")]
    NoWildcards {
        /// The path that could not be resolved.
        path: String,
    },

    /// More than one registered token matched and the tie-break policy
    /// forbids guessing.
    #[error("ambiguous wildcard for '{path}': tokens {} all match", .tokens.join(", "))]
    AmbiguousWildcard {
        /// The path being resolved.
        path: String,
        /// Every token that matched the parent component.
        tokens: Vec<String>,
    },

    /// The resolved file does not exist.
    #[error("file '{path}' with full path {} was not found", resolved.display())]
    FileNotFound {
        /// The virtual path as supplied by the caller.
        path: String,
        /// The path after wildcard substitution.
        resolved: PathBuf,
    },

    /// A text read produced bytes that are not valid UTF-8.
    #[error("file {} is not valid UTF-8", path.display())]
    InvalidUtf8 {
        /// The resolved path of the file.
        path: PathBuf,
    },

    /// A filesystem path used by the library is unusable.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// Why it could not be used.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::FileNotFound {
    ///     path: "$DATA/missing.txt".to_string(),
    ///     resolved: PathBuf::from("/abs/data/missing.txt"),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }

    /// Check if error came from resolution rather than I/O or config.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Error;
    ///
    /// let err = Error::NoWildcards { path: "$DATA/a.txt".to_string() };
    /// assert!(err.is_resolution_error());
    /// ```
    #[must_use]
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::MissingExtension { .. } | Self::NoWildcards { .. } | Self::AmbiguousWildcard { .. }
        )
    }
}
