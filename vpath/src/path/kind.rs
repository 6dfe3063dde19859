//! File-like versus directory-like classification.

use std::fmt;

use serde::Serialize;

use crate::path::split::last_separator;

/// Whether a path names a file or a directory.
///
/// The decision is purely textual: no filesystem check is performed. A path
/// is a file when its final segment contains a `.`. A dot in an earlier
/// segment does not count, so `$DATA/v1.2/logs` is a directory.
///
/// # Examples
///
/// ```
/// use vpath::path::PathKind;
///
/// assert_eq!(PathKind::classify("$DATA/config.ini"), PathKind::File);
/// assert_eq!(PathKind::classify("$DATA/nested/logs"), PathKind::Directory);
/// assert_eq!(PathKind::classify("$DATA/v1.2/logs"), PathKind::Directory);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// The final segment carries an extension.
    File,
    /// The final segment has no `.`.
    Directory,
}

impl PathKind {
    /// Classify a raw path string.
    #[must_use]
    pub fn classify(path: &str) -> Self {
        let name_start = last_separator(path).map_or(0, |i| i + 1);
        if path[name_start..].contains('.') {
            Self::File
        } else {
            Self::Directory
        }
    }

    /// Returns true for [`PathKind::File`].
    #[must_use]
    pub fn is_file(self) -> bool {
        matches!(self, Self::File)
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
        }
    }
}
