//! Splitting raw paths into borrowed components.
//!
//! The parsers here never allocate: every component is a slice of the input
//! string, so the results live only as long as the input buffer.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::join::{join_directory, join_file};

/// Returns true for either path separator.
pub(crate) fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Byte index of the last `/` or `\` in `path`.
pub(crate) fn last_separator(path: &str) -> Option<usize> {
    path.rfind(is_separator)
}

/// A file path split into parent, base name and extension.
///
/// The extension always starts with `.`. When the path has no separator the
/// parent is empty.
///
/// # Examples
///
/// ```
/// use vpath::path::FileParts;
///
/// let parts = FileParts::parse("assets/textures/stone.png").unwrap();
/// assert_eq!(parts.parent(), "assets/textures");
/// assert_eq!(parts.base_name(), "stone");
/// assert_eq!(parts.extension(), ".png");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FileParts<'a> {
    parent: &'a str,
    base_name: &'a str,
    extension: &'a str,
}

impl<'a> FileParts<'a> {
    /// Parse a file-like path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingExtension`] if the final segment contains no
    /// `.`. That includes paths whose only dot sits in a directory segment.
    pub fn parse(path: &'a str) -> Result<Self> {
        let separator = last_separator(path);
        let name_start = separator.map_or(0, |i| i + 1);
        let dot = path[name_start..]
            .rfind('.')
            .map(|i| name_start + i)
            .ok_or_else(|| Error::MissingExtension {
                path: path.to_string(),
            })?;

        Ok(Self {
            parent: separator.map_or("", |i| &path[..i]),
            base_name: &path[name_start..dot],
            extension: &path[dot..],
        })
    }

    /// Everything before the last separator.
    #[must_use]
    pub fn parent(&self) -> &'a str {
        self.parent
    }

    /// The file name without its extension.
    #[must_use]
    pub fn base_name(&self) -> &'a str {
        self.base_name
    }

    /// The extension, including its leading `.`.
    #[must_use]
    pub fn extension(&self) -> &'a str {
        self.extension
    }

    /// Reassemble the components into a normalized path.
    #[must_use]
    pub fn full_path(&self) -> String {
        join_file(self.parent, self.base_name, self.extension)
    }
}

/// A directory path split into parent and final segment.
///
/// # Examples
///
/// ```
/// use vpath::path::DirectoryParts;
///
/// let parts = DirectoryParts::parse("$DATA/nested/logs");
/// assert_eq!(parts.parent(), "$DATA/nested");
/// assert_eq!(parts.name(), "logs");
///
/// let single = DirectoryParts::parse("logs");
/// assert_eq!(single.parent(), "");
/// assert_eq!(single.name(), "logs");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DirectoryParts<'a> {
    parent: &'a str,
    name: &'a str,
}

impl<'a> DirectoryParts<'a> {
    /// Parse a directory-like path. Never fails.
    #[must_use]
    pub fn parse(path: &'a str) -> Self {
        match last_separator(path) {
            Some(i) => Self {
                parent: &path[..i],
                name: &path[i + 1..],
            },
            None => Self {
                parent: "",
                name: path,
            },
        }
    }

    /// Everything before the last separator.
    #[must_use]
    pub fn parent(&self) -> &'a str {
        self.parent
    }

    /// The last path segment.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Reassemble the components into a normalized path.
    #[must_use]
    pub fn full_path(&self) -> String {
        join_directory(self.parent, self.name)
    }
}

/// Split a file-like path. See [`FileParts::parse`].
///
/// # Errors
///
/// Returns [`Error::MissingExtension`] if the final segment has no `.`.
pub fn split_file(path: &str) -> Result<FileParts<'_>> {
    FileParts::parse(path)
}

/// Split a directory-like path. See [`DirectoryParts::parse`].
#[must_use]
pub fn split_directory(path: &str) -> DirectoryParts<'_> {
    DirectoryParts::parse(path)
}
