//! Owned path information.
//!
//! [`FileInfo`] and [`DirectoryInfo`] hold the same components as the
//! borrowed [`FileParts`] and [`DirectoryParts`] views, but in owned
//! strings, so they can be stored and turned back into a full path after the
//! source buffer is gone.

use std::fmt;

use crate::error::Result;
use crate::path::join::{join_directory, join_file};
use crate::path::split::{DirectoryParts, FileParts};

/// Owned components of a file path.
///
/// # Examples
///
/// ```
/// use vpath::path::FileInfo;
///
/// let info = {
///     let buffer = String::from("assets\\textures\\stone.png");
///     FileInfo::parse(&buffer).unwrap()
/// };
/// assert_eq!(info.base_name(), "stone");
/// assert_eq!(info.full_path(), "assets/textures/stone.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileInfo {
    parent: String,
    base_name: String,
    extension: String,
}

impl FileInfo {
    /// Reassemble a normalized path from separate components.
    #[must_use]
    pub fn make_full_path(parent: &str, base_name: &str, extension: &str) -> String {
        join_file(parent, base_name, extension)
    }

    /// Parse `path` and reassemble it, normalizing its separators.
    ///
    /// # Errors
    ///
    /// Returns an error if the final segment has no extension.
    pub fn normalize(path: &str) -> Result<String> {
        Ok(FileParts::parse(path)?.full_path())
    }

    /// Parse a file path into owned components.
    ///
    /// # Errors
    ///
    /// Returns an error if the final segment has no extension.
    pub fn parse(path: &str) -> Result<Self> {
        FileParts::parse(path).map(Self::from)
    }

    /// The parent directory, as given.
    #[must_use]
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// The file name without its extension.
    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// The extension, including its leading `.`.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The normalized full path.
    #[must_use]
    pub fn full_path(&self) -> String {
        join_file(&self.parent, &self.base_name, &self.extension)
    }
}

impl From<FileParts<'_>> for FileInfo {
    fn from(parts: FileParts<'_>) -> Self {
        Self {
            parent: parts.parent().to_string(),
            base_name: parts.base_name().to_string(),
            extension: parts.extension().to_string(),
        }
    }
}

impl fmt::Display for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}

/// Owned components of a directory path.
///
/// # Examples
///
/// ```
/// use vpath::path::DirectoryInfo;
///
/// let info = DirectoryInfo::parse("root\\sub");
/// assert_eq!(info.parent(), "root");
/// assert_eq!(info.name(), "sub");
/// assert_eq!(info.full_path(), "root/sub");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectoryInfo {
    parent: String,
    name: String,
}

impl DirectoryInfo {
    /// Reassemble a normalized path from separate components.
    #[must_use]
    pub fn make_full_path(parent: &str, name: &str) -> String {
        join_directory(parent, name)
    }

    /// Parse `path` and reassemble it, normalizing its separators.
    #[must_use]
    pub fn normalize(path: &str) -> String {
        DirectoryParts::parse(path).full_path()
    }

    /// Parse a directory path into owned components.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self::from(DirectoryParts::parse(path))
    }

    /// The parent directory, as given.
    #[must_use]
    pub fn parent(&self) -> &str {
        &self.parent
    }

    /// The last path segment.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized full path.
    #[must_use]
    pub fn full_path(&self) -> String {
        join_directory(&self.parent, &self.name)
    }
}

impl From<DirectoryParts<'_>> for DirectoryInfo {
    fn from(parts: DirectoryParts<'_>) -> Self {
        Self {
            parent: parts.parent().to_string(),
            name: parts.name().to_string(),
        }
    }
}

impl fmt::Display for DirectoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_info_outlives_buffer() {
        let info = {
            let buffer = String::from("$DATA/config.ini");
            FileInfo::parse(&buffer).unwrap()
        };
        assert_eq!(info.parent(), "$DATA");
        assert_eq!(info.base_name(), "config");
        assert_eq!(info.extension(), ".ini");
        assert_eq!(info.full_path(), "$DATA/config.ini");
    }

    #[test]
    fn test_file_info_matches_view() {
        let path = "a\\b\\c.txt";
        let view = FileParts::parse(path).unwrap();
        let owned = FileInfo::from(view);
        assert_eq!(owned.parent(), view.parent());
        assert_eq!(owned.base_name(), view.base_name());
        assert_eq!(owned.extension(), view.extension());
        assert_eq!(owned.full_path(), view.full_path());
    }

    #[test]
    fn test_file_info_make_full_path() {
        assert_eq!(FileInfo::make_full_path("", "a", ".txt"), "a.txt");
        assert_eq!(FileInfo::make_full_path("x\\y", "a", ".txt"), "x/y/a.txt");
    }

    #[test]
    fn test_file_info_normalize() {
        assert_eq!(FileInfo::normalize("x\\y\\a.txt").unwrap(), "x/y/a.txt");
        assert!(FileInfo::normalize("x/y").is_err());
    }

    #[test]
    fn test_file_info_display() {
        let info = FileInfo::parse("x\\a.txt").unwrap();
        assert_eq!(info.to_string(), "x/a.txt");
    }

    #[test]
    fn test_directory_info_round_trip() {
        let info = DirectoryInfo::parse("root/sub/leaf");
        assert_eq!(info.parent(), "root/sub");
        assert_eq!(info.name(), "leaf");
        assert_eq!(info.to_string(), "root/sub/leaf");
    }

    #[test]
    fn test_directory_info_single_segment() {
        let info = DirectoryInfo::parse("leaf");
        assert_eq!(info.parent(), "");
        assert_eq!(info.full_path(), "leaf");
        assert_eq!(DirectoryInfo::make_full_path("root", "sub"), "root/sub");
        assert_eq!(DirectoryInfo::normalize("a\\b"), "a/b");
    }
}
