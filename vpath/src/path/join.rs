//! Assembling path components into normalized paths.
//!
//! Every function here produces forward-slash output regardless of which
//! separators the inputs used.

use std::borrow::Cow;

use crate::path::split::is_separator;

/// The separator used in every assembled path.
pub const SEPARATOR: char = '/';

/// Append a separator to `path` unless it is empty or already ends in one.
///
/// An empty parent stays empty so that joining it with a name never yields
/// a leading separator.
///
/// # Examples
///
/// ```
/// use vpath::path::ensure_trailing_separator;
///
/// assert_eq!(ensure_trailing_separator(""), "");
/// assert_eq!(ensure_trailing_separator("root"), "root/");
/// assert_eq!(ensure_trailing_separator("root/"), "root/");
/// ```
#[must_use]
pub fn ensure_trailing_separator(path: &str) -> Cow<'_, str> {
    if path.is_empty() || path.ends_with(is_separator) {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("{path}{SEPARATOR}"))
    }
}

/// Replace every backslash with a forward slash.
///
/// # Examples
///
/// ```
/// use vpath::path::normalize_separators;
///
/// assert_eq!(normalize_separators("C:\\data\\file.txt"), "C:/data/file.txt");
/// ```
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Join a parent, base name and extension into a normalized file path.
///
/// # Examples
///
/// ```
/// use vpath::path::join_file;
///
/// assert_eq!(join_file("", "a", ".txt"), "a.txt");
/// assert_eq!(join_file("/abs/data", "config", ".ini"), "/abs/data/config.ini");
/// ```
#[must_use]
pub fn join_file(parent: &str, base_name: &str, extension: &str) -> String {
    let mut full = ensure_trailing_separator(parent).into_owned();
    full.push_str(base_name);
    full.push_str(extension);
    normalize_separators(&full)
}

/// Join a parent and a final segment into a normalized directory path.
///
/// # Examples
///
/// ```
/// use vpath::path::join_directory;
///
/// assert_eq!(join_directory("root", "sub"), "root/sub");
/// assert_eq!(join_directory("", "sub"), "sub");
/// ```
#[must_use]
pub fn join_directory(parent: &str, name: &str) -> String {
    let mut full = ensure_trailing_separator(parent).into_owned();
    full.push_str(name);
    normalize_separators(&full)
}
