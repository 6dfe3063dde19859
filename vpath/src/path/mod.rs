//! Structural path handling for virtual paths.
//!
//! This module splits raw path strings into their components and assembles
//! components back into normalized, forward-slash paths. Nothing here
//! touches the filesystem.
//!
//! # Key Concepts
//!
//! ## Classification
//!
//! A path is *file-like* when its final segment contains a `.`, and
//! *directory-like* otherwise. [`PathKind::classify`] is the only place this
//! decision is made.
//!
//! ## Views and owned values
//!
//! [`FileParts`] and [`DirectoryParts`] borrow slices of the input string
//! and are used on the resolution path. [`FileInfo`] and [`DirectoryInfo`]
//! own their components and can rebuild the full path later.
//!
//! ## Separators
//!
//! Both `/` and `\` are recognised as separators on input. Assembled paths
//! always use `/`.
//!
//! # Examples
//!
//! ```
//! use vpath::path::{split_file, join_file, PathKind};
//!
//! let parts = split_file("$DATA/config.ini").unwrap();
//! assert_eq!(parts.parent(), "$DATA");
//! assert_eq!(parts.base_name(), "config");
//! assert_eq!(parts.extension(), ".ini");
//!
//! assert_eq!(join_file("", "a", ".txt"), "a.txt");
//! assert_eq!(PathKind::classify("$DATA/nested/logs"), PathKind::Directory);
//! ```

pub mod info;
pub mod join;
mod kind;
pub mod split;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use info::{DirectoryInfo, FileInfo};
pub use join::{
    ensure_trailing_separator, join_directory, join_file, normalize_separators, SEPARATOR,
};
pub use kind::PathKind;
pub use split::{split_directory, split_file, DirectoryParts, FileParts};
