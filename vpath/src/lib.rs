#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # vpath
//!
//! A small virtual filesystem layer that rewrites wildcard-prefixed paths
//! into real filesystem paths.
//!
//! Callers register wildcard tokens such as `$DATA` against real path
//! prefixes, then resolve virtual paths like `$DATA/config.ini` into
//! normalized, forward-slash paths before handing them to the filesystem.
//!
//! ## Core Types
//!
//! - [`Vfs`]: Caller-owned resolution context
//! - [`WildcardRegistry`] and [`WildcardEntry`]: Token to path mapping
//! - [`Resolver`] and [`TieBreak`]: Substitution and tie-break policy
//! - [`Config`] and [`ConfigBuilder`]: Layered YAML configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use vpath::path::{split_file, PathKind};
//! use vpath::Vfs;
//!
//! let parts = split_file("$DATA/config.ini").unwrap();
//! assert_eq!(parts.parent(), "$DATA");
//! assert_eq!(parts.extension(), ".ini");
//! assert_eq!(PathKind::classify("$DATA/nested/logs"), PathKind::Directory);
//!
//! let mut vfs = Vfs::new();
//! vfs.add_wildcard("$DATA", "C:\\abs\\data");
//! assert_eq!(vfs.resolve_path("$DATA\\config.ini"), "C:/abs/data/config.ini");
//! ```

pub mod config;
pub mod error;
pub mod fileio;
pub mod logging;
pub mod path;
pub mod resolver;
pub mod vfs;
pub mod wildcard;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{DirectoryInfo, FileInfo, PathKind};
pub use resolver::{Resolver, TieBreak};
pub use vfs::Vfs;
pub use wildcard::{WildcardEntry, WildcardRegistry};
