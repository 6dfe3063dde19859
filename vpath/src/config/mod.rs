//! Configuration system for vpath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`VPATH_*`)
//! 3. Private project config (`vpath.local.yaml`)
//! 4. Project config (`vpath.yaml`)
//! 5. User config (`~/.vpath/config.yaml`)
//!
//! Wildcards accumulate across sources; a token declared again by a
//! higher-precedence source takes that source's path.
//!
//! # Examples
//!
//! ```
//! use vpath::config::{Config, ConfigBuilder};
//! use vpath::WildcardEntry;
//!
//! let custom = Config {
//!     wildcards: Some(vec![WildcardEntry::new("$DATA", "/abs/data")]),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.registry().get("$DATA"), Some("/abs/data"));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::{EnvironmentConfig, TIE_BREAK_ENV, WILDCARDS_ENV};
pub use loader::{
    default_config_dir, ConfigLoader, ConfigSource, LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE,
    USER_CONFIG_FILE,
};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
