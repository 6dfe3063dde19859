//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve virtual paths
//! - `exists`: Check whether a virtual path can be opened for reading
//! - `cat`: Print a file read through a virtual path
//! - `split`: Show how a path is classified and split
//! - `wildcards`: List the effective wildcard registry
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod cat;
pub mod completions;
pub mod exists;
pub mod resolve;
pub mod split;
pub mod validate;
pub mod wildcards;

pub use cat::CatCommand;
pub use completions::CompletionsCommand;
pub use exists::ExistsCommand;
pub use resolve::ResolveCommand;
pub use split::SplitCommand;
pub use validate::ValidateCommand;
pub use wildcards::WildcardsCommand;
