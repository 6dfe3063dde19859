//! Caller-owned resolution context.
//!
//! A [`Vfs`] bundles a [`WildcardRegistry`] with the [`TieBreak`] policy
//! used to resolve against it. Create one, register wildcards, and pass it
//! by reference to whatever needs to resolve paths.

use crate::config::Config;
use crate::error::Result;
use crate::resolver::{Resolver, TieBreak};
use crate::wildcard::WildcardRegistry;

/// A virtual filesystem context.
///
/// # Examples
///
/// ```
/// use vpath::Vfs;
///
/// let mut vfs = Vfs::new();
/// assert_eq!(vfs.resolve_path("$DATA/config.ini"), "");
///
/// vfs.add_wildcard("$DATA", "/abs/data");
/// assert_eq!(vfs.resolve_path("$DATA/config.ini"), "/abs/data/config.ini");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Vfs {
    registry: WildcardRegistry,
    tie_break: TieBreak,
}

impl Vfs {
    /// Create a context with no wildcards and the default tie-break policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            registry: config.registry(),
            tie_break: config.tie_break_or_default(),
        }
    }

    /// Configure the tie-break policy.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Register `token` to expand to `value`, replacing any earlier value.
    pub fn add_wildcard(&mut self, token: &str, value: &str) {
        log::info!("Adding vfs wildcard: [{token} | {value}]");
        self.registry.register(token, value);
    }

    /// The registered wildcards.
    #[must_use]
    pub fn registry(&self) -> &WildcardRegistry {
        &self.registry
    }

    /// The active tie-break policy.
    #[must_use]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// A resolver borrowing this context.
    #[must_use]
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.registry).with_tie_break(self.tie_break)
    }

    /// Resolve `path`, reporting failures as typed errors.
    ///
    /// # Errors
    ///
    /// See [`Resolver::resolve`].
    pub fn resolve(&self, path: &str) -> Result<String> {
        self.resolver().resolve(path)
    }

    /// Resolve `path`, returning an empty string on failure.
    #[must_use]
    pub fn resolve_path(&self, path: &str) -> String {
        self.resolve(path).unwrap_or_else(|e| {
            log::debug!("Resolution of '{path}' failed: {e}");
            String::new()
        })
    }
}
