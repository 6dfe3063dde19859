//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and construction of the resolution
//! context.

use crate::error::CliError;
use clap::ValueEnum;
use std::path::PathBuf;
use vpath::{Config, ConfigBuilder, TieBreak, Vfs, WildcardEntry};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,

    /// Extra `TOKEN=PATH` declarations from the command line.
    pub wildcards: Vec<String>,

    /// Override the tie-break policy.
    pub tie_break: Option<TieBreak>,

    /// Skip configuration file discovery.
    pub no_config: bool,
}

/// Output format for commands that print structured data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

/// Parse repeated `--wildcard TOKEN=PATH` arguments.
///
/// The first `=` separates token from path.
pub fn parse_wildcard_args(args: &[String]) -> Result<Vec<WildcardEntry>, CliError> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(token, path)| WildcardEntry::new(token, path))
                .ok_or_else(|| {
                    CliError::InvalidArguments(format!(
                        "Wildcard '{arg}' must have the form TOKEN=PATH"
                    ))
                })
        })
        .collect()
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if global.no_config {
        builder = builder.skip_files();
    }
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    let wildcards = parse_wildcard_args(&global.wildcards)?;
    let overrides = Config {
        wildcards: (!wildcards.is_empty()).then_some(wildcards),
        tie_break: global.tie_break,
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build the resolution context from the effective configuration.
pub fn build_vfs(global: &GlobalOptions) -> Result<Vfs, CliError> {
    let config = load_configuration(global)?;
    let vfs = Vfs::from_config(&config);
    log::debug!(
        "Loaded {} wildcard(s) with tie-break policy {}",
        vfs.registry().len(),
        vfs.tie_break()
    );
    Ok(vfs)
}
