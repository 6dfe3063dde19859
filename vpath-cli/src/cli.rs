//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CatCommand, CompletionsCommand, ExistsCommand, ResolveCommand, SplitCommand, ValidateCommand,
    WildcardsCommand,
};
use crate::utils::GlobalOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vpath::TieBreak;

/// Command-line tool for resolving wildcard-prefixed virtual paths.
#[derive(Parser)]
#[command(name = "vpath")]
#[command(version, about = "Resolve wildcard-prefixed virtual paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "VPATH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Register a wildcard (repeatable)
    #[arg(long = "wildcard", value_name = "TOKEN=PATH", global = true)]
    pub wildcards: Vec<String>,

    /// How to choose between several matching tokens
    #[arg(long, value_name = "POLICY", global = true)]
    pub tie_break: Option<TieBreak>,

    /// Do not read configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Split out the options every command shares.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            config_dir: self.config_dir.clone(),
            wildcards: self.wildcards.clone(),
            tie_break: self.tie_break,
            no_config: self.no_config,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve virtual paths
    Resolve(ResolveCommand),

    /// Check that a virtual path can be opened for reading
    Exists(ExistsCommand),

    /// Print a file read through a virtual path
    Cat(CatCommand),

    /// Show how a path is classified and split
    Split(SplitCommand),

    /// List the effective wildcards
    Wildcards(WildcardsCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

impl Command {
    /// Run the selected command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), crate::error::CliError> {
        match self {
            Command::Resolve(cmd) => cmd.execute(global),
            Command::Exists(cmd) => cmd.execute(global),
            Command::Cat(cmd) => cmd.execute(global),
            Command::Split(cmd) => cmd.execute(global),
            Command::Wildcards(cmd) => cmd.execute(global),
            Command::Validate(cmd) => cmd.execute(global),
            Command::Completions(cmd) => cmd.execute(global),
        }
    }
}
