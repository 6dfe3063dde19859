//! Command to list the effective wildcard registry.

use crate::error::CliError;
use crate::utils::{build_vfs, GlobalOptions, OutputFormat};
use clap::Args;
use serde::Serialize;
use vpath::{TieBreak, Vfs, WildcardEntry};

/// List the wildcards the current configuration registers.
#[derive(Args)]
pub struct WildcardsCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct WildcardsOutput<'a> {
    tie_break: TieBreak,
    wildcards: Vec<&'a WildcardEntry>,
}

impl<'a> WildcardsOutput<'a> {
    fn new(vfs: &'a Vfs) -> Self {
        Self {
            tie_break: vfs.tie_break(),
            wildcards: vfs.registry().iter().collect(),
        }
    }
}

impl WildcardsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let vfs = build_vfs(global)?;
        let output = WildcardsOutput::new(&vfs);

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
            OutputFormat::Text => {
                if output.wildcards.is_empty() {
                    if !global.quiet {
                        eprintln!("No wildcards registered");
                    }
                    return Ok(());
                }

                let width = output
                    .wildcards
                    .iter()
                    .map(|e| e.token.len())
                    .max()
                    .unwrap_or(0);
                for entry in &output.wildcards {
                    println!("{:<width$}  {}", entry.token, entry.replacement);
                }
                if global.verbose {
                    eprintln!("tie-break: {}", output.tie_break);
                }
            }
        }

        Ok(())
    }
}
