//! Command to resolve virtual paths.

use crate::error::CliError;
use crate::utils::{build_vfs, GlobalOptions};
use clap::Args;

/// Resolve one or more virtual paths.
#[derive(Args)]
pub struct ResolveCommand {
    /// Virtual paths to resolve
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Print an empty line instead of failing when a path cannot be resolved
    #[arg(long)]
    pub lenient: bool,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let vfs = build_vfs(global)?;

        for path in &self.paths {
            if self.lenient {
                println!("{}", vfs.resolve_path(path));
            } else {
                println!("{}", vfs.resolve(path)?);
            }
        }

        Ok(())
    }
}
