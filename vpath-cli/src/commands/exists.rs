//! Command to check that a virtual path can be opened for reading.

use crate::error::CliError;
use crate::utils::{build_vfs, GlobalOptions};
use clap::Args;
use vpath::fileio;

/// Check whether a virtual path resolves to something that can be opened for reading.
///
/// On Unix a directory can be opened, so it passes the check.
#[derive(Args)]
pub struct ExistsCommand {
    /// Virtual path to check
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Invert the check (fail if the path can be opened)
    #[arg(long)]
    pub not: bool,
}

impl ExistsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let vfs = build_vfs(global)?;
        let exists = fileio::exists(&vfs, &self.path);

        if exists != self.not {
            return Ok(());
        }

        let msg = if self.not {
            format!("Assertion failed: {} exists", self.path)
        } else {
            format!("Assertion failed: {} does not exist", self.path)
        };
        Err(CliError::SemanticFailure(msg))
    }
}
