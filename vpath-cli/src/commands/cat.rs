//! Command to print a file read through a virtual path.

use crate::error::CliError;
use crate::utils::{build_vfs, GlobalOptions};
use clap::Args;
use std::io::{self, Write};
use vpath::fileio;

/// Print the contents of a file named by a virtual path.
#[derive(Args)]
pub struct CatCommand {
    /// Virtual path of the file
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Copy raw bytes instead of requiring UTF-8 text
    #[arg(long)]
    pub binary: bool,
}

impl CatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let vfs = build_vfs(global)?;

        let bytes = if self.binary {
            fileio::read_binary(&vfs, &self.path)?
        } else {
            fileio::read_text(&vfs, &self.path)?.into_bytes()
        };

        let mut stdout = io::stdout().lock();
        stdout.write_all(&bytes)?;
        stdout.flush()?;
        Ok(())
    }
}
