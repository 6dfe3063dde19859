//! Command to show how a path is classified and split.

use crate::error::CliError;
use crate::utils::{GlobalOptions, OutputFormat};
use clap::Args;
use serde::Serialize;
use vpath::{DirectoryInfo, FileInfo, PathKind};

/// Show the kind and components of a path.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct SplitOutput {
    kind: PathKind,
    parent: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    extension: Option<String>,
    full_path: String,
}

impl SplitOutput {
    fn from_path(path: &str) -> Result<Self, CliError> {
        Ok(match PathKind::classify(path) {
            PathKind::File => {
                let info = FileInfo::parse(path)?;
                Self {
                    kind: PathKind::File,
                    parent: info.parent().to_string(),
                    name: info.base_name().to_string(),
                    extension: Some(info.extension().to_string()),
                    full_path: info.full_path(),
                }
            }
            PathKind::Directory => {
                let info = DirectoryInfo::parse(path);
                Self {
                    kind: PathKind::Directory,
                    parent: info.parent().to_string(),
                    name: info.name().to_string(),
                    extension: None,
                    full_path: info.full_path(),
                }
            }
        })
    }
}

impl SplitCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let output = SplitOutput::from_path(&self.path)?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
            OutputFormat::Text => {
                println!("kind: {}", output.kind);
                println!("parent: {}", output.parent);
                println!("name: {}", output.name);
                if let Some(ref extension) = output.extension {
                    println!("extension: {extension}");
                }
                println!("full_path: {}", output.full_path);
            }
        }

        Ok(())
    }
}
