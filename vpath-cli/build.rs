//! Build script for vpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("vpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve wildcard-prefixed virtual paths")
        .long_about(
            "Command-line tool for resolving virtual paths such as $DATA/config.ini into real filesystem paths",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("VPATH_CONFIG_DIR"),
        )
        .arg(
            Arg::new("wildcard")
                .long("wildcard")
                .help("Register a wildcard (repeatable)")
                .value_name("TOKEN=PATH")
                .global(true)
                .action(clap::ArgAction::Append),
        )
        .arg(
            Arg::new("tie-break")
                .long("tie-break")
                .help("How to choose between several matching tokens")
                .value_name("POLICY")
                .global(true),
        )
        .arg(
            Arg::new("no-config")
                .long("no-config")
                .help("Do not read configuration files")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve virtual paths")
                .long_about("Print the real path for each virtual path, one per line"),
            Command::new("exists")
                .about("Check that a virtual path can be opened for reading")
                .long_about("Exit with status 0 if the resolved path can be opened for reading and 1 otherwise"),
            Command::new("cat")
                .about("Print a file read through a virtual path")
                .long_about("Write the contents of the resolved file to standard output"),
            Command::new("split")
                .about("Show how a path is classified and split")
                .long_about("Display the kind, parent, name and extension of a path"),
            Command::new("wildcards")
                .about("List the effective wildcards")
                .long_about("Display every wildcard registered by the merged configuration"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a vpath configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR")
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("vpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
