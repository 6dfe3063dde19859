//! Main entry point for the vpath CLI.
//!
//! It provides commands for working with virtual paths:
//! - `resolve`: Resolve virtual paths
//! - `exists`: Check that a virtual path can be opened for reading
//! - `cat`: Print a file read through a virtual path
//! - `split`: Show how a path is classified and split
//! - `wildcards`: List the effective wildcards

use clap::Parser;
use vpath_cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = vpath::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: failed to install logger: {e}");
    }

    let global = cli.global_options();

    match cli.command.execute(&global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
