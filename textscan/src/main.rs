// textscan/src/main.rs
//! TextScan entry point.
//!
//! Parses the CLI, initializes logging, and dispatches to the subcommand
//! implementations in `commands`.

use anyhow::Result;
use clap::Parser;

use textscan::cli::{Cli, Commands};
use textscan::commands;
use textscan::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if cli.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match &cli.command {
        Commands::Extract(cmd) => commands::run_extract(cmd)?,
        Commands::Validate(cmd) => {
            if !commands::run_validate(cmd)? {
                // Invalid input is a normal verdict, not an error, but shell
                // callers still want it reflected in the exit status.
                std::process::exit(1);
            }
        }
        Commands::Replace(cmd) => commands::run_replace(cmd)?,
    }
    Ok(())
}
