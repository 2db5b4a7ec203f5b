//! Main entry point for the pathmode CLI.
//!
//! Exposes the library's mode detection and path conversion for inspection
//! from a shell:
//! - `mode`: Show the detected execution mode
//! - `convert`: Convert host paths for the active mode
//! - `classify`: Report each path's syntax
//! - `show-config`: Print the effective configuration

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // --debug implies verbose logging so fallback diagnostics are visible
    let _level = pathmode::init_logger(cli.verbose || cli.debug, cli.quiet);

    let global = GlobalOptions {
        data_dir: cli.data_dir,
        mode: cli.mode,
        debug: cli.debug,
    };

    let result = match cli.command {
        cli::Command::Mode(cmd) => cmd.execute(&global),
        cli::Command::Convert(cmd) => cmd.execute(&global),
        cli::Command::Classify(cmd) => cmd.execute(&global),
        cli::Command::Platform(cmd) => cmd.execute(&global),
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
