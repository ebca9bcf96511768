//! Main entry point for the winpath CLI.
//!
//! This is the command-line interface for the winpath path conversion
//! library. It provides two commands:
//! - `convert`: Normalize paths and render them in another dialect
//! - `classify`: Report which dialect each path is written in

mod cli;
mod commands;
mod error;
mod logging;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    logging::init_logging(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions { config: cli.config };

    // Execute the command
    let result = match cli.command {
        cli::Command::Convert(cmd) => cmd.execute(&global),
        cli::Command::Classify(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
