//! Main entry point for the modelfind CLI.
//!
//! This is the command-line interface for the modelfind model-file
//! locator. It provides three commands:
//! - `resolve`: Resolve the model file in a directory
//! - `validate`: Validate a file or directory path
//! - `clean`: Delete a directory tree, best-effort

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = modelfind::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Clean(cmd) => cmd.execute(&global),
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
