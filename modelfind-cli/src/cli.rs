//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use clap::{Parser, Subcommand};

use crate::commands::{CleanCommand, ResolveCommand, ValidateCommand};

/// Command-line tool for locating and validating deployment model files.
#[derive(Parser)]
#[command(name = "modelfind")]
#[command(version, about = "Locate and validate deployment model files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve the model file in a directory
    Resolve(ResolveCommand),

    /// Validate a file or directory path
    Validate(ValidateCommand),

    /// Delete a directory tree, best-effort
    Clean(CleanCommand),
}
