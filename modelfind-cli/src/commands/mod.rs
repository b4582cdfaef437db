//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve the model file in a directory
//! - `validate`: Validate a file or directory path
//! - `clean`: Delete a directory tree, best-effort

pub mod clean;
pub mod resolve;
pub mod validate;

use clap::ValueEnum;

pub use clean::CleanCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text on stdout.
    Human,
    /// A JSON object describing the result.
    Json,
}
