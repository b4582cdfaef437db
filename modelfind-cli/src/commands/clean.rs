//! Command to delete a directory tree, best-effort.

use std::path::PathBuf;

use clap::Args;
use modelfind::cleanup::delete_directory_tree;

use crate::commands::OutputFormat;
use crate::error::CliError;
use crate::utils::{expand_tilde, GlobalOptions};

/// Delete a directory and everything beneath it.
///
/// Entries that cannot be removed are reported; the command keeps going
/// and removes as much of the tree as possible.
#[derive(Args)]
pub struct CleanCommand {
    /// Directory tree to delete
    #[arg(value_name = "PATH")]
    pub dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl CleanCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dir = expand_tilde(&self.dir)?;
        let report = delete_directory_tree(&dir);

        match self.format {
            OutputFormat::Human => {
                for survivor in report.failed() {
                    eprintln!("could not delete {}", survivor.display());
                }
                if report.is_complete() && global.verbose {
                    eprintln!("deleted {}", dir.display());
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::Io(e.into()))?;
                println!("{json}");
            }
        }

        if report.is_complete() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} entries could not be deleted under {}",
                report.failed().len(),
                dir.display()
            )))
        }
    }
}
