//! Command to resolve the model file in a directory.

use std::path::PathBuf;

use clap::Args;
use modelfind::resolver::resolve_from_directory;

use crate::commands::OutputFormat;
use crate::error::CliError;
use crate::utils::{resolve_dir, GlobalOptions};

/// Resolve the single model file in a directory.
///
/// Prints the canonical path of the resolved file. With no model file
/// present, prints nothing and exits successfully unless `--required` is
/// given.
#[derive(Args)]
pub struct ResolveCommand {
    /// Directory to search (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Fail when no model file is present
    #[arg(long)]
    pub required: bool,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dir = resolve_dir(self.dir)?;
        let resolved = resolve_from_directory(&dir)?;

        match resolved {
            Some(model) => match self.format {
                OutputFormat::Human => println!("{}", model.path().display()),
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&model)
                        .map_err(|e| CliError::Io(e.into()))?;
                    println!("{json}");
                }
            },
            None => {
                if self.required {
                    return Err(CliError::SemanticFailure(format!(
                        "no model file found in {}",
                        dir.display()
                    )));
                }
                if !global.quiet {
                    eprintln!("no model file found in {}", dir.display());
                }
            }
        }
        Ok(())
    }
}
