//! Command to validate a file or directory path.

use std::path::PathBuf;

use clap::Args;
use modelfind::filename::is_archive_file;
use modelfind::path::{
    validate_directory_name, validate_existing_directory, validate_existing_file,
    validate_file_name, validate_writable_directory, validate_writable_file, PathHandle,
};

use crate::error::CliError;
use crate::utils::{expand_tilde, GlobalOptions};

/// Validate a path and print its canonical form.
///
/// By default the path is validated as a file name that may not exist
/// yet; `--directory`, `--existing`, and `--writable` tighten the checks.
#[derive(Args)]
pub struct ValidateCommand {
    /// Path to validate
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Validate as a directory instead of a file
    #[arg(long)]
    pub directory: bool,

    /// Require the target to exist
    #[arg(long)]
    pub existing: bool,

    /// Require the target to be writable if it exists
    #[arg(long)]
    pub writable: bool,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let expanded = expand_tilde(&self.path)?;
        let name = expanded.to_str().ok_or_else(|| {
            CliError::InvalidArguments("path is not valid UTF-8".to_string())
        })?;

        // archives hold models, they are not models themselves
        if !self.directory && is_archive_file(&expanded) {
            return Err(CliError::InvalidArguments(format!(
                "{} is an archive, not a model file",
                expanded.display()
            )));
        }

        let handle = self.run_validators(name)?;
        println!("{}", handle.path().display());
        Ok(())
    }

    fn run_validators(&self, name: &str) -> Result<PathHandle, CliError> {
        let mut handle = if self.directory {
            validate_directory_name(name)?
        } else {
            validate_file_name(name)?
        };
        if self.existing {
            handle = if self.directory {
                validate_existing_directory(name)?
            } else {
                validate_existing_file(name)?
            };
        }
        if self.writable {
            handle = if self.directory {
                validate_writable_directory(name)?
            } else {
                validate_writable_file(name)?
            };
        }
        Ok(handle)
    }
}
