//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands: tilde
//! expansion for user-supplied paths and default-directory resolution.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Expand a leading tilde (`~` or `~/path`) to the home directory.
///
/// Paths without a leading tilde are returned unchanged. `~user` syntax is
/// not supported.
pub fn expand_tilde(path: &Path) -> Result<PathBuf, CliError> {
    let Some(path_str) = path.to_str() else {
        return Ok(path.to_path_buf());
    };
    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| {
        CliError::InvalidArguments("cannot determine home directory".to_string())
    })?;

    if path_str == "~" {
        Ok(home)
    } else if let Some(rest) = path_str.strip_prefix("~/") {
        Ok(home.join(rest))
    } else {
        Err(CliError::InvalidArguments(
            "~user syntax is not supported; use ~ or ~/path".to_string(),
        ))
    }
}

/// Resolve a directory argument, using the current directory if absent.
pub fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match dir {
        Some(d) => expand_tilde(&d),
        None => Ok(env::current_dir()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_bare() {
        let home = home::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")).unwrap(), home);
    }

    #[test]
    fn test_expand_tilde_with_path() {
        let home = home::home_dir().unwrap();
        assert_eq!(
            expand_tilde(Path::new("~/models")).unwrap(),
            home.join("models")
        );
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        let path = Path::new("/usr/local/models");
        assert_eq!(expand_tilde(path).unwrap(), path);
    }

    #[test]
    fn test_expand_tilde_user_syntax_rejected() {
        assert!(expand_tilde(Path::new("~user/models")).is_err());
    }

    #[test]
    fn test_resolve_dir_defaults_to_cwd() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(resolve_dir(None).unwrap(), cwd);
    }
}
