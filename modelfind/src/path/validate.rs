//! Name-to-handle validation.
//!
//! Every validator takes a raw name string, canonicalizes it, and checks a
//! set of preconditions against a freshly probed [`PathHandle`]. Failures
//! are reported with one distinct error per violated precondition; see the
//! individual functions for which preconditions apply.

use std::path::Path;

use crate::error::{Error, Result};
use crate::path::types::PathHandle;

/// Validate a name that must refer to a file if it refers to anything.
///
/// The target does not have to exist; this only rejects names that are
/// empty or that resolve to a directory.
///
/// # Errors
///
/// Returns an error if:
/// - the name is empty or blank (`EmptyFileName`)
/// - the canonicalized target is a directory (`IsADirectory`)
///
/// # Examples
///
/// ```no_run
/// use modelfind::path::validate_file_name;
///
/// let handle = validate_file_name("/tmp/not-created-yet.yaml").unwrap();
/// assert!(!handle.exists());
///
/// assert!(validate_file_name("").unwrap_err().is_invalid_argument());
/// ```
pub fn validate_file_name(name: &str) -> Result<PathHandle> {
    log::trace!("validate_file_name: {name:?}");
    if name.trim().is_empty() {
        return Err(Error::EmptyFileName);
    }

    let handle = PathHandle::probe(Path::new(name));
    if handle.is_directory() {
        return Err(Error::IsADirectory {
            path: handle.into_path_buf(),
        });
    }
    log::trace!("validate_file_name resolved {}", handle.path().display());
    Ok(handle)
}

/// Validate a name that must refer to an existing file.
///
/// # Errors
///
/// As [`validate_file_name`], and additionally `PathNotFound` if the
/// target does not exist.
///
/// # Examples
///
/// ```
/// use modelfind::path::validate_existing_file;
///
/// let err = validate_existing_file("/nonexistent/model.yaml").unwrap_err();
/// assert!(err.is_not_found());
/// ```
pub fn validate_existing_file(name: &str) -> Result<PathHandle> {
    log::trace!("validate_existing_file: {name:?}");
    let handle = validate_file_name(name)?;
    if !handle.exists() {
        return Err(Error::PathNotFound {
            path: handle.into_path_buf(),
        });
    }
    Ok(handle)
}

/// Validate a name for a file the caller intends to write.
///
/// Non-existent targets are accepted, since the caller may be about to
/// create the file. Existing targets must be writable.
///
/// # Errors
///
/// As [`validate_file_name`], and additionally `NotWritable` if the
/// target exists but is not writable.
pub fn validate_writable_file(name: &str) -> Result<PathHandle> {
    log::trace!("validate_writable_file: {name:?}");
    let handle = validate_file_name(name)?;
    if handle.exists() && !handle.is_writable() {
        return Err(Error::NotWritable {
            path: handle.into_path_buf(),
        });
    }
    Ok(handle)
}

/// Validate a name that must refer to a directory if it refers to anything.
///
/// Non-existence is tolerated; only names resolving to an existing
/// non-directory are rejected.
///
/// # Errors
///
/// Returns an error if:
/// - the name is empty or blank (`EmptyDirectoryName`)
/// - the canonicalized target exists and is not a directory
///   (`NotADirectory`)
///
/// # Examples
///
/// ```no_run
/// use modelfind::path::validate_directory_name;
///
/// let handle = validate_directory_name("/tmp/not-created-yet").unwrap();
/// assert!(!handle.exists());
/// ```
pub fn validate_directory_name(name: &str) -> Result<PathHandle> {
    log::trace!("validate_directory_name: {name:?}");
    if name.trim().is_empty() {
        return Err(Error::EmptyDirectoryName);
    }

    let handle = PathHandle::probe(Path::new(name));
    if handle.exists() && !handle.is_directory() {
        return Err(Error::NotADirectory {
            path: handle.into_path_buf(),
        });
    }
    log::trace!(
        "validate_directory_name resolved {}",
        handle.path().display()
    );
    Ok(handle)
}

/// Validate a name that must refer to an existing directory.
///
/// # Errors
///
/// As [`validate_directory_name`], and additionally `PathNotFound` if the
/// target does not exist.
pub fn validate_existing_directory(name: &str) -> Result<PathHandle> {
    log::trace!("validate_existing_directory: {name:?}");
    let handle = validate_directory_name(name)?;
    if !handle.exists() {
        return Err(Error::PathNotFound {
            path: handle.into_path_buf(),
        });
    }
    Ok(handle)
}

/// Validate a name for a directory the caller intends to write into.
///
/// Non-existent targets are accepted; existing targets must be writable.
///
/// # Errors
///
/// As [`validate_directory_name`], and additionally `NotWritable` if the
/// target exists but is not writable.
pub fn validate_writable_directory(name: &str) -> Result<PathHandle> {
    log::trace!("validate_writable_directory: {name:?}");
    let handle = validate_directory_name(name)?;
    if handle.exists() && !handle.is_writable() {
        return Err(Error::NotWritable {
            path: handle.into_path_buf(),
        });
    }
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_file_name_rejects_empty() {
        assert!(matches!(validate_file_name(""), Err(Error::EmptyFileName)));
        assert!(matches!(
            validate_file_name("   "),
            Err(Error::EmptyFileName)
        ));
    }

    #[test]
    fn test_validate_file_name_rejects_directory() {
        let dir = tempdir().unwrap();
        let result = validate_file_name(dir.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::IsADirectory { .. })));
    }

    #[test]
    fn test_validate_file_name_accepts_nonexistent() {
        let dir = tempdir().unwrap();
        let name = dir.path().join("future.yaml");
        let handle = validate_file_name(name.to_str().unwrap()).unwrap();
        assert!(!handle.exists());
        assert!(handle.path().is_absolute());
    }

    #[test]
    fn test_validate_existing_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("model.yaml");
        fs::write(&file, "domain: {}").unwrap();

        let handle = validate_existing_file(file.to_str().unwrap()).unwrap();
        assert!(handle.exists());

        let missing = dir.path().join("missing.yaml");
        let err = validate_existing_file(missing.to_str().unwrap()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validate_writable_file_accepts_creation_intent() {
        let dir = tempdir().unwrap();
        let name = dir.path().join("to-create.json");
        let handle = validate_writable_file(name.to_str().unwrap()).unwrap();
        assert!(!handle.exists());
    }

    #[test]
    fn test_validate_writable_file_rejects_read_only() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("frozen.yaml");
        fs::write(&file, "x").unwrap();

        let mut perms = fs::metadata(&file).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&file, perms).unwrap();

        // running with elevated privileges ignores the permission bits,
        // which makes the read-only state unobservable
        if fs::OpenOptions::new().write(true).open(&file).is_ok() {
            return;
        }

        let result = validate_writable_file(file.to_str().unwrap());
        assert!(matches!(result, Err(Error::NotWritable { .. })));

        let mut perms = fs::metadata(&file).unwrap().permissions();
        #[allow(clippy::permissions_set_readonly_false)]
        perms.set_readonly(false);
        fs::set_permissions(&file, perms).unwrap();
    }

    #[test]
    fn test_validate_directory_name_rejects_empty() {
        assert!(matches!(
            validate_directory_name(""),
            Err(Error::EmptyDirectoryName)
        ));
    }

    #[test]
    fn test_validate_directory_name_rejects_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a-file");
        fs::write(&file, "x").unwrap();

        let result = validate_directory_name(file.to_str().unwrap());
        assert!(matches!(result, Err(Error::NotADirectory { .. })));
    }

    #[test]
    fn test_validate_directory_name_tolerates_nonexistent() {
        let dir = tempdir().unwrap();
        let name = dir.path().join("future-dir");
        let handle = validate_directory_name(name.to_str().unwrap()).unwrap();
        assert!(!handle.exists());
    }

    #[test]
    fn test_validate_existing_directory() {
        let dir = tempdir().unwrap();
        let handle = validate_existing_directory(dir.path().to_str().unwrap()).unwrap();
        assert!(handle.exists());
        assert!(handle.is_directory());

        let missing = dir.path().join("missing");
        let err = validate_existing_directory(missing.to_str().unwrap()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validate_writable_directory_accepts_nonexistent() {
        let dir = tempdir().unwrap();
        let name = dir.path().join("future-dir");
        let handle = validate_writable_directory(name.to_str().unwrap()).unwrap();
        assert!(!handle.exists());
    }

    #[test]
    fn test_validators_return_canonical_paths() {
        let dir = tempdir().unwrap();
        let dotted = dir.path().join(".").join("model.yaml");
        fs::write(dir.path().join("model.yaml"), "x").unwrap();

        let handle = validate_existing_file(dotted.to_str().unwrap()).unwrap();
        assert_eq!(
            handle.path(),
            fs::canonicalize(dir.path().join("model.yaml")).unwrap()
        );
    }
}
