//! The canonical path handle.
//!
//! A [`PathHandle`] is an immutable snapshot of a path after
//! canonicalization: the canonical path plus the existence, type, and
//! permission facts that the validators check. A fresh handle is probed on
//! every validation call; nothing is cached between calls.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::path::canonicalize::canonicalize_or_absolute;

/// A canonicalized path with filesystem metadata captured at probe time.
///
/// The flags describe the filesystem at the moment the handle was created
/// and are not refreshed. Handles for non-existent paths are valid; all
/// their permission flags are simply `false`.
///
/// # Examples
///
/// ```
/// use modelfind::path::PathHandle;
/// use std::path::Path;
///
/// let handle = PathHandle::probe(Path::new("/nonexistent"));
/// assert!(handle.path().is_absolute());
/// assert!(!handle.exists());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathHandle {
    path: PathBuf,
    exists: bool,
    is_directory: bool,
    readable: bool,
    writable: bool,
}

impl PathHandle {
    /// Probe a path, producing a canonical handle with fresh metadata.
    ///
    /// Canonicalization never fails; for paths that cannot be resolved the
    /// handle carries the absolute form of the path instead.
    #[must_use]
    pub fn probe(path: &Path) -> Self {
        let canonical = canonicalize_or_absolute(path);
        let metadata = fs::metadata(&canonical).ok();

        let (exists, is_directory) = match &metadata {
            Some(meta) => (true, meta.is_dir()),
            None => (false, false),
        };
        let readable = if is_directory {
            fs::read_dir(&canonical).is_ok()
        } else {
            exists && fs::File::open(&canonical).is_ok()
        };
        // Permission flags come from attempting the access, not from the
        // mode bits: a mode can grant write to an owner the caller is not.
        // Directories cannot be opened for writing, so they keep the
        // metadata check.
        let writable = if is_directory {
            metadata.is_some_and(|meta| !meta.permissions().readonly())
        } else {
            exists && fs::OpenOptions::new().write(true).open(&canonical).is_ok()
        };

        Self {
            path: canonical,
            exists,
            is_directory,
            readable,
            writable,
        }
    }

    /// Get the canonical path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the path existed at probe time.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Whether the path was a directory at probe time.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// Whether the path was readable at probe time.
    ///
    /// Non-existent paths are never readable.
    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.readable
    }

    /// Whether the path was writable at probe time.
    ///
    /// Non-existent paths are never writable; the validators treat absence
    /// separately because a caller may intend to create the file.
    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// Convert into the underlying canonical `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}
