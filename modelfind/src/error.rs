//! Error types for the modelfind library.
//!
//! This module provides the error hierarchy for all operations in the
//! modelfind library, using `thiserror` for ergonomic error handling.
//!
//! Errors fall into two categories: invalid arguments (empty names, wrong
//! path types, missing paths, missing permissions) and model-file
//! ambiguity. The category of an error can be checked with
//! [`Error::is_invalid_argument`] and [`Error::is_ambiguous`].

use std::path::PathBuf;

use thiserror::Error;

use crate::filename::FileKind;

/// Result type alias for operations that may fail with a modelfind error.
///
/// # Examples
///
/// ```
/// use modelfind::{Error, Result};
///
/// fn example_operation() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the modelfind library.
///
/// This enum encompasses all possible error conditions that can occur
/// while validating paths and resolving model files.
#[derive(Debug, Error)]
pub enum Error {
    /// An empty or blank file name was provided.
    #[error("file name must not be empty")]
    EmptyFileName,

    /// An empty or blank directory name was provided.
    #[error("directory name must not be empty")]
    EmptyDirectoryName,

    /// A file was required but the path refers to a directory.
    #[error("expected a file but {} is a directory", path.display())]
    IsADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A directory was required but the path refers to something else.
    #[error("{} is not a directory", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A path was required to exist but does not.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A path exists but is not writable.
    #[error("path is not writable: {}", path.display())]
    NotWritable {
        /// The path that is not writable.
        path: PathBuf,
    },

    /// A directory listing was denied by the operating system.
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryNotReadable {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// More than one model file of the same kind was found.
    #[error(
        "multiple {kind} model files found in {}: {second} conflicts with {first}",
        directory.display()
    )]
    AmbiguousModelFile {
        /// The directory (or name-list context) that was searched.
        directory: PathBuf,
        /// The kind of model file that appeared more than once.
        kind: FileKind,
        /// The first matching file name encountered.
        first: String,
        /// The conflicting file name encountered later.
        second: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this error is an invalid-argument failure.
    ///
    /// Invalid-argument failures cover empty names, wrong path types,
    /// missing paths, and missing permissions.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelfind::Error;
    ///
    /// assert!(Error::EmptyFileName.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptyFileName
                | Self::EmptyDirectoryName
                | Self::IsADirectory { .. }
                | Self::NotADirectory { .. }
                | Self::PathNotFound { .. }
                | Self::NotWritable { .. }
                | Self::DirectoryNotReadable { .. }
        )
    }

    /// Check if this error reports an ambiguous model file.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelfind::Error;
    ///
    /// assert!(!Error::EmptyFileName.is_ambiguous());
    /// ```
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::AmbiguousModelFile { .. })
    }

    /// Check if this error indicates a path that does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use modelfind::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }
}
