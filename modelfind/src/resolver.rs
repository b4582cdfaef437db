//! Model file resolution.
//!
//! A deployment's configuration model lives in a single YAML or JSON file.
//! This module locates that file deterministically, either among the
//! direct children of a directory or within an explicit list of candidate
//! names, and refuses to guess when the choice is ambiguous.
//!
//! The picking rule partitions candidates by [`FileKind`]:
//!
//! 1. A second file of the same kind is an error naming both files.
//! 2. An unambiguous YAML file wins, even when a JSON file is also
//!    present.
//! 3. Otherwise an unambiguous JSON file wins.
//! 4. No candidates at all is not an error; resolution reports absence.
//!
//! # Examples
//!
//! ```no_run
//! use modelfind::resolver::resolve_from_directory;
//! use std::path::Path;
//!
//! match resolve_from_directory(Path::new("/deploy/models"))? {
//!     Some(model) => println!("{} ({})", model.path().display(), model.kind()),
//!     None => println!("no model file present"),
//! }
//! # Ok::<(), modelfind::Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::filename::FileKind;
use crate::path::PathHandle;

/// A resolved model file: the canonical path handle plus its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelFile {
    #[serde(flatten)]
    handle: PathHandle,
    kind: FileKind,
}

impl ModelFile {
    /// Get the canonical path of the model file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.handle.path()
    }

    /// Get the path handle of the model file.
    #[must_use]
    pub fn handle(&self) -> &PathHandle {
        &self.handle
    }

    /// Get the kind of the model file.
    #[must_use]
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Convert into the underlying canonical `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.handle.into_path_buf()
    }
}

/// Resolve the model file among the direct children of a directory.
///
/// Children are considered by filename only; classification never opens a
/// file. Subdirectories are not descended into, though a subdirectory
/// whose *name* classifies as a model file counts as a candidate, exactly
/// like a plain directory listing would suggest.
///
/// Returns `Ok(None)` when the directory holds no model file; absence is
/// not an error.
///
/// # Errors
///
/// Returns an error if:
/// - the directory name is empty or blank (`EmptyDirectoryName`)
/// - the directory does not exist (`PathNotFound`)
/// - the path is not a directory (`NotADirectory`)
/// - the OS denies the listing (`DirectoryNotReadable`, wrapping the OS
///   error)
/// - more than one file of the same kind is present
///   (`AmbiguousModelFile`)
pub fn resolve_from_directory(dir: &Path) -> Result<Option<ModelFile>> {
    log::debug!("resolving model file in {}", dir.display());
    if dir.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(Error::EmptyDirectoryName);
    }

    let handle = PathHandle::probe(dir);
    if !handle.exists() {
        return Err(Error::PathNotFound {
            path: handle.into_path_buf(),
        });
    }
    if !handle.is_directory() {
        return Err(Error::NotADirectory {
            path: handle.into_path_buf(),
        });
    }

    let listing = fs::read_dir(handle.path()).map_err(|e| Error::DirectoryNotReadable {
        path: handle.path().to_path_buf(),
        source: e,
    })?;

    let mut candidates = Vec::new();
    for entry in listing {
        let entry = entry.map_err(|e| Error::DirectoryNotReadable {
            path: handle.path().to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if FileKind::classify(&path).is_some() {
            candidates.push(path);
        }
    }

    match pick_model_file(candidates, handle.path())? {
        Some((path, kind)) => {
            log::debug!("resolved {kind} model file {}", path.display());
            Ok(Some(ModelFile {
                handle: PathHandle::probe(&path),
                kind,
            }))
        }
        None => {
            log::debug!("no model file found in {}", handle.path().display());
            Ok(None)
        }
    }
}

/// Resolve the model file name from an explicit list of candidate names.
///
/// The names are taken as given, in order; none of them is required to
/// exist on disk and nothing is probed. `context_dir` appears only in
/// error messages.
///
/// Returns `Ok(None)` when no name classifies as a model file.
///
/// # Errors
///
/// Returns `AmbiguousModelFile` if more than one name of the same kind is
/// present.
///
/// # Examples
///
/// ```
/// use modelfind::resolver::resolve_from_names;
///
/// let names = ["domain.json", "domain.yaml", "readme.txt"];
/// let resolved = resolve_from_names(&names, "archive/model").unwrap();
/// assert_eq!(resolved.as_deref(), Some("domain.yaml"));
/// ```
pub fn resolve_from_names<S: AsRef<str>>(
    names: &[S],
    context_dir: &str,
) -> Result<Option<String>> {
    log::debug!("resolving model file name among {} candidates", names.len());
    let candidates: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    let picked = pick_model_file(candidates, Path::new(context_dir))?;
    Ok(picked.map(|(name, _)| name.to_string()))
}

/// Apply the shared picking rule to a candidate sequence.
///
/// Keeps the first-seen candidate per kind; a second candidate of a kind
/// already held is ambiguous. YAML outranks JSON.
fn pick_model_file<T: AsRef<Path>>(
    candidates: impl IntoIterator<Item = T>,
    context: &Path,
) -> Result<Option<(T, FileKind)>> {
    let mut yaml: Option<T> = None;
    let mut json: Option<T> = None;

    for candidate in candidates {
        let Some(kind) = FileKind::classify(candidate.as_ref()) else {
            continue;
        };
        let slot = match kind {
            FileKind::Yaml => &mut yaml,
            FileKind::Json => &mut json,
        };
        match slot {
            None => *slot = Some(candidate),
            Some(first) => {
                return Err(Error::AmbiguousModelFile {
                    directory: context.to_path_buf(),
                    kind,
                    first: display_name(first.as_ref()),
                    second: display_name(candidate.as_ref()),
                });
            }
        }
    }

    Ok(yaml
        .map(|p| (p, FileKind::Yaml))
        .or_else(|| json.map(|p| (p, FileKind::Json))))
}

/// The filename to report in error messages, falling back to the whole
/// path when there is no final component.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
