//! Path canonicalization with a safe fallback.
//!
//! Canonicalization resolves symlinks and relative segments to the real
//! filesystem path. It can fail for paths that do not exist (including
//! targets behind broken symlinks), so this module provides a total
//! variant that degrades to the absolute, lexically-resolved path instead
//! of failing. Callers always get a usable path back.

use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Canonicalize a path, falling back to the absolute path on failure.
///
/// This function never fails. If the OS cannot canonicalize the path (most
/// commonly because it does not exist), the failure is logged and the
/// absolute form of the path is returned with `.` and `..` segments
/// resolved lexically.
///
/// # Examples
///
/// ```
/// use modelfind::path::canonicalize_or_absolute;
/// use std::path::Path;
///
/// let resolved = canonicalize_or_absolute(Path::new("/nonexistent/./x"));
/// assert!(resolved.is_absolute());
/// assert_eq!(resolved, Path::new("/nonexistent/x"));
/// ```
#[must_use]
pub fn canonicalize_or_absolute(path: &Path) -> PathBuf {
    match fs::canonicalize(path) {
        Ok(canonical) => canonical,
        Err(e) => {
            log::warn!(
                "cannot canonicalize {}, falling back to absolute path: {e}",
                path.display()
            );
            absolutize(path)
        }
    }
}

/// Make a path absolute without touching the filesystem.
///
/// Relative paths are joined onto the current working directory, then `.`
/// and `..` segments are resolved lexically. Symlinks are not followed.
/// If the current directory cannot be determined the path is returned
/// lexically resolved but still relative, since this function must not
/// fail.
///
/// # Examples
///
/// ```
/// use modelfind::path::absolutize;
/// use std::path::Path;
///
/// assert_eq!(absolutize(Path::new("/a/b/../c")), Path::new("/a/c"));
/// assert!(absolutize(Path::new("relative")).is_absolute());
/// ```
#[must_use]
pub fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(e) => {
                log::warn!("cannot determine current directory: {e}");
                path.to_path_buf()
            }
        }
    };
    resolve_components(&joined)
}

/// Resolve `.` and `..` segments lexically.
///
/// A `..` at the root is dropped rather than rejected; the callers of this
/// function must always receive a usable path.
fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    let mut has_root = false;
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                // Windows prefix
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                // Clamp at the root instead of escaping it
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                }
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }
    result
}
