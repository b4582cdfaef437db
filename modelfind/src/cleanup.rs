//! Best-effort recursive directory deletion.
//!
//! Deleting a staging tree must remove as much as it can even when single
//! entries resist (held-open files, permission problems). Failures are
//! therefore collected instead of raised: the caller receives a
//! [`CleanupReport`] listing every path that survived and decides whether
//! that matters.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// The outcome of a recursive delete.
///
/// # Examples
///
/// ```no_run
/// use modelfind::cleanup::delete_directory_tree;
/// use std::path::Path;
///
/// let report = delete_directory_tree(Path::new("/tmp/gone-already"));
/// assert!(report.is_complete());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    failed: Vec<PathBuf>,
}

impl CleanupReport {
    /// Whether every entry of the tree was removed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// The paths that could not be removed, in the order they failed.
    #[must_use]
    pub fn failed(&self) -> &[PathBuf] {
        &self.failed
    }

    fn record(&mut self, path: PathBuf, error: &std::io::Error) {
        log::warn!("could not delete {}: {error}", path.display());
        self.failed.push(path);
    }
}

/// Delete a directory and all of its contents, recursively and
/// best-effort.
///
/// Each entry that cannot be removed is logged and recorded in the report;
/// the walk continues with the remaining entries. Symlinked children are
/// removed as links, never followed into. A directory that does not exist
/// is a complete no-op.
///
/// This function never fails. Callers that need a hard guarantee must
/// check [`CleanupReport::is_complete`] or the directory itself
/// afterwards.
///
/// # Examples
///
/// ```
/// use modelfind::cleanup::delete_directory_tree;
/// use std::fs;
///
/// let dir = tempfile::tempdir().unwrap().keep();
/// fs::create_dir_all(dir.join("a/b")).unwrap();
/// fs::write(dir.join("a/b/file.yaml"), "x").unwrap();
///
/// let report = delete_directory_tree(&dir);
/// assert!(report.is_complete());
/// assert!(!dir.exists());
/// ```
#[must_use]
pub fn delete_directory_tree(dir: &Path) -> CleanupReport {
    log::debug!("deleting directory tree {}", dir.display());
    let mut report = CleanupReport::default();
    if fs::symlink_metadata(dir).is_err() {
        // nothing to do
        return report;
    }
    delete_recursively(dir, &mut report);
    report
}

fn delete_recursively(dir: &Path, report: &mut CleanupReport) {
    match fs::read_dir(dir) {
        Ok(listing) => {
            for entry in listing.flatten() {
                let path = entry.path();
                let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
                if is_dir {
                    delete_recursively(&path, report);
                } else if let Err(e) = fs::remove_file(&path) {
                    report.record(path, &e);
                }
            }
        }
        Err(e) => {
            log::warn!("could not list {}: {e}", dir.display());
        }
    }

    if let Err(e) = fs::remove_dir(dir) {
        report.record(dir.to_path_buf(), &e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_delete_full_tree() {
        let root = tempdir().unwrap().keep();
        fs::create_dir_all(root.join("sub/deeper")).unwrap();
        fs::write(root.join("top.yaml"), "x").unwrap();
        fs::write(root.join("sub/mid.json"), "x").unwrap();
        fs::write(root.join("sub/deeper/leaf.txt"), "x").unwrap();

        let report = delete_directory_tree(&root);
        assert!(report.is_complete());
        assert!(!root.exists());
    }

    #[test]
    fn test_report_serializes_failed_paths() {
        let report = CleanupReport::default();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({ "failed": [] }));
    }

    #[test]
    fn test_delete_nonexistent_is_noop() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("never-created");
        let report = delete_directory_tree(&missing);
        assert!(report.is_complete());
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_does_not_follow_symlinks() {
        use std::os::unix::fs::symlink;

        let keep = tempdir().unwrap();
        fs::write(keep.path().join("precious.yaml"), "x").unwrap();

        let root = tempdir().unwrap().keep();
        symlink(keep.path(), root.join("link-to-keep")).unwrap();

        let report = delete_directory_tree(&root);
        assert!(report.is_complete());
        assert!(!root.exists());
        // the link target survives untouched
        assert!(keep.path().join("precious.yaml").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_continues_past_locked_entries() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempdir().unwrap().keep();
        fs::create_dir(root.join("locked")).unwrap();
        fs::write(root.join("locked/stuck.yaml"), "x").unwrap();
        fs::create_dir(root.join("open")).unwrap();
        fs::write(root.join("open/free.yaml"), "x").unwrap();
        fs::write(root.join("loose.json"), "x").unwrap();

        // a read-only directory refuses to have its entries unlinked
        fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o555)).unwrap();

        // running with elevated privileges ignores the permission bits,
        // which makes the partial-failure scenario unobservable
        if fs::remove_file(root.join("locked/stuck.yaml")).is_ok() {
            fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).ok();
            let _ = delete_directory_tree(&root);
            return;
        }

        let report = delete_directory_tree(&root);

        // everything outside the locked directory is gone
        assert!(!root.join("open").exists());
        assert!(!root.join("loose.json").exists());

        // the locked leaf, its directory, and the root all survive and
        // are reported
        assert!(!report.is_complete());
        assert!(report.failed().contains(&root.join("locked/stuck.yaml")));
        assert!(report.failed().contains(&root.join("locked")));
        assert!(report.failed().contains(&root));

        fs::set_permissions(root.join("locked"), fs::Permissions::from_mode(0o755)).unwrap();
        let report = delete_directory_tree(&root);
        assert!(report.is_complete());
    }
}
