//! Splitting filenames into base name and extension.
//!
//! The split is driven by the position of the last `.` in the name, with
//! special handling for dotfiles and the bare `.` entry.

/// Split a filename into its base name and extension.
///
/// The extension never includes the separating dot. Rules, decided by the
/// position of the last `.`:
///
/// - no dot: the whole name is the base, extension is empty
/// - the name is exactly `"."`: base is `"."`, extension is empty
/// - leading dot (dotfile): base is empty, extension is the rest
/// - trailing dot: extension is empty
///
/// Empty input yields `None` rather than an error.
///
/// # Examples
///
/// ```
/// use modelfind::filename::split_filename;
///
/// assert_eq!(split_filename("archive.tar.gz"), Some(("archive.tar", "gz")));
/// assert_eq!(split_filename(".bashrc"), Some(("", "bashrc")));
/// assert_eq!(split_filename("."), Some((".", "")));
/// assert_eq!(split_filename("noext"), Some(("noext", "")));
/// assert_eq!(split_filename(""), None);
/// ```
#[must_use]
pub fn split_filename(filename: &str) -> Option<(&str, &str)> {
    if filename.is_empty() {
        return None;
    }

    match filename.rfind('.') {
        None => Some((filename, "")),
        Some(0) => {
            if filename.len() > 1 {
                Some(("", &filename[1..]))
            } else {
                Some((".", ""))
            }
        }
        Some(idx) => Some((&filename[..idx], &filename[idx + 1..])),
    }
}
