//! Pure filename inspection.
//!
//! This module classifies and splits filenames without touching the
//! filesystem:
//!
//! - [`classify`] recognizes model files (YAML, JSON) and archives by
//!   extension, case-insensitively.
//! - [`split`] separates a filename into base name and extension, handling
//!   dotfiles and other edge cases.
//!
//! # Examples
//!
//! ```
//! use modelfind::filename::{split_filename, FileKind};
//! use std::path::Path;
//!
//! assert_eq!(FileKind::classify(Path::new("domain.yml")), Some(FileKind::Yaml));
//! assert_eq!(split_filename("domain.yml"), Some(("domain", "yml")));
//! ```

pub mod classify;
pub mod split;

// Re-export key items
pub use classify::{is_archive_file, is_json_file, is_yaml_file, FileKind};
pub use split::split_filename;
