//! Path canonicalization and validation.
//!
//! This module turns raw name strings into canonical, checked path
//! handles:
//!
//! - [`canonicalize`] resolves symlinks and relative segments, degrading
//!   to the absolute path when the OS cannot resolve the target. It never
//!   fails.
//! - [`types`] defines [`PathHandle`], an immutable snapshot of a
//!   canonical path with existence, type, and permission flags.
//! - [`validate`] checks name strings against the preconditions the
//!   resolver and its callers need (existing file, writable directory, and
//!   so on).
//!
//! # Examples
//!
//! ```no_run
//! use modelfind::path::{canonicalize_or_absolute, validate_writable_file};
//! use std::path::Path;
//!
//! // Canonicalization always produces a usable absolute path
//! let p = canonicalize_or_absolute(Path::new("/no/such/place"));
//! assert!(p.is_absolute());
//!
//! // A file that does not exist yet is fine for writing
//! let handle = validate_writable_file("/tmp/new-model.yaml").unwrap();
//! assert!(!handle.exists());
//! ```

pub mod canonicalize;
mod types;
pub mod validate;

// Re-export key items
pub use canonicalize::{absolutize, canonicalize_or_absolute};
pub use types::PathHandle;
pub use validate::{
    validate_directory_name, validate_existing_directory, validate_existing_file,
    validate_file_name, validate_writable_directory, validate_writable_file,
};
