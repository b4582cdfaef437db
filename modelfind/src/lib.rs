#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # modelfind
//!
//! A library for locating and validating the configuration-model file of a
//! deployment.
//!
//! A deployment directory holds at most one YAML and at most one JSON
//! model file; this library finds the right one deterministically (YAML
//! outranks JSON) and rejects ambiguous layouts with precise errors. It
//! also provides the path validation feeding that resolution and a
//! best-effort recursive cleanup for staging directories.
//!
//! ## Core Types
//!
//! - [`ModelFile`] and [`FileKind`]: a resolved model file and its kind
//! - [`PathHandle`]: a canonical path with probed metadata
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use modelfind::resolver::resolve_from_names;
//!
//! // YAML outranks JSON when both are present
//! let names = ["domain.json", "domain.yaml"];
//! let resolved = resolve_from_names(&names, "models").unwrap();
//! assert_eq!(resolved.as_deref(), Some("domain.yaml"));
//! ```

pub mod cleanup;
pub mod error;
pub mod filename;
pub mod logging;
pub mod path;
pub mod resolver;

// Re-export key types at crate root for convenience
pub use cleanup::{delete_directory_tree, CleanupReport};
pub use error::{Error, Result};
pub use filename::{split_filename, FileKind};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::PathHandle;
pub use resolver::{resolve_from_directory, resolve_from_names, ModelFile};
