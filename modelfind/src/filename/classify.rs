//! Filename classification by extension.
//!
//! Classification is a pure string operation on the final path component:
//! no file is ever opened and no metadata is read. Matching is
//! case-insensitive using ASCII lowering, so the result does not depend on
//! the process locale.

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// The recognized model file kinds.
///
/// A model file is recognized purely by its extension; files of any other
/// extension are not model files and have no kind.
///
/// # Examples
///
/// ```
/// use modelfind::filename::FileKind;
/// use std::path::Path;
///
/// assert_eq!(FileKind::classify(Path::new("domain.yaml")), Some(FileKind::Yaml));
/// assert_eq!(FileKind::classify(Path::new("domain.json")), Some(FileKind::Json));
/// assert_eq!(FileKind::classify(Path::new("domain.txt")), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A YAML model file (`.yaml` or `.yml`).
    Yaml,
    /// A JSON model file (`.json`).
    Json,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "YAML"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

impl FileKind {
    /// Classify a path by the extension of its final component.
    ///
    /// Returns `None` for paths that are not model files, including paths
    /// with no final component (such as `/` or `..`).
    ///
    /// # Examples
    ///
    /// ```
    /// use modelfind::filename::FileKind;
    /// use std::path::Path;
    ///
    /// assert_eq!(FileKind::classify(Path::new("/models/Domain.YML")), Some(FileKind::Yaml));
    /// assert_eq!(FileKind::classify(Path::new("model.zip")), None);
    /// ```
    #[must_use]
    pub fn classify(path: &Path) -> Option<Self> {
        let name = lowered_file_name(path)?;
        if name.ends_with(".yaml") || name.ends_with(".yml") {
            Some(Self::Yaml)
        } else if name.ends_with(".json") {
            Some(Self::Json)
        } else {
            None
        }
    }
}

/// Whether the path has a YAML file extension (`.yaml` or `.yml`).
///
/// # Examples
///
/// ```
/// use modelfind::filename::is_yaml_file;
/// use std::path::Path;
///
/// assert!(is_yaml_file(Path::new("model.yaml")));
/// assert!(is_yaml_file(Path::new("MODEL.YML")));
/// assert!(!is_yaml_file(Path::new("model.json")));
/// ```
#[must_use]
pub fn is_yaml_file(path: &Path) -> bool {
    FileKind::classify(path) == Some(FileKind::Yaml)
}

/// Whether the path has a JSON file extension (`.json`).
///
/// # Examples
///
/// ```
/// use modelfind::filename::is_json_file;
/// use std::path::Path;
///
/// assert!(is_json_file(Path::new("model.json")));
/// assert!(!is_json_file(Path::new("model.yaml")));
/// ```
#[must_use]
pub fn is_json_file(path: &Path) -> bool {
    FileKind::classify(path) == Some(FileKind::Json)
}

/// Whether the path has an archive file extension (`.zip`).
///
/// # Examples
///
/// ```
/// use modelfind::filename::is_archive_file;
/// use std::path::Path;
///
/// assert!(is_archive_file(Path::new("bundle.zip")));
/// assert!(!is_archive_file(Path::new("bundle.tar.gz")));
/// ```
#[must_use]
pub fn is_archive_file(path: &Path) -> bool {
    matches!(lowered_file_name(path), Some(name) if name.ends_with(".zip"))
}

fn lowered_file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_ascii_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_yaml_extensions() {
        assert_eq!(FileKind::classify(Path::new("a.yaml")), Some(FileKind::Yaml));
        assert_eq!(FileKind::classify(Path::new("a.yml")), Some(FileKind::Yaml));
    }

    #[test]
    fn test_classify_json_extension() {
        assert_eq!(FileKind::classify(Path::new("a.json")), Some(FileKind::Json));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(FileKind::classify(Path::new("A.YAML")), Some(FileKind::Yaml));
        assert_eq!(FileKind::classify(Path::new("A.Yml")), Some(FileKind::Yaml));
        assert_eq!(FileKind::classify(Path::new("A.JSON")), Some(FileKind::Json));
    }

    #[test]
    fn test_classify_uses_final_component_only() {
        assert_eq!(
            FileKind::classify(Path::new("/some.json/model.yaml")),
            Some(FileKind::Yaml)
        );
    }

    #[test]
    fn test_classify_other_extensions() {
        assert_eq!(FileKind::classify(Path::new("a.txt")), None);
        assert_eq!(FileKind::classify(Path::new("a.zip")), None);
        assert_eq!(FileKind::classify(Path::new("yaml")), None);
        assert_eq!(FileKind::classify(Path::new("/")), None);
    }

    #[test]
    fn test_archive_predicate() {
        assert!(is_archive_file(Path::new("archive.zip")));
        assert!(is_archive_file(Path::new("ARCHIVE.ZIP")));
        assert!(!is_archive_file(Path::new("archive.jar")));
    }

    #[test]
    fn test_predicates_are_disjoint() {
        let yaml = Path::new("m.yaml");
        assert!(is_yaml_file(yaml));
        assert!(!is_json_file(yaml));
        assert!(!is_archive_file(yaml));
    }

    #[test]
    fn test_file_kind_display() {
        assert_eq!(format!("{}", FileKind::Yaml), "YAML");
        assert_eq!(format!("{}", FileKind::Json), "JSON");
    }

    #[test]
    fn test_file_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FileKind::Yaml).unwrap(), "\"yaml\"");
        assert_eq!(serde_json::to_string(&FileKind::Json).unwrap(), "\"json\"");
    }
}
