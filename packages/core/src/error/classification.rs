use std::path::Path;

use super::types::ManifestError;

/// Coarse failure taxonomy shared by the library and the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An input file does not exist
    NotFound,
    /// The template is not valid JSON
    Parse,
    /// The template is valid JSON but not an object
    Schema,
    /// Reading, serializing or writing failed
    Io,
    /// The configuration was rejected before any file was touched
    Config,
}

impl ManifestError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ManifestError::NotFound { .. } => ErrorKind::NotFound,
            ManifestError::Parse { .. } => ErrorKind::Parse,
            ManifestError::Schema { .. } => ErrorKind::Schema,
            ManifestError::Read { .. }
            | ManifestError::Serialize(_)
            | ManifestError::Write { .. } => ErrorKind::Io,
            ManifestError::Config(_) => ErrorKind::Config,
        }
    }

    /// Returns true if an input file was missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ManifestError::NotFound { .. })
    }

    /// Returns true if the template failed to parse.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, ManifestError::Parse { .. })
    }

    /// Returns true if the template had the wrong top-level shape.
    #[must_use]
    pub fn is_schema(&self) -> bool {
        matches!(self, ManifestError::Schema { .. })
    }

    /// Returns true if the output file could not be written.
    #[must_use]
    pub fn is_write(&self) -> bool {
        matches!(self, ManifestError::Write { .. })
    }

    /// Returns true if the configuration was invalid.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, ManifestError::Config(_))
    }

    /// The file this error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ManifestError::NotFound { path, .. }
            | ManifestError::Read { path, .. }
            | ManifestError::Parse { path, .. }
            | ManifestError::Schema { path, .. }
            | ManifestError::Write { path, .. } => Some(path),
            ManifestError::Serialize(_) | ManifestError::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::PathBuf;

    use super::*;
    use crate::error::{InputRole, JsonKind};

    #[test]
    fn test_kind_mapping() {
        let missing = ManifestError::NotFound {
            role: InputRole::Certificate,
            path: PathBuf::from("owner/ca-cert.pem"),
        };
        assert_eq!(missing.kind(), ErrorKind::NotFound);
        assert!(missing.is_not_found());
        assert_eq!(missing.path(), Some(Path::new("owner/ca-cert.pem")));

        let schema = ManifestError::Schema {
            path: PathBuf::from("t.json"),
            found: JsonKind::Array,
        };
        assert_eq!(schema.kind(), ErrorKind::Schema);
        assert!(schema.is_schema());

        let write = ManifestError::Write {
            path: PathBuf::from("out/manifest.json"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(write.kind(), ErrorKind::Io);
        assert!(write.is_write());
    }

    #[test]
    fn test_display_names_role_and_path() {
        let err = ManifestError::NotFound {
            role: InputRole::Template,
            path: PathBuf::from("manifest-template.json"),
        };
        assert_eq!(
            err.to_string(),
            "template file not found: manifest-template.json"
        );

        let err = ManifestError::Schema {
            path: PathBuf::from("t.json"),
            found: JsonKind::String,
        };
        assert_eq!(
            err.to_string(),
            "template t.json must have a JSON object at the top level, found string"
        );
    }
}
