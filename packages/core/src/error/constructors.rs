use std::io;
use std::path::Path;

use super::types::{InputRole, ManifestError};

/// Creates an `Error` for a failed input read, mapping a missing file to `NotFound`.
pub fn read(role: InputRole, path: &Path, source: io::Error) -> ManifestError {
    if source.kind() == io::ErrorKind::NotFound {
        ManifestError::NotFound {
            role,
            path: path.to_path_buf(),
        }
    } else {
        ManifestError::Read {
            role,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Creates an `Error` for a template that failed to parse.
pub fn parse(path: &Path, source: serde_json::Error) -> ManifestError {
    ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    }
}

/// Creates an `Error` for a failed output write.
pub fn write(path: &Path, source: io::Error) -> ManifestError {
    ManifestError::Write {
        path: path.to_path_buf(),
        source,
    }
}
