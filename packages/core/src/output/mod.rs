//! Manifest output

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, constructors};

pub mod format;

pub use format::{ManifestFormatter, to_pretty_bytes};

/// Create or truncate `path` and write `bytes` to it
///
/// # Errors
///
/// Returns `ManifestError::Write` if the file cannot be created or written,
/// including when its parent directory does not exist.
pub fn write_manifest(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(path).map_err(|e| constructors::write(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| constructors::write(path, e))?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote manifest");
    Ok(())
}
