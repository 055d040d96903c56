//! Certificate-authority blob loading
//!
//! The certificate file is carried as opaque text. PEM structure is never parsed or checked.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{InputRole, Result, constructors};

/// Verbatim text of a certificate-authority file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaBlob {
    text: String,
}

impl CaBlob {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<CaBlob> for serde_json::Value {
    fn from(blob: CaBlob) -> Self {
        serde_json::Value::String(blob.text)
    }
}

/// Read a certificate file exactly as stored
///
/// # Errors
///
/// Returns `ManifestError::NotFound` if the file does not exist and
/// `ManifestError::Read` if it cannot be read as UTF-8 text.
pub fn read_ca_blob(path: &Path) -> Result<CaBlob> {
    let text = read_text(InputRole::Certificate, path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read certificate");
    Ok(CaBlob::new(text))
}

pub(crate) fn read_text(role: InputRole, path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| constructors::read(role, path, e))?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|e| constructors::read(role, path, e))?;
    Ok(text)
}
