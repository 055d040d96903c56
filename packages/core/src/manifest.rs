//! Manifest documents and template loading

use std::path::Path;

use serde_json::{Map, Value};

use crate::certificate::{CaBlob, read_text};
use crate::error::{InputRole, JsonKind, ManifestError, Result, constructors};

/// A manifest document: an ordered JSON object
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Set `key` to the blob text.
    ///
    /// An existing key keeps its position and has its value replaced, which is returned.
    /// A new key is appended after all existing ones.
    pub fn embed_ca(&mut self, key: &str, blob: CaBlob) -> Option<Value> {
        self.fields.insert(key.to_string(), blob.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Read and parse a manifest template
///
/// # Errors
///
/// Returns `ManifestError::NotFound` or `ManifestError::Read` if the file cannot be read,
/// and the errors of [`parse_template`] otherwise.
pub fn load_template(path: &Path) -> Result<Manifest> {
    let text = read_text(InputRole::Template, path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read template");
    parse_template(&text, path)
}

/// Parse template text. `path` is only used for error reporting.
///
/// # Errors
///
/// Returns `ManifestError::Parse` for invalid JSON and `ManifestError::Schema`
/// when the top level is not an object.
pub fn parse_template(text: &str, path: &Path) -> Result<Manifest> {
    let value: Value = serde_json::from_str(text).map_err(|e| constructors::parse(path, e))?;
    match value {
        Value::Object(fields) => Ok(Manifest::new(fields)),
        other => Err(ManifestError::Schema {
            path: path.to_path_buf(),
            found: JsonKind::of(&other),
        }),
    }
}
