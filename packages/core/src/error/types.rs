use std::fmt;
use std::io;
use std::path::PathBuf;

use serde_json::Value;

use crate::config::ConfigurationError;

/// A Result alias where the Err case is [`ManifestError`].
pub type Result<T> = std::result::Result<T, ManifestError>;

/// Which input file an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    /// The certificate-authority PEM file
    Certificate,
    /// The JSON manifest template
    Template,
}

impl InputRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            InputRole::Certificate => "certificate",
            InputRole::Template => "template",
        }
    }
}

impl fmt::Display for InputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of a JSON value, used to report a template whose top level is not an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while composing a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("{role} file not found: {}", path.display())]
    NotFound { role: InputRole, path: PathBuf },

    #[error("failed to read {role} file {}: {source}", path.display())]
    Read {
        role: InputRole,
        path: PathBuf,
        source: io::Error,
    },

    #[error("template {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("template {} must have a JSON object at the top level, found {found}", path.display())]
    Schema { path: PathBuf, found: JsonKind },

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write manifest {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigurationError),
}
