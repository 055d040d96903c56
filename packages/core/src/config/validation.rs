//! Configuration Validation
//!
//! Error types, the validation trait, and the common checks applied to composer settings.

use std::io;
use std::path::{Path, PathBuf};

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),

    #[error("Configuration conflict: {0}")]
    Conflict(String),

    #[error("Cannot read configuration file {}: {source}", path.display())]
    File { path: PathBuf, source: io::Error },

    #[error("Malformed configuration file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Configuration validation trait
///
/// A failed check is reported as `ManifestError::Config` before any file is read,
/// in addition to the not-found, parse, schema and I/O failures of the pipeline.
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidPath` - if a required path is empty
    /// - `InvalidParameter` - if parameters are outside valid ranges
    /// - `Conflict` - if configuration settings conflict with each other
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate that a path is set
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidPath` if the path is empty.
    pub fn validate_path(path: &Path, name: &str) -> ConfigResult<()> {
        if path.as_os_str().is_empty() {
            return Err(ConfigurationError::InvalidPath(format!(
                "{name} cannot be empty"
            )));
        }

        Ok(())
    }

    /// Validate that a manifest key is usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the key is empty.
    pub fn validate_key(key: &str, name: &str) -> ConfigResult<()> {
        if key.is_empty() {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} cannot be empty"
            )));
        }

        Ok(())
    }

    /// Validate numeric range
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the value is outside
    /// the specified range [min, max] (inclusive).
    pub fn validate_range<T>(value: T, min: T, max: T, name: &str) -> ConfigResult<()>
    where
        T: PartialOrd + std::fmt::Display + Copy,
    {
        if value < min || value > max {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} must be between {min} and {max}, got {value}"
            )));
        }

        Ok(())
    }

    /// Validate that the output does not overwrite an input that must survive
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Conflict` if both paths are identical.
    pub fn validate_distinct(output: &Path, input: &Path, name: &str) -> ConfigResult<()> {
        if output == input {
            return Err(ConfigurationError::Conflict(format!(
                "output path {} is the same as the {name}",
                output.display()
            )));
        }

        Ok(())
    }
}

/// Common configuration defaults
pub struct ConfigDefaults;

impl ConfigDefaults {
    pub const DEFAULT_CA_PATH: &'static str = "owner/ca-cert.pem";
    pub const DEFAULT_TEMPLATE_PATH: &'static str = "manifest-template.json";
    pub const DEFAULT_OUTPUT_PATH: &'static str = "manifest.json";
    pub const DEFAULT_KEY: &'static str = "ca";
    pub const DEFAULT_INDENT: usize = 4;
    pub const MAX_INDENT: usize = 16;
}
