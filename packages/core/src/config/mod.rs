//! Composer Configuration
//!
//! Paths and output settings for a single composition run. Defaults reproduce the
//! fixed layout of the provisioning workflow; every field can be overridden in code,
//! from a JSON configuration file, or from the command line.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub mod validation;

pub use validation::{ConfigDefaults, ConfigResult, ConfigValidator, ConfigurationError, Validator};

/// How characters outside printable ASCII are written in the output
///
/// `Utf8` is the default even though the provisioning script escaped to ASCII.
/// Both produce equal JSON; use `Ascii` for byte-identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
    /// Write non-ASCII characters as UTF-8
    #[default]
    Utf8,
    /// Write every non-printable-ASCII character as a `\uXXXX` escape
    Ascii,
}

/// Runtime composer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerConfig {
    pub ca_path: PathBuf,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub key: String,
    pub indent: usize,
    pub escape: EscapeMode,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            ca_path: PathBuf::from(ConfigDefaults::DEFAULT_CA_PATH),
            template_path: PathBuf::from(ConfigDefaults::DEFAULT_TEMPLATE_PATH),
            output_path: PathBuf::from(ConfigDefaults::DEFAULT_OUTPUT_PATH),
            key: ConfigDefaults::DEFAULT_KEY.to_string(),
            indent: ConfigDefaults::DEFAULT_INDENT,
            escape: EscapeMode::Utf8,
        }
    }
}

/// Fields a configuration file may set. Absent fields keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    ca: Option<PathBuf>,
    template: Option<PathBuf>,
    output: Option<PathBuf>,
    key: Option<String>,
    indent: Option<usize>,
    escape: Option<EscapeMode>,
}

impl ComposerConfig {
    /// Create a configuration for explicit paths, other settings at their defaults
    #[must_use]
    pub fn new(
        ca_path: impl Into<PathBuf>,
        template_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            ca_path: ca_path.into(),
            template_path: template_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// Read a JSON configuration file, overlaying the fields it sets onto `defaults`
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::File` if the file cannot be read and
    /// `ConfigurationError::Malformed` if it is not a valid configuration object.
    pub fn from_file(path: &Path, defaults: Self) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigurationError::File {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile =
            serde_json::from_str(&raw).map_err(|source| ConfigurationError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "loaded composer configuration");
        Ok(defaults.overlay(file))
    }

    fn overlay(mut self, file: ConfigFile) -> Self {
        if let Some(ca) = file.ca {
            self.ca_path = ca;
        }
        if let Some(template) = file.template {
            self.template_path = template;
        }
        if let Some(output) = file.output {
            self.output_path = output;
        }
        if let Some(key) = file.key {
            self.key = key;
        }
        if let Some(indent) = file.indent {
            self.indent = indent;
        }
        if let Some(escape) = file.escape {
            self.escape = escape;
        }
        self
    }

    #[must_use]
    pub fn with_ca_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_path = path.into();
        self
    }

    #[must_use]
    pub fn with_template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = path.into();
        self
    }

    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_escape(mut self, escape: EscapeMode) -> Self {
        self.escape = escape;
        self
    }
}

/// Rejects empty paths, an empty key, an indent above `MAX_INDENT`, and an output
/// path equal to the certificate path.
///
/// These surface as `ManifestError::Config`, a kind the provisioning script never
/// produced: it would have overwritten the certificate with the manifest.
impl Validator for ComposerConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_path(&self.ca_path, "certificate path")?;
        ConfigValidator::validate_path(&self.template_path, "template path")?;
        ConfigValidator::validate_path(&self.output_path, "output path")?;
        ConfigValidator::validate_key(&self.key, "manifest key")?;
        ConfigValidator::validate_range(self.indent, 0, ConfigDefaults::MAX_INDENT, "indent")?;
        ConfigValidator::validate_distinct(&self.output_path, &self.ca_path, "certificate path")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults_match_provisioning_layout() {
        let config = ComposerConfig::default();
        assert_eq!(config.ca_path, Path::new("owner/ca-cert.pem"));
        assert_eq!(config.template_path, Path::new("manifest-template.json"));
        assert_eq!(config.output_path, Path::new("manifest.json"));
        assert_eq!(config.key, "ca");
        assert_eq!(config.indent, 4);
        assert_eq!(config.escape, EscapeMode::Utf8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_settings() {
        let config = ComposerConfig::default().with_key("");
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidParameter(_))
        ));

        let config = ComposerConfig::default().with_indent(32);
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidParameter(_))
        ));

        let config = ComposerConfig::default().with_output_path("owner/ca-cert.pem");
        assert!(matches!(config.validate(), Err(ConfigurationError::Conflict(_))));

        let config = ComposerConfig::default().with_template_path("");
        assert!(matches!(config.validate(), Err(ConfigurationError::InvalidPath(_))));
    }

    #[test]
    fn test_from_file_overlays_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"output": "out/manifest.json", "escape": "ascii"}}"#).unwrap();

        let config = ComposerConfig::from_file(file.path(), ComposerConfig::default()).unwrap();
        assert_eq!(config.output_path, Path::new("out/manifest.json"));
        assert_eq!(config.escape, EscapeMode::Ascii);
        assert_eq!(config.ca_path, Path::new("owner/ca-cert.pem"));
        assert_eq!(config.indent, 4);
    }

    #[test]
    fn test_from_file_keeps_caller_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"indent": 2}}"#).unwrap();

        let defaults = ComposerConfig::new("a.pem", "b.json", "c.json");
        let config = ComposerConfig::from_file(file.path(), defaults).unwrap();
        assert_eq!(config.ca_path, Path::new("a.pem"));
        assert_eq!(config.template_path, Path::new("b.json"));
        assert_eq!(config.indent, 2);
    }

    #[test]
    fn test_from_file_rejects_unknown_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"certificate": "x.pem"}}"#).unwrap();

        let err = ComposerConfig::from_file(file.path(), ComposerConfig::default()).unwrap_err();
        assert!(matches!(err, ConfigurationError::Malformed { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ComposerConfig::from_file(&dir.path().join("nope.json"), ComposerConfig::default())
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::File { .. }));
    }
}
