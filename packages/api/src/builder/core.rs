//! Core `ManifestComposer` structure and setters

use std::path::PathBuf;

use ca_manifest_core::{ComposerConfig, EscapeMode};

/// Fluent builder for a single composition run
///
/// Starts from the default provisioning layout (`owner/ca-cert.pem`,
/// `manifest-template.json`, `manifest.json`); each setter overrides one setting.
#[derive(Debug, Clone, Default)]
pub struct ManifestComposer {
    pub(crate) config: ComposerConfig,
}

impl ManifestComposer {
    /// Start from the default provisioning layout
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    #[must_use]
    pub fn from_config(config: ComposerConfig) -> Self {
        Self { config }
    }

    /// Certificate-authority file whose text is embedded
    #[must_use]
    pub fn ca_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.ca_path = path.into();
        self
    }

    /// JSON template the manifest starts from
    #[must_use]
    pub fn template(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.template_path = path.into();
        self
    }

    /// Destination of the composed manifest
    #[must_use]
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Top-level key that receives the certificate text
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.config.key = key.into();
        self
    }

    /// Spaces per nesting level
    #[must_use]
    pub fn indent(mut self, width: usize) -> Self {
        self.config.indent = width;
        self
    }

    /// Escape every character outside printable ASCII
    #[must_use]
    pub fn ensure_ascii(mut self, enabled: bool) -> Self {
        self.config.escape = if enabled {
            EscapeMode::Ascii
        } else {
            EscapeMode::Utf8
        };
        self
    }

    /// The configuration this builder will run with
    #[must_use]
    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    #[must_use]
    pub fn into_config(self) -> ComposerConfig {
        self.config
    }
}

impl From<ComposerConfig> for ManifestComposer {
    fn from(config: ComposerConfig) -> Self {
        Self::from_config(config)
    }
}
