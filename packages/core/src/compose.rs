//! The composition pipeline: read certificate, read and merge template, write manifest.
//!
//! Both inputs are read and the manifest is fully serialized before the output path is
//! opened, so a failing input never creates or modifies the output file.

use std::path::PathBuf;

use crate::certificate::read_ca_blob;
use crate::config::{ComposerConfig, Validator};
use crate::error::Result;
use crate::manifest::{Manifest, load_template};
use crate::output::{to_pretty_bytes, write_manifest};

/// A serialized manifest that has not been written anywhere yet
#[derive(Debug, Clone)]
pub struct RenderedManifest {
    pub manifest: Manifest,
    pub bytes: Vec<u8>,
    /// Whether the template already held the key that was set
    pub replaced_existing: bool,
}

impl RenderedManifest {
    /// The serialized document as text
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Serialization only ever produces UTF-8.
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }
}

/// Result of a completed composition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOutcome {
    pub output_path: PathBuf,
    pub bytes_written: usize,
    pub key_count: usize,
    pub replaced_existing: bool,
}

/// Build the manifest in memory without touching the output path
///
/// # Errors
///
/// Returns `ManifestError::Config` for an invalid configuration and any error from
/// reading the certificate, loading the template, or serializing the result.
pub fn render(config: &ComposerConfig) -> Result<RenderedManifest> {
    config.validate()?;

    let blob = read_ca_blob(&config.ca_path)?;
    let mut manifest = load_template(&config.template_path)?;
    let replaced_existing = manifest.embed_ca(&config.key, blob).is_some();
    if replaced_existing {
        tracing::debug!(key = %config.key, "template already defined the key, replacing it");
    }

    let bytes = to_pretty_bytes(manifest.as_map(), config.indent, config.escape)?;
    Ok(RenderedManifest {
        manifest,
        bytes,
        replaced_existing,
    })
}

/// Compose the manifest and write it to the configured output path
///
/// # Errors
///
/// Returns the errors of [`render`], and `ManifestError::Write` if the output cannot be written.
pub fn compose(config: &ComposerConfig) -> Result<ComposeOutcome> {
    let rendered = render(config)?;
    write_manifest(&config.output_path, &rendered.bytes)?;
    Ok(ComposeOutcome {
        output_path: config.output_path.clone(),
        bytes_written: rendered.bytes.len(),
        key_count: rendered.manifest.len(),
        replaced_existing: rendered.replaced_existing,
    })
}
