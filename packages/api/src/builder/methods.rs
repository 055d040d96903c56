//! Terminal methods for executing a composition

use ca_manifest_core::{ComposeOutcome, RenderedManifest, Result};

use crate::builder::core::ManifestComposer;

impl ManifestComposer {
    /// Compose the manifest and write it to the output path
    ///
    /// # Errors
    ///
    /// Returns a `ManifestError` if the configuration is invalid, an input is
    /// missing or malformed, or the output cannot be written.
    ///
    /// # Examples
    /// ```no_run
    /// use ca_manifest::ManifestComposer;
    ///
    /// let outcome = ManifestComposer::new()
    ///     .ca_file("owner/ca-cert.pem")
    ///     .template("manifest-template.json")
    ///     .output("manifest.json")
    ///     .compose()?;
    /// # Ok::<(), ca_manifest::ManifestError>(())
    /// ```
    pub fn compose(&self) -> Result<ComposeOutcome> {
        ca_manifest_core::compose(&self.config)
    }

    /// Build the manifest in memory without writing it
    ///
    /// # Errors
    ///
    /// Returns a `ManifestError` if the configuration is invalid or an input is
    /// missing or malformed.
    pub fn render(&self) -> Result<RenderedManifest> {
        ca_manifest_core::render(&self.config)
    }
}
