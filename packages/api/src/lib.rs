//! CA Manifest Public API
//!
//! Embeds a certificate-authority file into a JSON manifest template.
//! Use [`ManifestComposer`] for a fluent setup, or [`compose`] with a [`ComposerConfig`].

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::ManifestComposer;

// Re-export important types from the core package
pub use ca_manifest_core::{
    CaBlob, ComposeOutcome, ComposerConfig, ConfigDefaults, ConfigurationError, ErrorKind,
    EscapeMode, InputRole, JsonKind, Manifest, ManifestError, RenderedManifest, Result, Validator,
    compose, load_template, parse_template, read_ca_blob, render, to_pretty_bytes, write_manifest,
};

/// Compose with the default provisioning layout in the current directory
///
/// # Errors
///
/// Returns a `ManifestError` if an input is missing or malformed, or the output cannot be written.
pub fn compose_default() -> Result<ComposeOutcome> {
    ManifestComposer::new().compose()
}
