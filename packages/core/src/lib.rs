//! # CA Manifest Core
//!
//! Embeds the contents of a certificate-authority file into a JSON manifest template.
//!
//! The pipeline is linear: the certificate is read verbatim, the template is parsed into
//! an ordered JSON object, the certificate text is set under a single key (`"ca"` by
//! default), and the document is pretty-printed to the output path. Key order of the
//! template is preserved and numeric values are kept exactly, without rounding to f64.
//!
//! ```no_run
//! use ca_manifest_core::{ComposerConfig, compose};
//!
//! let config = ComposerConfig::new("owner/ca-cert.pem", "manifest-template.json", "manifest.json");
//! let outcome = compose(&config)?;
//! println!("wrote {} bytes", outcome.bytes_written);
//! # Ok::<(), ca_manifest_core::ManifestError>(())
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod certificate;
pub mod compose;
pub mod config;
pub mod error;
pub mod manifest;
pub mod output;
pub mod prelude;

pub use certificate::{CaBlob, read_ca_blob};
pub use compose::{ComposeOutcome, RenderedManifest, compose, render};
pub use config::{
    ComposerConfig, ConfigDefaults, ConfigValidator, ConfigurationError, EscapeMode, Validator,
};
pub use error::{ErrorKind, InputRole, JsonKind, ManifestError, Result};
pub use manifest::{Manifest, load_template, parse_template};
pub use output::{to_pretty_bytes, write_manifest};
