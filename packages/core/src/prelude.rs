//! Essential types for composing manifests.

pub use crate::compose::{ComposeOutcome, RenderedManifest, compose, render};
pub use crate::config::{ComposerConfig, EscapeMode, Validator};
pub use crate::error::{ErrorKind, ManifestError, Result};
pub use crate::manifest::Manifest;
