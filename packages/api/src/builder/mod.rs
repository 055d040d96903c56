//! Manifest composer builder API
//!
//! Fluent configuration of a composition run, with terminal methods that render
//! or write the manifest.

pub mod core;
pub mod methods;

pub use self::core::*;
