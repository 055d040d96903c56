pub mod classification;
pub mod constructors;
pub mod types;

pub use classification::ErrorKind;
pub use types::{InputRole, JsonKind, ManifestError, Result};
