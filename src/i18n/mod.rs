//! Language handling for documentation entities.
//!
//! - `language`: `LanguageCode`, the normalized code derived from a folder name
//! - `registry`: display names for well-known codes

mod language;
mod registry;

pub use language::{LanguageCode, MAX_CODE_LEN};
pub use registry::{LanguageConfig, LanguageRegistry};
