//! Documentation entities: versioned, multi-language documentation packages
//! discovered from the filesystem.

pub mod config;
pub mod entity;
pub mod error;
pub mod i18n;
pub mod scanner;

pub use config::{Config, IgnoredFiles};
pub use entity::{DocumentationEntity, EntitySummary};
pub use error::EntityError;
pub use i18n::{LanguageCode, LanguageRegistry};
