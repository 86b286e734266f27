//! Known languages and their display names.
//!
//! Entities may carry any short language code; this table only lets the
//! rendering layer show "Deutsch" instead of "de" for the common ones. It uses
//! a `OnceLock` singleton so the table is built once on first access.

use std::sync::OnceLock;

/// Display metadata for a well-known language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "de")
    pub code: &'static str,

    /// English name of the language (e.g., "German")
    pub name: &'static str,

    /// Native name of the language (e.g., "Deutsch")
    pub native_name: &'static str,
}

/// Global language registry singleton.
///
/// Immutable after initialization. Codes missing from the registry are still
/// valid entity languages, they just have no display names.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    ///
    /// This method initializes the registry on first call and returns a reference
    /// to the singleton instance on subsequent calls.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The language code as found in a documentation folder (e.g., "de")
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language is known
    /// * `None` if the code has no registered display names
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }
}

/// Default language table.
///
/// Covers the languages documentation folders commonly ship with.
fn default_languages() -> Vec<LanguageConfig> {
    const TABLE: &[(&str, &str, &str)] = &[
        ("en", "English", "English"),
        ("de", "German", "Deutsch"),
        ("es", "Spanish", "Español"),
        ("fr", "French", "Français"),
        ("it", "Italian", "Italiano"),
        ("nl", "Dutch", "Nederlands"),
        ("pt", "Portuguese", "Português"),
        ("ru", "Russian", "Русский"),
        ("ja", "Japanese", "日本語"),
        ("zh", "Chinese", "中文"),
    ];

    TABLE
        .iter()
        .map(|&(code, name, native_name)| LanguageConfig {
            code,
            name,
            native_name,
        })
        .collect()
}
