//! Language codes as found in documentation folders.
//!
//! A documentation version directory holds one subdirectory per language
//! (`en/`, `de/`, ...). Anything else found there (files, long folder names,
//! ignored entries) belongs to the default language.

use crate::config::IgnoredFiles;
use crate::error::{EntityError, Result};
use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Longest folder name still treated as a language code.
pub const MAX_CODE_LEN: usize = 2;

/// A language code attached to a documentation entity.
///
/// Codes are at most two characters long. They do not have to be present in
/// the [`LanguageRegistry`]; the registry only supplies display names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LanguageCode {
    code: Cow<'static, str>,
}

impl LanguageCode {
    /// The language every unrecognised folder entry maps to.
    pub const DEFAULT: LanguageCode = LanguageCode {
        code: Cow::Borrowed("en"),
    };

    /// Create a code from user input.
    ///
    /// # Returns
    /// * `Ok(LanguageCode)` for a non-empty code of at most two characters
    /// * `Err(EntityError::InvalidLanguage)` otherwise
    pub fn new(code: &str) -> Result<Self> {
        if code.is_empty() || code.chars().count() > MAX_CODE_LEN {
            return Err(EntityError::InvalidLanguage(code.to_string()));
        }
        Ok(Self {
            code: Cow::Owned(code.to_string()),
        })
    }

    /// Map a directory entry to the language it represents.
    ///
    /// The entry name is kept when it is a directory, no longer than two
    /// characters and not ignored. Everything else maps to [`Self::DEFAULT`].
    /// The `.` and `..` entries always map to the default.
    ///
    /// # Arguments
    /// * `name` - File name of the entry inside a version folder
    /// * `is_dir` - Whether the entry is (or links to) a directory
    /// * `ignored` - Names that never count as a language
    pub fn from_entry(name: &str, is_dir: bool, ignored: &IgnoredFiles) -> Self {
        if !is_dir
            || name.is_empty()
            || name == "."
            || name == ".."
            || name.chars().count() > MAX_CODE_LEN
            || ignored.contains(name)
        {
            return Self::DEFAULT;
        }
        Self {
            code: Cow::Owned(name.to_string()),
        }
    }

    /// Get the language code as a string slice (e.g., "en").
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Check if this is the language unrecognised entries fall back to.
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// Get the registry entry for this code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language is known to the registry
    /// * `None` for codes without display names
    pub fn config(&self) -> Option<&'static LanguageConfig> {
        LanguageRegistry::get().get_by_code(self.as_str())
    }

    /// English display name, if the language is known.
    pub fn name(&self) -> Option<&'static str> {
        self.config().map(|c| c.name)
    }

    /// Native display name, if the language is known.
    pub fn native_name(&self) -> Option<&'static str> {
        self.config().map(|c| c.native_name)
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
