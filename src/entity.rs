//! A documentation entity: one registered module with all of its versions.
//!
//! The entity is built from folders on disk. Each version points at a
//! directory whose immediate subfolders are language codes:
//!
//! ```text
//! docs/2.4/en/...
//! docs/2.4/de/...
//! docs/trunk/en/...
//! ```

use crate::config::IgnoredFiles;
use crate::error::Result;
use crate::i18n::LanguageCode;
use crate::scanner::scan_languages;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionEntry {
    pub label: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    pub code: LanguageCode,
    /// English display name, absent for codes the registry does not know
    pub name: Option<&'static str>,
    pub native_name: Option<&'static str>,
    /// Set on the language unrecognised folder entries fall back to
    pub is_default: bool,
}

/// Snapshot of an entity handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySummary {
    pub module_folder: String,
    pub title: String,
    pub versions: Vec<VersionEntry>,
    pub languages: Vec<LanguageEntry>,
}

#[derive(Debug, Clone)]
pub struct DocumentationEntity {
    module_folder: String,
    title: String,
    /// Insertion ordered; the last entry is the most recently added version
    versions: Vec<VersionEntry>,
    languages: Vec<LanguageCode>,
    ignored_files: IgnoredFiles,
}

impl DocumentationEntity {
    /// Register a module with its first version.
    ///
    /// Languages are worked out from the folders under `path`. When `title` is
    /// `None` the module folder name doubles as the title.
    pub fn new(
        module: &str,
        version: &str,
        path: impl AsRef<Path>,
        title: Option<&str>,
        ignored_files: IgnoredFiles,
    ) -> Result<Self> {
        let mut entity = Self {
            module_folder: module.to_string(),
            title: title.unwrap_or(module).to_string(),
            versions: Vec::new(),
            languages: Vec::new(),
            ignored_files,
        };
        entity.add_version(version, path)?;
        Ok(entity)
    }

    pub fn module_folder(&self) -> &str {
        &self.module_folder
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    // ==================== Languages ====================

    pub fn languages(&self) -> &[LanguageCode] {
        &self.languages
    }

    pub fn has_language(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l == code)
    }

    /// Add a single language; already known codes are ignored.
    pub fn add_language(&mut self, language: LanguageCode) {
        if !self.languages.contains(&language) {
            self.languages.push(language);
        }
    }

    pub fn add_languages<I>(&mut self, languages: I)
    where
        I: IntoIterator<Item = LanguageCode>,
    {
        for language in languages {
            self.add_language(language);
        }
    }

    // ==================== Versions ====================

    /// Version labels in the order they were added.
    pub fn versions(&self) -> Vec<&str> {
        self.versions.iter().map(|v| v.label.as_str()).collect()
    }

    pub fn has_version(&self, label: &str) -> bool {
        self.find_version(label).is_some()
    }

    pub fn has_versions(&self) -> bool {
        !self.versions.is_empty()
    }

    /// Add a version, merging in the languages found under `path`.
    ///
    /// Re-adding a known label replaces its path but keeps its position.
    /// Nothing is recorded when the folder cannot be read.
    pub fn add_version(&mut self, label: &str, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let available = scan_languages(path, &self.ignored_files)?;
        self.add_languages(available);

        match self.versions.iter_mut().find(|v| v.label == label) {
            Some(existing) => existing.path = path.to_path_buf(),
            None => self.versions.push(VersionEntry {
                label: label.to_string(),
                path: path.to_path_buf(),
            }),
        }

        info!(
            "Added version '{}' of {} at {}",
            label,
            self.module_folder,
            path.display()
        );
        Ok(())
    }

    /// Remove a version. Languages discovered through it stay on the entity.
    pub fn remove_version(&mut self, label: &str) {
        let before = self.versions.len();
        self.versions.retain(|v| v.label != label);
        if self.versions.len() != before {
            info!("Removed version '{}' of {}", label, self.module_folder);
        }
    }

    /// Path registered for a version label.
    pub fn version_path(&self, label: &str) -> Option<&Path> {
        self.find_version(label).map(|v| v.path.as_path())
    }

    /// Folder holding the pages for a version and language.
    ///
    /// `version` defaults to the unlabelled version and `lang` to English. An
    /// unknown version resolves against the most recently added one. The
    /// returned path ends with a separator. Returns `None` only when the
    /// entity has no versions left.
    pub fn path(&self, version: Option<&str>, lang: Option<&str>) -> Option<PathBuf> {
        let version = version.unwrap_or("");
        let lang = match lang {
            Some(l) if !l.is_empty() => l,
            _ => LanguageCode::DEFAULT.as_str(),
        };

        let entry = self
            .find_version(version)
            .or_else(|| self.versions.last())?;
        Some(entry.path.join(lang).join(""))
    }

    pub fn summary(&self) -> EntitySummary {
        EntitySummary {
            module_folder: self.module_folder.clone(),
            title: self.title.clone(),
            versions: self.versions.clone(),
            languages: self
                .languages
                .iter()
                .map(|code| {
                    let config = code.config();
                    LanguageEntry {
                        code: code.clone(),
                        name: config.map(|c| c.name),
                        native_name: config.map(|c| c.native_name),
                        is_default: code.is_default(),
                    }
                })
                .collect(),
        }
    }

    fn find_version(&self, label: &str) -> Option<&VersionEntry> {
        self.versions.iter().find(|v| v.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create `<root>/<name>` with the given subfolders.
    fn version_dir(root: &TempDir, name: &str, langs: &[&str]) -> PathBuf {
        let dir = root.path().join(name);
        fs::create_dir_all(&dir).unwrap();
        for lang in langs {
            fs::create_dir(dir.join(lang)).unwrap();
        }
        dir
    }

    fn entity(root: &TempDir, langs: &[&str]) -> DocumentationEntity {
        let path = version_dir(root, "trunk", langs);
        DocumentationEntity::new("sapphire", "", path, None, IgnoredFiles::default()).unwrap()
    }

    // ==================== Construction ====================

    #[test]
    fn test_new_defaults_title_to_module() {
        let root = TempDir::new().unwrap();
        let e = entity(&root, &["en"]);
        assert_eq!(e.module_folder(), "sapphire");
        assert_eq!(e.title(), "sapphire");
        assert_eq!(e.versions(), vec![""]);
        assert!(e.has_versions());
    }

    #[test]
    fn test_new_with_title() {
        let root = TempDir::new().unwrap();
        let path = version_dir(&root, "2.4", &["en"]);
        let e = DocumentationEntity::new(
            "cms",
            "2.4",
            path,
            Some("Content Management"),
            IgnoredFiles::default(),
        )
        .unwrap();
        assert_eq!(e.title(), "Content Management");
        assert!(e.has_version("2.4"));
        assert!(!e.has_version(""));
    }

    #[test]
    fn test_new_missing_path_fails() {
        let root = TempDir::new().unwrap();
        let result = DocumentationEntity::new(
            "cms",
            "",
            root.path().join("missing"),
            None,
            IgnoredFiles::default(),
        );
        assert!(result.is_err());
    }

    // ==================== Languages ====================

    #[test]
    fn test_languages_discovered_from_folders() {
        let root = TempDir::new().unwrap();
        let e = entity(&root, &["de", "en", "images"]);
        let codes: Vec<_> = e.languages().iter().map(|l| l.as_str()).collect();
        assert_eq!(codes, vec!["en", "de"]);
        assert!(e.has_language("de"));
        assert!(!e.has_language("fr"));
    }

    #[test]
    fn test_add_language_deduplicates() {
        let root = TempDir::new().unwrap();
        let mut e = entity(&root, &["en"]);
        e.add_language(LanguageCode::new("fr").unwrap());
        e.add_language(LanguageCode::new("fr").unwrap());
        e.add_languages([LanguageCode::DEFAULT, LanguageCode::new("nl").unwrap()]);

        let codes: Vec<_> = e.languages().iter().map(|l| l.as_str()).collect();
        assert_eq!(codes, vec!["en", "fr", "nl"]);
    }

    #[test]
    fn test_add_version_merges_languages() {
        let root = TempDir::new().unwrap();
        let mut e = entity(&root, &["en"]);
        let next = version_dir(&root, "3.0", &["en", "ja"]);
        e.add_version("3.0", &next).unwrap();

        assert_eq!(e.languages().len(), 2);
        assert!(e.has_language("ja"));
    }

    // ==================== Versions ====================

    #[test]
    fn test_versions_keep_insertion_order() {
        let root = TempDir::new().unwrap();
        let mut e = entity(&root, &["en"]);
        e.add_version("3.0", version_dir(&root, "3.0", &["en"])).unwrap();
        e.add_version("2.4", version_dir(&root, "2.4", &["en"])).unwrap();
        assert_eq!(e.versions(), vec!["", "3.0", "2.4"]);
    }

    #[test]
    fn test_readding_version_replaces_path() {
        let root = TempDir::new().unwrap();
        let mut e = entity(&root, &["en"]);
        let moved = version_dir(&root, "moved", &["en"]);
        e.add_version("", &moved).unwrap();

        assert_eq!(e.versions(), vec![""]);
        assert_eq!(e.version_path(""), Some(moved.as_path()));
    }

    #[test]
    fn test_failed_add_version_leaves_entity_unchanged() {
        let root = TempDir::new().unwrap();
        let mut e = entity(&root, &["en"]);
        assert!(e.add_version("9.9", root.path().join("missing")).is_err());
        assert!(!e.has_version("9.9"));
    }

    #[test]
    fn test_remove_version() {
        let root = TempDir::new().unwrap();
        let mut e = entity(&root, &["en", "de"]);
        e.remove_version("");
        assert!(!e.has_versions());
        // Languages are not recomputed on removal
        assert!(e.has_language("de"));
    }

    #[test]
    fn test_remove_unknown_version_is_noop() {
        let root = TempDir::new().unwrap();
        let mut e = entity(&root, &["en"]);
        e.remove_version("1.0");
        assert_eq!(e.versions(), vec![""]);
    }

    // ==================== Paths ====================

    #[test]
    fn test_path_defaults() {
        let root = TempDir::new().unwrap();
        let e = entity(&root, &["en"]);
        let trunk = root.path().join("trunk");
        assert_eq!(e.path(None, None), Some(trunk.join("en")));
        assert_eq!(e.path(Some(""), Some("")), Some(trunk.join("en")));
        assert_eq!(e.path(None, Some("de")), Some(trunk.join("de")));
    }

    #[test]
    fn test_default_path_language_is_always_present() {
        let root = TempDir::new().unwrap();
        let e = entity(&root, &["de"]);
        assert!(e.has_language("en"));
        assert!(e.has_language("de"));
        assert_eq!(e.path(None, None), Some(root.path().join("trunk").join("en")));
    }

    #[test]
    fn test_path_ends_with_separator() {
        let root = TempDir::new().unwrap();
        let e = entity(&root, &["en"]);
        let path = e.path(None, Some("en")).unwrap();
        let rendered = path.to_string_lossy();
        assert!(rendered.ends_with(std::path::MAIN_SEPARATOR));
        assert!(rendered.trim_end_matches(std::path::MAIN_SEPARATOR).ends_with("en"));
    }

    #[test]
    fn test_path_unknown_version_uses_latest() {
        let root = TempDir::new().unwrap();
        let mut e = entity(&root, &["en"]);
        let latest = version_dir(&root, "3.0", &["en"]);
        e.add_version("3.0", &latest).unwrap();

        assert_eq!(e.path(Some("1.0"), None), Some(latest.join("en")));
        // The lookup does not consume the fallback version
        assert!(e.has_version("3.0"));
    }

    #[test]
    fn test_path_without_versions() {
        let root = TempDir::new().unwrap();
        let mut e = entity(&root, &["en"]);
        e.remove_version("");
        assert_eq!(e.path(None, None), None);
    }

    // ==================== Summary ====================

    #[test]
    fn test_summary_includes_language_names() {
        let root = TempDir::new().unwrap();
        let mut e = entity(&root, &["de", "qq"]);
        e.add_language(LanguageCode::DEFAULT);

        let summary = e.summary();
        assert_eq!(summary.module_folder, "sapphire");
        assert_eq!(summary.versions.len(), 1);

        let names: Vec<_> = summary.languages.iter().map(|l| l.name).collect();
        assert_eq!(names, vec![Some("English"), Some("German"), None]);

        let native: Vec<_> = summary.languages.iter().map(|l| l.native_name).collect();
        assert_eq!(native, vec![Some("English"), Some("Deutsch"), None]);

        let defaults: Vec<_> = summary.languages.iter().map(|l| l.is_default).collect();
        assert_eq!(defaults, vec![true, false, false]);
    }
}
