//! Discover the languages available under a documentation version folder.

use crate::config::IgnoredFiles;
use crate::error::{EntityError, Result};
use crate::i18n::LanguageCode;
use std::fs;
use std::path::Path;
use tracing::debug;

/// List the languages found directly under `path`.
///
/// The `.` and `..` entries are visited first, followed by the folder's
/// entries in name order. Each one is mapped through
/// [`LanguageCode::from_entry`]; duplicates keep their first position. Any
/// readable folder therefore always yields the default language first.
pub fn scan_languages(path: &Path, ignored: &IgnoredFiles) -> Result<Vec<LanguageCode>> {
    let scan_err = |source| EntityError::Scan {
        path: path.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(path).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        // Follows symlinks, so a linked language folder still counts.
        let is_dir = entry.path().is_dir();
        names.push((entry.file_name().to_string_lossy().into_owned(), is_dir));
    }
    names.sort();

    // `read_dir` omits the self and parent entries; both always exist.
    let dot_entries = [(".".to_string(), true), ("..".to_string(), true)];
    let names: Vec<_> = dot_entries.into_iter().chain(names).collect();

    let mut available: Vec<LanguageCode> = Vec::new();
    for (name, is_dir) in &names {
        let code = LanguageCode::from_entry(name, *is_dir, ignored);
        debug!("Entry '{}' in {} -> language '{}'", name, path.display(), code);
        if !available.contains(&code) {
            available.push(code);
        }
    }

    Ok(available)
}
