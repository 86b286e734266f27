use anyhow::Result;

/// Directory entry names that are never treated as a language folder.
pub const DEFAULT_IGNORED_FILES: &[&str] = &[
    ".", "..", ".DS_Store", ".svn", ".git", "assets", "themes", "_images",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredFiles {
    names: Vec<String>,
}

impl IgnoredFiles {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma separated list, skipping blank items.
    pub fn parse(list: &str) -> Self {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty()),
        )
    }

    /// Exact, case-sensitive match.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for IgnoredFiles {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_FILES.iter().copied())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub ignored_files: IgnoredFiles,

    /// Version label used when a path is registered without one
    pub default_version: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            ignored_files: std::env::var("DOCS_IGNORED_FILES")
                .map(|v| IgnoredFiles::parse(&v))
                .unwrap_or_default(),
            default_version: std::env::var("DOCS_DEFAULT_VERSION").unwrap_or_default(),
        })
    }
}
