use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EntityError {
    #[error("failed to scan documentation directory {path}")]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid language code: '{0}'")]
    InvalidLanguage(String),
}

pub type Result<T> = std::result::Result<T, EntityError>;
