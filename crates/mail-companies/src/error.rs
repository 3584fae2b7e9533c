//! Error types for archive extraction.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk mail directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid repair pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("repair pattern must not be empty")]
    EmptyPattern,

    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl TallyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TallyError>;
