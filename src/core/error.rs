//! Error types and error handling for docsearch.
//!
//! A rebuild is all-or-nothing, so every failure below aborts the
//! run. Missing titles or descriptions are not errors; they degrade
//! to fallbacks inside the parser.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docsearch operations
pub type Result<T> = std::result::Result<T, DocSearchError>;

/// Main error type for docsearch
#[derive(Error, Debug)]
pub enum DocSearchError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Failed to walk content tree: {0}")]
    WalkFailed(String),

    #[error("Malformed front-matter in {path}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("Indexing failed: {0}")]
    IndexingFailed(String),

    #[error("Record index not found: {0}")]
    IndexNotFound(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl DocSearchError {
    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DocSearchError::IndexNotFound(_) | DocSearchError::InvalidPath(_)
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            DocSearchError::InvalidQuery(_) | DocSearchError::ConfigError(_)
        )
    }
}

impl From<walkdir::Error> for DocSearchError {
    fn from(err: walkdir::Error) -> Self {
        let location = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        DocSearchError::WalkFailed(format!("{location}: {err}"))
    }
}
