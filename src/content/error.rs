//! Portfolio content error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading portfolio content
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file could not be read
    #[error("Failed to read content file {path}: {source}")]
    ReadError {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The content file is not valid TOML for a portfolio document
    #[error("Failed to parse portfolio content: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;
