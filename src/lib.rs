//! Folio - an interactive portfolio browser for the terminal
//!
//! This library models a single portfolio page (project cards, testimonial
//! cards, filter buttons, search boxes) and provides the interactive logic
//! over it: a centering testimonial carousel and a search/filter engine,
//! both driving an injected page view so the core stays independent of the
//! rendering substrate.

use thiserror::Error;

pub mod carousel;
pub mod cli;
pub mod config;
pub mod content;
pub mod debounce;
pub mod output;
pub mod search;
pub mod typing;
pub mod ui;
pub mod view;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FolioError {
    /// Portfolio content error
    #[error("Content error: {0}")]
    ContentError(#[from] content::ContentError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
