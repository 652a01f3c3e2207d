//! Portfolio content
//!
//! The portfolio document is a TOML file describing everything the page
//! renders: roles for the typing headline, both filter button groups, the
//! project cards, and the testimonial cards. When no content path is
//! given, an embedded demo document is used.

pub mod error;
pub mod types;

pub use error::{ContentError, Result};
pub use types::{Card, Portfolio, Testimonial};

use std::fs;
use std::path::Path;

/// The embedded demo portfolio document
const DEFAULT_PORTFOLIO: &str = include_str!("default_portfolio.toml");

impl Portfolio {
    /// Load a portfolio document from a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ContentError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&raw)?)
    }

    /// Parse the embedded demo document
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the embedded document fails to parse.
    pub fn embedded() -> Result<Self> {
        Ok(toml::from_str(DEFAULT_PORTFOLIO)?)
    }
}
