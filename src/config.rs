//! Configuration module for folio
//!
//! Manages application configuration including the content path and the
//! page timing knobs. Configuration is stored in the user's config
//! directory and created with defaults on first load.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default rows a section top sits below the viewport top after a
/// section scroll
const DEFAULT_HEADER_OFFSET: u16 = 2;
/// Default resize debounce quiet period, in milliseconds
const DEFAULT_DEBOUNCE_MS: u64 = 250;
/// Default settle delay before the initial carousel positioning, in
/// milliseconds
const DEFAULT_SETTLE_MS: u64 = 100;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FolioConfig {
    /// Path of the portfolio content document; the embedded demo content
    /// is used when unset
    #[serde(default)]
    pub content: Option<PathBuf>,

    /// Rows left above a section after scrolling to it
    #[serde(default = "default_header_offset")]
    pub header_offset: u16,

    /// Resize re-render quiet period, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Delay before the initial carousel positioning, in milliseconds
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

const fn default_header_offset() -> u16 {
    DEFAULT_HEADER_OFFSET
}

const fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

const fn default_settle_ms() -> u64 {
    DEFAULT_SETTLE_MS
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            content: None,
            header_offset: DEFAULT_HEADER_OFFSET,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            settle_ms: DEFAULT_SETTLE_MS,
            quiet: false,
        }
    }
}

impl FolioConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("folio").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// The resize debounce quiet period
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// The initial carousel settle delay
    #[must_use]
    pub const fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FolioConfig::default();
        assert!(config.content.is_none());
        assert_eq!(config.header_offset, 2);
        assert_eq!(config.debounce(), Duration::from_millis(250));
        assert_eq!(config.settle(), Duration::from_millis(100));
        assert!(!config.quiet);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: FolioConfig = toml::from_str("debounce_ms = 500").unwrap();
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.settle_ms, 100);
        assert_eq!(config.header_offset, 2);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = FolioConfig {
            content: Some(PathBuf::from("/tmp/portfolio.toml")),
            quiet: true,
            ..FolioConfig::default()
        };

        let raw = toml::to_string_pretty(&config).unwrap();
        let back: FolioConfig = toml::from_str(&raw).unwrap();
        assert_eq!(back.content, config.content);
        assert!(back.quiet);
    }
}
