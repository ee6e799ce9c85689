//! Configuration management
//!
//! Handles loading and saving user preferences for the command-line front
//! end. The library functions never read configuration on their own; callers
//! build a [`PriceFormatter`] from a loaded [`Config`] when they want a
//! different default currency.
//!
//! Configuration files are stored in platform-specific directories:
//! - macOS: `~/Library/Application Support/verktyg/config.yaml`
//! - Linux: `~/.config/verktyg/config.yaml`
//! - Windows: `%APPDATA%\verktyg\config.yaml`

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::formatting::{PriceFormatter, DEFAULT_CURRENCY};

/// Application configuration
///
/// Persisted as YAML in the user's config directory. Missing fields fall
/// back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Currency label used when a price is formatted without a pattern
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_currency: default_currency(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location
    ///
    /// # Returns
    /// - `Ok(Config)` with the loaded configuration, or defaults if the file doesn't exist
    /// - `Err` if the file exists but cannot be read or parsed
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from an explicit path
    ///
    /// # Errors
    /// Returns an error if the file exists but is malformed or unreadable.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "no config file, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::from_yaml(&contents).with_context(|| format!("Failed to parse config {:?}", path))
    }

    /// Parses a YAML document
    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty map
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(contents).context("Failed to parse config file")
    }

    /// Saves the configuration to the default config file location
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let contents = serde_yaml::to_string(self)?;
        fs::write(path, contents).with_context(|| format!("Failed to write config to {:?}", path))
    }

    /// Returns the platform-specific configuration file path
    ///
    /// Falls back to `~/.config/verktyg/config.yaml` if platform detection fails.
    ///
    /// # Errors
    /// Returns an error if the HOME environment variable is not set (fallback case only).
    pub fn config_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "verktyg") {
            Ok(proj_dirs.config_dir().join("config.yaml"))
        } else {
            let home = std::env::var("HOME").context("HOME not set")?;
            Ok(PathBuf::from(home).join(".config/verktyg/config.yaml"))
        }
    }

    /// Builds a price formatter using the configured default currency
    pub fn price_formatter(&self) -> PriceFormatter {
        PriceFormatter::new(self.default_currency.clone())
    }
}
