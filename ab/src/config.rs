//! Address book configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Contacts file read at startup and written on save-and-exit
    #[serde(rename = "store-path")]
    pub store_path: PathBuf,

    /// Maximum number of contacts; `null` for no limit
    pub capacity: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(crate::DEFAULT_STORE_FILE),
            capacity: Some(crate::DEFAULT_CAPACITY),
            log_level: None,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // An explicit path must load
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Project-local config, then ~/.config/addressbook/addressbook.yml
        for path in Self::default_paths() {
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read just the log level, before logging is set up
    ///
    /// Follows the same lookup as [`Config::load`] but never fails.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let path = match config_path {
            Some(path) => path.clone(),
            None => Self::default_paths().into_iter().find(|p| p.exists())?,
        };
        Self::load_from_file(path).ok()?.log_level
    }

    fn default_paths() -> Vec<PathBuf> {
        [
            Some(PathBuf::from(".addressbook.yml")),
            dirs::config_dir().map(|p| p.join("addressbook").join("addressbook.yml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded file
    pub fn with_overrides(mut self, store: Option<PathBuf>, capacity: Option<usize>) -> Self {
        if let Some(store) = store {
            self.store_path = store;
        }
        if capacity.is_some() {
            self.capacity = capacity;
        }
        self
    }
}
