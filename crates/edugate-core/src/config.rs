//! Configuration management for EduGate.
//!
//! Loads configuration from ${EDUGATE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default config template with comments, embedded at compile time.
const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("default_config.toml");

/// Environment variable that overrides `api_base_url`.
pub const API_BASE_URL_ENV: &str = "EDUGATE_API_BASE_URL";

/// Local development backend used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

pub mod paths {
    //! Path resolution for EduGate configuration and data directories.
    //!
    //! `EDUGATE_HOME` resolution order:
    //! 1. `EDUGATE_HOME` environment variable (if set)
    //! 2. ~/.config/edugate (default)

    use std::path::PathBuf;

    /// Returns the EduGate home directory.
    ///
    /// Falls back to the current directory when no home directory can be found.
    pub fn edugate_home() -> PathBuf {
        if let Ok(home) = std::env::var("EDUGATE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map_or_else(|| PathBuf::from("."), |h| h.join(".config").join("edugate"))
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        edugate_home().join("config.toml")
    }

    /// Returns the default path of the session storage file.
    pub fn storage_path() -> PathBuf {
        edugate_home().join("storage.json")
    }

    /// Returns the directory that holds log files.
    pub fn logs_dir() -> PathBuf {
        edugate_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the backend (empty is treated as unset)
    pub api_base_url: Option<String>,

    /// Timeout for login requests in seconds (0 disables)
    pub request_timeout_secs: u32,

    /// Optional override of the session storage file
    pub storage_path: Option<String>,
}

impl Config {
    const DEFAULT_REQUEST_TIMEOUT_SECS: u32 = 0;

    /// Loads configuration from the default config path and applies
    /// environment overrides.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&paths::config_path())?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Applies `EDUGATE_API_BASE_URL` on top of the file values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_BASE_URL_ENV)
            && !url.trim().is_empty()
        {
            self.api_base_url = Some(url);
        }
    }

    /// Returns the base URL to build endpoints from.
    /// Empty strings are treated as unset.
    pub fn effective_api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(u64::from(self.request_timeout_secs)))
        }
    }

    /// Returns the session storage file, honoring `storage_path`.
    pub fn effective_storage_path(&self) -> PathBuf {
        self.storage_path
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map_or_else(paths::storage_path, PathBuf::from)
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, DEFAULT_CONFIG_TEMPLATE)
    }

    /// Saves only the `api_base_url` field to a specific config file path.
    ///
    /// Creates the file with default template if it doesn't exist.
    /// Preserves existing fields and comments using `toml_edit`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or written.
    pub fn save_api_base_url_to(path: &Path, url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            DEFAULT_CONFIG_TEMPLATE.to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["api_base_url"] = value(url);

        Self::write_config(path, &doc.to_string())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            request_timeout_secs: Self::DEFAULT_REQUEST_TIMEOUT_SECS,
            storage_path: None,
        }
    }
}
