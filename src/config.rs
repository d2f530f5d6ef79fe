// SPDX-License-Identifier: GPL-3.0-only

//! User configuration
//!
//! Stored as JSON under the platform config directory. Every field has a
//! default, so a partial or missing file is fine; a malformed one is an error.

use crate::constants::{
    APP_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_FOLLOW_INTERVAL, DEFAULT_MAX_SCAN_DIMENSION,
    DEFAULT_TOAST_DURATION,
};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language code overriding the one reported by the system
    pub language: Option<String>,
    /// How long transient toasts stay visible
    pub toast_duration_ms: u64,
    /// Larger frames are downscaled to this before decoding
    pub max_scan_dimension: u32,
    /// Re-poll interval when following an image source
    pub follow_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            toast_duration_ms: DEFAULT_TOAST_DURATION.as_millis() as u64,
            max_scan_dimension: DEFAULT_MAX_SCAN_DIMENSION,
            follow_interval_ms: DEFAULT_FOLLOW_INTERVAL.as_millis() as u64,
        }
    }
}

impl Config {
    /// Directory holding the config file, if the platform has one
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Default config file location
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> AppResult<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific file
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Write to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Write a default file at `path` unless one is already there
    ///
    /// Returns whether a file was written. An existing file is left alone,
    /// even a malformed one.
    pub fn write_default_if_missing(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        info!(path = %path.display(), "Wrote default config");
        Ok(true)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn follow_interval(&self) -> Duration {
        Duration::from_millis(self.follow_interval_ms)
    }
}
