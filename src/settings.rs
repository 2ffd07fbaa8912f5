//! User settings persistence.
//!
//! This module handles loading and saving user preferences across sessions.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::locale::NumberLocale;
use crate::storage::StorageError;

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "settings.json";

/// User settings that persist across sessions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Locale used to format values
    #[serde(default)]
    pub locale: NumberLocale,
    /// Category that was active when the settings were last saved
    #[serde(default)]
    pub last_category: Option<String>,
}

fn default_version() -> u32 {
    1
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            version: 1,
            locale: NumberLocale::default(),
            last_category: None,
        }
    }
}

impl UserSettings {
    /// Get the config directory path for unitdeck
    pub fn get_config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::data_dir().map(|p| p.join("UnitDeck"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|p| p.join("UnitDeck"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            dirs::config_dir().map(|p| p.join("unitdeck"))
        }
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join(SETTINGS_FILE))
    }

    /// Load settings from the default location
    pub fn load() -> Self {
        match Self::get_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from `path`, falling back to defaults if it is missing or unreadable
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid settings file {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read settings file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<(), StorageError> {
        let path = Self::get_settings_path().ok_or(StorageError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save settings to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::CreateDirError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| StorageError::ParseError(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| StorageError::WriteError(e.to_string()))?;

        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }
}
