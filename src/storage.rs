//! Durable storage for pinned unit selections.
//!
//! Only the ordered list of pinned unit ids is stored per category, never the
//! values. On disk the whole selection is a single JSON object mapping category
//! id to unit ids:
//!
//! ```json
//! { "length": ["m", "cm", "ft"], "temperature": ["c", "f"] }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::settings::UserSettings;

/// File name of the pinned units store inside the config directory
pub const PINNED_UNITS_FILE: &str = "pinned_units.json";

/// Category id -> ordered pinned unit ids
pub type PinMap = BTreeMap<String, Vec<String>>;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur while reading or writing pinned units
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to create the storage directory
    #[error("Failed to create storage directory: {0}")]
    CreateDirError(String),

    /// Failed to read the storage file
    #[error("Failed to read pinned units file: {0}")]
    ReadError(String),

    /// Failed to write the storage file
    #[error("Failed to write pinned units file: {0}")]
    WriteError(String),

    /// Stored data is not a valid pin map
    #[error("Failed to parse pinned units: {0}")]
    ParseError(String),

    /// No config directory on this platform
    #[error("Config directory not available")]
    NoConfigDir,
}

/// Backend that persists the pinned unit ids of each category
pub trait PinStorage {
    /// Stored ids for a category, `None` if nothing was ever saved for it
    fn load_pins(&self, category_id: &str) -> Result<Option<Vec<String>>, StorageError>;

    /// Replace the stored ids for a category
    fn save_pins(&mut self, category_id: &str, unit_ids: &[String]) -> Result<(), StorageError>;
}

// ============================================================================
// In-memory storage
// ============================================================================

/// Storage that lives only as long as the process
#[derive(Clone, Debug, Default)]
pub struct MemoryPinStorage {
    pins: PinMap,
}

impl MemoryPinStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything saved so far
    pub fn pins(&self) -> &PinMap {
        &self.pins
    }
}

impl PinStorage for MemoryPinStorage {
    fn load_pins(&self, category_id: &str) -> Result<Option<Vec<String>>, StorageError> {
        Ok(self.pins.get(category_id).cloned())
    }

    fn save_pins(&mut self, category_id: &str, unit_ids: &[String]) -> Result<(), StorageError> {
        self.pins
            .insert(category_id.to_string(), unit_ids.to_vec());
        Ok(())
    }
}

// ============================================================================
// JSON file storage
// ============================================================================

/// Storage backed by a pretty-printed JSON file
#[derive(Clone, Debug)]
pub struct JsonPinStorage {
    path: PathBuf,
}

impl JsonPinStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at [`PINNED_UNITS_FILE`] inside the platform config directory
    pub fn default_location() -> Result<Self, StorageError> {
        UserSettings::get_config_dir()
            .map(|dir| Self::new(dir.join(PINNED_UNITS_FILE)))
            .ok_or(StorageError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole pin map; a missing file is an empty map
    pub fn read_all(&self) -> Result<PinMap, StorageError> {
        if !self.path.exists() {
            return Ok(PinMap::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| StorageError::ReadError(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| StorageError::ParseError(e.to_string()))
    }

    /// Overwrite the file with `pins`
    pub fn write_all(&self, pins: &PinMap) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::CreateDirError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(pins)
            .map_err(|e| StorageError::ParseError(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::WriteError(e.to_string()))?;

        tracing::info!("Saved pinned units to {:?}", self.path);
        Ok(())
    }
}

impl PinStorage for JsonPinStorage {
    fn load_pins(&self, category_id: &str) -> Result<Option<Vec<String>>, StorageError> {
        let mut pins = self.read_all()?;
        Ok(pins.remove(category_id))
    }

    fn save_pins(&mut self, category_id: &str, unit_ids: &[String]) -> Result<(), StorageError> {
        let mut pins = match self.read_all() {
            Ok(pins) => pins,
            Err(StorageError::ParseError(e)) => {
                tracing::warn!("Discarding unreadable pinned units file: {}", e);
                PinMap::new()
            }
            Err(e) => return Err(e),
        };

        pins.insert(category_id.to_string(), unit_ids.to_vec());
        self.write_all(&pins)
    }
}
