//! Pinned units of the active category.
//!
//! A category shows an ordered set of pinned units, each with a live value.
//! Editing one pinned value recomputes every sibling from it through the
//! conversion engine. Only the ordered unit ids are persisted; values always
//! start at zero when a category is (re)loaded.

use thiserror::Error;

use crate::catalog;
use crate::convert;
use crate::storage::{PinStorage, StorageError};
use crate::units::{Unit, UnitCategory};

/// Errors returned by [`PinnedUnitStore`] operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unknown category: {0}")]
    CategoryNotFound(String),

    #[error("No active category")]
    NoActiveCategory,

    #[error("Unit '{unit}' does not belong to category '{category}'")]
    UnitNotInCategory { unit: String, category: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Units pinned when a category has no stored selection
pub fn default_pins(category_id: &str) -> &'static [&'static str] {
    match category_id {
        "length" => &["m", "cm", "ft", "in", "km", "mm"],
        "weight" => &["kg", "g", "lb", "oz"],
        "volume" => &["l", "ml", "gal", "cup"],
        "temperature" => &["c", "f", "k", "r"],
        "area" => &["m2", "ft2", "ha", "ac"],
        "speed" => &["kmh", "mph", "mps", "kn"],
        "energy" => &["j", "kj", "kcal", "kwh"],
        "power" => &["w", "kw", "hp", "btuh"],
        "data" => &["mb", "gb", "mib", "gib"],
        "time" => &["s", "min", "h", "d"],
        "pressure" => &["kpa", "bar", "psi", "atm"],
        "angle" => &["deg", "rad", "grad", "turn"],
        "frequency" => &["hz", "khz", "mhz", "rpm"],
        "force" => &["n", "kn", "lbf", "kgf"],
        "fuel" => &["l100km", "kmpl", "mpg_us", "mpg_uk"],
        "density" => &["kgm3", "gcm3", "lbft3", "lbgal"],
        "cooking" => &["cup", "tbsp", "tsp", "ml"],
        "illuminance" => &["lx", "fc", "klx", "ph"],
        "radiation" => &["sv", "msv", "usv", "rem"],
        _ => &[],
    }
}

/// A unit displayed with a live value
#[derive(Clone, Debug, PartialEq)]
pub struct PinnedUnit {
    pub unit: &'static Unit,
    pub category_id: &'static str,
    pub value: f64,
}

/// Pinned units of one active category, kept mutually consistent
pub struct PinnedUnitStore<S: PinStorage> {
    storage: S,
    category: Option<&'static UnitCategory>,
    pinned: Vec<PinnedUnit>,
}

impl<S: PinStorage> PinnedUnitStore<S> {
    /// Create a store with no active category
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            category: None,
            pinned: Vec::new(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn active_category(&self) -> Option<&'static UnitCategory> {
        self.category
    }

    /// Pinned units in display order
    pub fn pinned(&self) -> &[PinnedUnit] {
        &self.pinned
    }

    pub fn is_pinned(&self, unit_id: &str) -> bool {
        self.pinned.iter().any(|p| p.unit.id == unit_id)
    }

    /// Current value of a pinned unit
    pub fn value_of(&self, unit_id: &str) -> Option<f64> {
        self.pinned
            .iter()
            .find(|p| p.unit.id == unit_id)
            .map(|p| p.value)
    }

    /// Switch to `category_id`, loading its pinned ids with every value at zero
    ///
    /// Falls back to [`default_pins`] when nothing is stored or the stored list
    /// cannot be read. Ids that no longer exist in the category are skipped.
    pub fn set_category(&mut self, category_id: &str) -> Result<(), StoreError> {
        let category = catalog::get_category(category_id)
            .ok_or_else(|| StoreError::CategoryNotFound(category_id.to_string()))?;

        let stored = match self.storage.load_pins(category_id) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Using default pins for {}: {}", category_id, e);
                None
            }
        };

        let ids: Vec<String> = match stored {
            Some(ids) => ids,
            None => default_pins(category_id)
                .iter()
                .map(|id| id.to_string())
                .collect(),
        };

        self.category = Some(category);
        self.pinned = resolve_pins(category, &ids);

        tracing::debug!(
            "Active category {} with {} pinned units",
            category.id,
            self.pinned.len()
        );
        Ok(())
    }

    /// Set `unit_id` to `raw_value` and recompute every other pinned unit from it
    ///
    /// A sibling whose conversion fails keeps its previous value; the rest
    /// still update.
    pub fn update_value(&mut self, unit_id: &str, raw_value: f64) {
        let Some(category) = self.category else {
            tracing::debug!("Ignoring update of {} without an active category", unit_id);
            return;
        };

        for pinned in &mut self.pinned {
            if pinned.unit.id == unit_id {
                pinned.value = raw_value;
                continue;
            }

            match convert::convert(raw_value, unit_id, pinned.unit.id, category.id) {
                Ok(value) => pinned.value = value,
                Err(e) => {
                    tracing::warn!("Keeping stale value for {}: {}", pinned.unit.id, e);
                }
            }
        }
    }

    /// Pin `unit` at the end of the list
    ///
    /// Returns `Ok(false)` if it was already pinned. The new value is converted
    /// from the first pinned unit, or zero when nothing else is pinned.
    pub fn pin_unit(&mut self, unit: &Unit) -> Result<bool, StoreError> {
        let category = self.category.ok_or(StoreError::NoActiveCategory)?;

        let unit = category
            .unit(unit.id)
            .filter(|u| *u == unit)
            .ok_or_else(|| StoreError::UnitNotInCategory {
                unit: unit.id.to_string(),
                category: category.id.to_string(),
            })?;

        if self.is_pinned(unit.id) {
            return Ok(false);
        }

        let value = match self.pinned.first() {
            Some(first) => initial_value(first, unit, category),
            None => 0.0,
        };

        self.pinned.push(PinnedUnit {
            unit,
            category_id: category.id,
            value,
        });
        tracing::debug!("Pinned {} in {}", unit.id, category.id);

        self.persist(category)?;
        Ok(true)
    }

    /// Remove `unit_id` from the pinned list
    ///
    /// Returns `Ok(false)` if it was not pinned.
    pub fn unpin_unit(&mut self, unit_id: &str) -> Result<bool, StoreError> {
        let category = self.category.ok_or(StoreError::NoActiveCategory)?;

        let Some(pos) = self.pinned.iter().position(|p| p.unit.id == unit_id) else {
            return Ok(false);
        };

        self.pinned.remove(pos);
        tracing::debug!("Unpinned {} from {}", unit_id, category.id);

        self.persist(category)?;
        Ok(true)
    }

    /// Replace the pinned list with the category defaults, all values zero
    pub fn reset_pins(&mut self) -> Result<(), StoreError> {
        let category = self.category.ok_or(StoreError::NoActiveCategory)?;

        let ids: Vec<String> = default_pins(category.id)
            .iter()
            .map(|id| id.to_string())
            .collect();
        self.pinned = resolve_pins(category, &ids);

        self.persist(category)
    }

    /// Units of the active category that are not pinned, in catalog order
    pub fn available_units(&self) -> Vec<&'static Unit> {
        match self.category {
            Some(category) => category
                .units
                .iter()
                .filter(|u| !self.is_pinned(u.id))
                .collect(),
            None => Vec::new(),
        }
    }

    fn persist(&mut self, category: &UnitCategory) -> Result<(), StoreError> {
        let ids: Vec<String> = self.pinned.iter().map(|p| p.unit.id.to_string()).collect();
        self.storage.save_pins(category.id, &ids)?;
        Ok(())
    }
}

fn resolve_pins(category: &'static UnitCategory, ids: &[String]) -> Vec<PinnedUnit> {
    let mut pinned: Vec<PinnedUnit> = Vec::with_capacity(ids.len());

    for id in ids {
        if pinned.iter().any(|p| p.unit.id == id.as_str()) {
            continue;
        }
        match category.unit(id) {
            Some(unit) => pinned.push(PinnedUnit {
                unit,
                category_id: category.id,
                value: 0.0,
            }),
            None => {
                tracing::warn!("Skipping unknown pinned unit {} in {}", id, category.id);
            }
        }
    }

    pinned
}

fn initial_value(first: &PinnedUnit, unit: &Unit, category: &UnitCategory) -> f64 {
    match convert::convert_between(first.value, first.unit, unit, category) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Starting {} at zero: {}", unit.id, e);
            0.0
        }
    }
}
