//! Unit and category types.
//!
//! Every unit belongs to exactly one [`UnitCategory`]. How a unit maps onto its
//! category's pivot is described by [`UnitScale`]: linear units carry a
//! multiplier relative to the category's base unit, while temperature and fuel
//! economy units name a scale handled by a dedicated formula.

use serde::Serialize;
use strum::{AsRefStr, EnumIter};

/// How values in a category are related to each other
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// `value_in_base = value * base_multiplier`
    Linear,
    /// Affine scales pivoting through Celsius
    Temperature,
    /// Mixed direct/reciprocal scales pivoting through km/L
    FuelEconomy,
}

/// Temperature scale, converted through Celsius
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, EnumIter)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
    Reaumur,
    Newton,
    Delisle,
    Romer,
}

impl TemperatureScale {
    /// Convert a reading on this scale to Celsius
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value,
            TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureScale::Kelvin => value - 273.15,
            TemperatureScale::Rankine => (value - 491.67) * 5.0 / 9.0,
            TemperatureScale::Reaumur => value * 5.0 / 4.0,
            TemperatureScale::Newton => value * 100.0 / 33.0,
            TemperatureScale::Delisle => 100.0 - value * 2.0 / 3.0,
            TemperatureScale::Romer => (value - 7.5) * 40.0 / 21.0,
        }
    }

    /// Convert a Celsius reading to this scale
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => celsius,
            TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureScale::Kelvin => celsius + 273.15,
            TemperatureScale::Rankine => (celsius + 273.15) * 9.0 / 5.0,
            TemperatureScale::Reaumur => celsius * 4.0 / 5.0,
            TemperatureScale::Newton => celsius * 33.0 / 100.0,
            TemperatureScale::Delisle => (100.0 - celsius) * 3.0 / 2.0,
            TemperatureScale::Romer => celsius * 21.0 / 40.0 + 7.5,
        }
    }
}

/// km/L per US mile per gallon
pub const KMPL_PER_MPG_US: f64 = 0.425144;

/// km/L per imperial mile per gallon
pub const KMPL_PER_MPG_UK: f64 = 0.354006;

/// Fuel economy scale, converted through km/L
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, EnumIter)]
pub enum FuelEconomyScale {
    KmPerLiter,
    MpgUs,
    MpgUk,
    /// Consumption rather than economy: reciprocal to the others
    LitersPer100Km,
}

impl FuelEconomyScale {
    /// Normalize a reading on this scale to km/L
    ///
    /// Zero or negative L/100km readings map to 0 instead of dividing.
    pub fn to_km_per_liter(&self, value: f64) -> f64 {
        match self {
            FuelEconomyScale::KmPerLiter => value,
            FuelEconomyScale::MpgUs => value * KMPL_PER_MPG_US,
            FuelEconomyScale::MpgUk => value * KMPL_PER_MPG_UK,
            FuelEconomyScale::LitersPer100Km => reciprocal_100(value),
        }
    }

    /// Convert a km/L reading to this scale
    pub fn from_km_per_liter(&self, km_per_liter: f64) -> f64 {
        match self {
            FuelEconomyScale::KmPerLiter => km_per_liter,
            FuelEconomyScale::MpgUs => km_per_liter / KMPL_PER_MPG_US,
            FuelEconomyScale::MpgUk => km_per_liter / KMPL_PER_MPG_UK,
            FuelEconomyScale::LitersPer100Km => reciprocal_100(km_per_liter),
        }
    }
}

fn reciprocal_100(value: f64) -> f64 {
    if value > 0.0 {
        100.0 / value
    } else {
        0.0
    }
}

/// How a unit relates to its category's pivot
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitScale {
    Linear { base_multiplier: f64 },
    Temperature(TemperatureScale),
    FuelEconomy(FuelEconomyScale),
}

impl UnitScale {
    /// The category kind this scale can live in
    pub fn kind(&self) -> CategoryKind {
        match self {
            UnitScale::Linear { .. } => CategoryKind::Linear,
            UnitScale::Temperature(_) => CategoryKind::Temperature,
            UnitScale::FuelEconomy(_) => CategoryKind::FuelEconomy,
        }
    }

    /// Whether this unit is the reference point of its category
    pub fn is_pivot(&self) -> bool {
        match self {
            UnitScale::Linear { base_multiplier } => *base_multiplier == 1.0,
            UnitScale::Temperature(scale) => *scale == TemperatureScale::Celsius,
            UnitScale::FuelEconomy(scale) => *scale == FuelEconomyScale::KmPerLiter,
        }
    }
}

/// A single convertible unit
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Unit {
    /// Identifier, unique within its category only
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub scale: UnitScale,
}

impl Unit {
    /// Multiplier to the category base unit, for linear units
    pub fn base_multiplier(&self) -> Option<f64> {
        match self.scale {
            UnitScale::Linear { base_multiplier } => Some(base_multiplier),
            _ => None,
        }
    }
}

/// A conversion domain within which units are mutually convertible
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UnitCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub kind: CategoryKind,
    /// Display order
    pub units: Vec<Unit>,
}

impl UnitCategory {
    /// Find a unit of this category by id
    pub fn unit(&self, unit_id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == unit_id)
    }

    /// The unit every other unit in this category is measured against
    pub fn pivot(&self) -> Option<&Unit> {
        self.units.iter().find(|u| u.scale.is_pivot())
    }
}
