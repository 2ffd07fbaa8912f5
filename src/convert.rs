//! Conversion engine.
//!
//! Converts a value between two units of the same category. Linear categories
//! scale through the base unit, temperature pivots through Celsius, and fuel
//! economy pivots through km/L with L/100km handled as a reciprocal. Results
//! are rounded to six decimal places.

use thiserror::Error;

use crate::catalog;
use crate::units::{CategoryKind, Unit, UnitCategory, UnitScale};

/// Decimal places kept in every conversion result
pub const RESULT_DECIMALS: i32 = 6;

/// Errors raised by the conversion engine
///
/// These all indicate ids that do not exist in the catalog. Callers that work
/// from catalog data should never see them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Unknown category: {0}")]
    CategoryNotFound(String),

    #[error("Unit '{unit}' not found in category '{category}'")]
    UnitNotFound { unit: String, category: String },

    #[error("Unknown temperature unit: {0}")]
    UnknownTemperatureUnit(String),

    #[error("Unknown fuel economy unit: {0}")]
    UnknownFuelUnit(String),

    #[error("Unit '{unit}' is not a linear unit of category '{category}'")]
    ScaleMismatch { unit: String, category: String },
}

/// Convert `value` from one unit to another within a category
///
/// Identical unit ids return `value` untouched, without consulting the catalog.
pub fn convert(
    value: f64,
    from_unit_id: &str,
    to_unit_id: &str,
    category_id: &str,
) -> Result<f64, ConversionError> {
    if from_unit_id == to_unit_id {
        return Ok(value);
    }

    let category = catalog::get_category(category_id)
        .ok_or_else(|| ConversionError::CategoryNotFound(category_id.to_string()))?;
    let from = find_unit(category, from_unit_id)?;
    let to = find_unit(category, to_unit_id)?;

    convert_between(value, from, to, category)
}

/// Convert between two already-resolved units of `category`
pub fn convert_between(
    value: f64,
    from: &Unit,
    to: &Unit,
    category: &UnitCategory,
) -> Result<f64, ConversionError> {
    if from.id == to.id {
        return Ok(value);
    }

    let result = match category.kind {
        CategoryKind::Linear => convert_linear(value, from, to, category)?,
        CategoryKind::Temperature => convert_temperature(value, from, to)?,
        CategoryKind::FuelEconomy => convert_fuel_economy(value, from, to)?,
    };

    tracing::debug!(
        "{} {} -> {} {} ({})",
        value,
        from.id,
        result,
        to.id,
        category.id
    );

    Ok(round_result(result))
}

/// Magnitude above which f64 no longer resolves millionths
const ROUNDING_LIMIT: f64 = 1e15;

/// Round to [`RESULT_DECIMALS`] places to drop floating-point noise
///
/// Non-finite values and magnitudes of at least `1e15` are returned as is.
pub fn round_result(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    let scale = 10f64.powi(RESULT_DECIMALS);
    (value * scale).round() / scale
}

fn find_unit<'a>(category: &'a UnitCategory, unit_id: &str) -> Result<&'a Unit, ConversionError> {
    category
        .unit(unit_id)
        .ok_or_else(|| ConversionError::UnitNotFound {
            unit: unit_id.to_string(),
            category: category.id.to_string(),
        })
}

fn convert_linear(
    value: f64,
    from: &Unit,
    to: &Unit,
    category: &UnitCategory,
) -> Result<f64, ConversionError> {
    let multiplier = |unit: &Unit| {
        unit.base_multiplier()
            .ok_or_else(|| ConversionError::ScaleMismatch {
                unit: unit.id.to_string(),
                category: category.id.to_string(),
            })
    };

    Ok(value * multiplier(from)? / multiplier(to)?)
}

fn convert_temperature(value: f64, from: &Unit, to: &Unit) -> Result<f64, ConversionError> {
    let celsius = match from.scale {
        UnitScale::Temperature(scale) => scale.to_celsius(value),
        _ => return Err(ConversionError::UnknownTemperatureUnit(from.id.to_string())),
    };

    match to.scale {
        UnitScale::Temperature(scale) => Ok(scale.from_celsius(celsius)),
        _ => Err(ConversionError::UnknownTemperatureUnit(to.id.to_string())),
    }
}

fn convert_fuel_economy(value: f64, from: &Unit, to: &Unit) -> Result<f64, ConversionError> {
    let km_per_liter = match from.scale {
        UnitScale::FuelEconomy(scale) => scale.to_km_per_liter(value),
        _ => return Err(ConversionError::UnknownFuelUnit(from.id.to_string())),
    };

    match to.scale {
        UnitScale::FuelEconomy(scale) => Ok(scale.from_km_per_liter(km_per_liter)),
        _ => Err(ConversionError::UnknownFuelUnit(to.id.to_string())),
    }
}
