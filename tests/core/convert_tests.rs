//! Tests for the conversion engine
//!
//! Tests cover:
//! - Numeric contracts for linear, temperature and fuel economy conversions
//! - Identity and round-trip properties across the catalog
//! - Error reporting for unknown ids

use crate::common::{assert_close, assert_relative};
use unitdeck::catalog::catalog;
use unitdeck::convert::{convert, round_result, ConversionError};
use unitdeck::units::CategoryKind;

// ============================================
// Linear Conversion Tests
// ============================================

#[test]
fn test_km_to_m() {
    assert_eq!(convert(1.0, "km", "m", "length").unwrap(), 1000.0);
}

#[test]
fn test_mile_to_km() {
    assert_close(convert(1.0, "mi", "km", "length").unwrap(), 1.609344, 1e-9);
}

#[test]
fn test_meter_to_feet() {
    assert_close(convert(1.0, "m", "ft", "length").unwrap(), 3.28084, 1e-5);
}

#[test]
fn test_pounds_to_kilograms() {
    assert_close(convert(10.0, "lb", "kg", "weight").unwrap(), 4.535924, 1e-9);
}

#[test]
fn test_cooking_uses_its_own_base() {
    assert_close(convert(1.0, "cup", "ml", "cooking").unwrap(), 236.588237, 2e-6);
    assert_close(convert(1.0, "cup", "ml", "volume").unwrap(), 236.588237, 2e-6);
    assert_eq!(convert(1.0, "cup_metric", "ml", "cooking").unwrap(), 250.0);
}

#[test]
fn test_data_binary_prefixes() {
    assert_eq!(convert(1.0, "gib", "mib", "data").unwrap(), 1024.0);
    assert_eq!(convert(1.0, "b", "bit", "data").unwrap(), 8.0);
}

#[test]
fn test_astronomical_distance_keeps_magnitude() {
    assert_eq!(convert(1.0, "au", "m", "length").unwrap(), 1.495978707e11);
    assert_close(convert(1.0, "pc", "ly", "length").unwrap(), 3.261564, 1e-6);
}

#[test]
fn test_results_rounded_to_six_places() {
    // 1 mm in miles is ~6.2e-7, below the rounding floor
    assert_eq!(convert(1.0, "mm", "mi", "length").unwrap(), 0.000001);
    assert_eq!(convert(1.0, "um", "mi", "length").unwrap(), 0.0);
    assert_eq!(round_result(2.0000004), 2.0);
}

#[test]
fn test_huge_results_stay_finite() {
    let meters = convert(1e303, "km", "m", "length").unwrap();
    assert!(meters.is_finite());
    assert_relative(meters, 1e306, 1e-12);

    assert_eq!(round_result(f64::MAX), f64::MAX);
    assert_eq!(round_result(1e15 + 0.5), 1e15 + 0.5);
}

#[test]
fn test_negative_values() {
    assert_eq!(convert(-5.0, "km", "m", "length").unwrap(), -5000.0);
    assert_eq!(convert(-40.0, "c", "f", "temperature").unwrap(), -40.0);
}

// ============================================
// Temperature Tests
// ============================================

#[test]
fn test_temperature_fixed_points() {
    assert_eq!(convert(0.0, "c", "f", "temperature").unwrap(), 32.0);
    assert_eq!(convert(100.0, "c", "f", "temperature").unwrap(), 212.0);
    assert_eq!(convert(0.0, "c", "k", "temperature").unwrap(), 273.15);
}

#[test]
fn test_body_temperature() {
    assert_close(convert(98.6, "f", "c", "temperature").unwrap(), 37.0, 1e-6);
    assert_close(convert(98.6, "f", "k", "temperature").unwrap(), 310.15, 1e-6);
}

#[test]
fn test_exotic_scales() {
    assert_close(convert(0.0, "k", "r", "temperature").unwrap(), 0.0, 1e-9);
    assert_close(convert(100.0, "c", "re", "temperature").unwrap(), 80.0, 1e-9);
    assert_close(convert(100.0, "c", "n", "temperature").unwrap(), 33.0, 1e-9);
    assert_close(convert(0.0, "c", "de", "temperature").unwrap(), 150.0, 1e-9);
    assert_close(convert(100.0, "c", "ro", "temperature").unwrap(), 60.0, 1e-9);
    assert_close(convert(60.0, "ro", "f", "temperature").unwrap(), 212.0, 1e-6);
}

// ============================================
// Fuel Economy Tests
// ============================================

#[test]
fn test_fuel_l100km_to_kmpl() {
    assert_eq!(convert(10.0, "l100km", "kmpl", "fuel").unwrap(), 10.0);
    assert_eq!(convert(4.0, "l100km", "kmpl", "fuel").unwrap(), 25.0);
}

#[test]
fn test_fuel_zero_is_guarded() {
    assert_eq!(convert(0.0, "l100km", "kmpl", "fuel").unwrap(), 0.0);
    assert_eq!(convert(0.0, "kmpl", "l100km", "fuel").unwrap(), 0.0);
    assert_eq!(convert(0.0, "mpg_us", "l100km", "fuel").unwrap(), 0.0);
    assert_eq!(convert(-8.0, "l100km", "mpg_us", "fuel").unwrap(), 0.0);
}

#[test]
fn test_fuel_reciprocal_property() {
    for v in [0.5, 1.0, 3.0, 12.5, 40.0, 250.0] {
        let result = convert(v, "kmpl", "l100km", "fuel").unwrap();
        assert_close(result, 100.0 / v, 1e-6);
    }
}

#[test]
fn test_fuel_mpg() {
    // 10 L/100km is roughly 23.52 US mpg and 28.25 UK mpg
    assert_close(convert(10.0, "l100km", "mpg_us", "fuel").unwrap(), 23.521442, 1e-5);
    assert_close(convert(10.0, "l100km", "mpg_uk", "fuel").unwrap(), 28.248109, 1e-5);
    assert_close(convert(1.0, "mpg_us", "kmpl", "fuel").unwrap(), 0.425144, 1e-9);
}

// ============================================
// Property Tests
// ============================================

#[test]
fn test_identity_for_every_unit() {
    for category in catalog() {
        for unit in &category.units {
            for x in [0.0, -17.25, 1e-9, 123456.789123456] {
                assert_eq!(
                    convert(x, unit.id, unit.id, category.id).unwrap(),
                    x,
                    "{} in {}",
                    unit.id,
                    category.id
                );
            }
        }
    }
}

#[test]
fn test_linear_round_trip() {
    let x = 42.5;
    for category in catalog().iter().filter(|c| c.kind == CategoryKind::Linear) {
        for a in &category.units {
            for b in &category.units {
                let ratio = a.base_multiplier().unwrap() / b.base_multiplier().unwrap();
                // six decimals of an intermediate below 0.1 cannot hold 1e-5 precision
                if x * ratio < 0.1 {
                    continue;
                }
                let there = convert(x, a.id, b.id, category.id).unwrap();
                let back = convert(there, b.id, a.id, category.id).unwrap();
                assert_relative(back, x, 1e-5);
            }
        }
    }
}

#[test]
fn test_temperature_round_trip() {
    let category = unitdeck::catalog::get_category("temperature").unwrap();
    for x in [-40.0, 0.0, 25.0, 451.0] {
        for a in &category.units {
            for b in &category.units {
                let there = convert(x, a.id, b.id, "temperature").unwrap();
                let back = convert(there, b.id, a.id, "temperature").unwrap();
                assert_close(back, x, 1e-5);
            }
        }
    }
}

#[test]
fn test_fuel_round_trip() {
    let category = unitdeck::catalog::get_category("fuel").unwrap();
    for x in [4.0, 8.0, 15.5, 30.0] {
        for a in &category.units {
            for b in &category.units {
                let there = convert(x, a.id, b.id, "fuel").unwrap();
                let back = convert(there, b.id, a.id, "fuel").unwrap();
                assert_relative(back, x, 1e-5);
            }
        }
    }
}

// ============================================
// Error Tests
// ============================================

#[test]
fn test_unknown_category() {
    let err = convert(1.0, "m", "ft", "distance").unwrap_err();
    assert_eq!(err, ConversionError::CategoryNotFound("distance".to_string()));
}

#[test]
fn test_unknown_unit() {
    let err = convert(1.0, "m", "furlongs", "length").unwrap_err();
    assert!(matches!(err, ConversionError::UnitNotFound { ref unit, .. } if unit == "furlongs"));

    let err = convert(1.0, "parsecs", "m", "length").unwrap_err();
    assert!(matches!(err, ConversionError::UnitNotFound { ref unit, .. } if unit == "parsecs"));
}

#[test]
fn test_cross_category_pair_rejected() {
    // "f" exists only in temperature
    let err = convert(1.0, "f", "m", "length").unwrap_err();
    assert!(matches!(err, ConversionError::UnitNotFound { ref category, .. } if category == "length"));

    // "c" in cooking does not exist even though temperature has it
    assert!(convert(1.0, "c", "ml", "cooking").is_err());
}

#[test]
fn test_error_display() {
    let err = ConversionError::UnitNotFound {
        unit: "x".to_string(),
        category: "length".to_string(),
    };
    assert_eq!(err.to_string(), "Unit 'x' not found in category 'length'");
}
