//! Tests for value formatting
//!
//! Tests cover:
//! - Formatting of real conversion results
//! - Scientific switch-over thresholds
//! - Locale separators and parsing of locale tags

use std::str::FromStr;

use strum::IntoEnumIterator;
use unitdeck::convert::convert;
use unitdeck::format::{format_scientific, format_value, format_value_in, SCIENTIFIC_UPPER};
use unitdeck::locale::NumberLocale;

// ============================================
// Conversion Output Tests
// ============================================

#[test]
fn test_format_astronomical_unit() {
    let meters = convert(1.0, "au", "m", "length").unwrap();
    assert_eq!(format_value(meters), "1.496e+11");
}

#[test]
fn test_format_common_results() {
    assert_eq!(format_value(convert(1.0, "m", "ft", "length").unwrap()), "3.28084");
    assert_eq!(format_value(convert(1.0, "km", "m", "length").unwrap()), "1,000");
    assert_eq!(format_value(convert(100.0, "c", "f", "temperature").unwrap()), "212");
    assert_eq!(format_value(convert(-40.0, "f", "c", "temperature").unwrap()), "-40");
}

#[test]
fn test_format_tiny_result() {
    let grams = convert(1.0, "amu", "g", "weight").unwrap();
    // rounded to six decimals by the engine
    assert_eq!(format_value(grams), "0");

    let kg = convert(1.0, "mg", "kg", "weight").unwrap();
    assert_eq!(format_value(kg), "0.000001");
}

#[test]
fn test_format_large_data_sizes() {
    let bytes = convert(1.0, "tib", "b", "data").unwrap();
    assert_eq!(format_value(bytes), "1.100e+12");

    let bytes = convert(1.0, "mib", "b", "data").unwrap();
    assert_eq!(format_value(bytes), "1,048,576");
}

// ============================================
// Threshold Tests
// ============================================

#[test]
fn test_upper_threshold_is_exclusive() {
    assert_eq!(format_value(SCIENTIFIC_UPPER), "1.000e+9");
    assert_eq!(format_value(-SCIENTIFIC_UPPER), "-1.000e+9");
    assert_eq!(format_value(SCIENTIFIC_UPPER - 1.0), "999,999,999");
}

#[test]
fn test_fraction_digits_are_trimmed() {
    assert_eq!(format_value(2.50), "2.5");
    assert_eq!(format_value(0.1234567), "0.123457");
    assert_eq!(format_value(12.000000001), "12");
}

#[test]
fn test_scientific_rounding() {
    assert_eq!(format_scientific(123456789012.0), "1.235e+11");
    assert_eq!(format_scientific(0.00000012345), "1.235e-7");
}

// ============================================
// Locale Tests
// ============================================

#[test]
fn test_locale_from_tags() {
    assert_eq!(NumberLocale::from_str("en").unwrap(), NumberLocale::English);
    assert_eq!(NumberLocale::from_str("de-DE").unwrap(), NumberLocale::German);
    assert_eq!(NumberLocale::from_str("FR").unwrap(), NumberLocale::French);
    assert_eq!(NumberLocale::from_str("de-CH").unwrap(), NumberLocale::Swiss);
    assert!(NumberLocale::from_str("xx").is_err());
}

#[test]
fn test_locale_code_parses_back() {
    for locale in NumberLocale::iter() {
        assert_eq!(NumberLocale::from_str(locale.locale_code()).unwrap(), locale);
    }
}

#[test]
fn test_locale_large_values() {
    let value = 1234567.5;
    assert_eq!(format_value_in(value, NumberLocale::English), "1,234,567.5");
    assert_eq!(format_value_in(value, NumberLocale::German), "1.234.567,5");
    assert_eq!(format_value_in(value, NumberLocale::Italian), "1.234.567,5");
    assert_eq!(format_value_in(value, NumberLocale::Spanish), "1.234.567,5");
    assert_eq!(format_value_in(value, NumberLocale::Swiss), "1’234’567.5");
}

#[test]
fn test_locale_non_finite_unchanged() {
    for locale in [NumberLocale::German, NumberLocale::French] {
        assert_eq!(format_value_in(f64::NAN, locale), "NaN");
        assert_eq!(format_value_in(f64::INFINITY, locale), "∞");
    }
}
