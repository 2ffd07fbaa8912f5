//! Value formatting for display.
//!
//! Values inside `[1e-6, 1e9)` are printed with locale-aware digit grouping
//! and at most six fractional digits, trailing zeros dropped. Anything smaller
//! or larger switches to scientific notation with three fractional digits.

use crate::locale::NumberLocale;

/// Magnitudes below this are printed in scientific notation
pub const SCIENTIFIC_LOWER: f64 = 1e-6;

/// Magnitudes at or above this are printed in scientific notation
pub const SCIENTIFIC_UPPER: f64 = 1e9;

/// Maximum fractional digits in grouped output
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Format a value with the default locale
pub fn format_value(value: f64) -> String {
    format_value_in(value, NumberLocale::default())
}

/// Format a value with the separators of `locale`
pub fn format_value_in(value: f64, locale: NumberLocale) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&magnitude) {
        return format_scientific(value);
    }

    format_grouped(value, locale)
}

/// Scientific notation with three fractional digits and a signed exponent,
/// e.g. `1.496e+11` or `-2.500e-7`
pub fn format_scientific(value: f64) -> String {
    let formatted = format!("{:.3e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{}", mantissa, sign, exponent.abs())
        }
        None => formatted,
    }
}

fn format_grouped(value: f64, locale: NumberLocale) -> String {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    let (integer, fraction) = match trimmed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (trimmed, None),
    };

    let mut out = String::with_capacity(trimmed.len() + 8);
    if value < 0.0 && trimmed != "0" {
        out.push('-');
    }

    if integer.len() >= locale.min_grouping_digits() {
        out.push_str(&group_digits(integer, locale.group_separator()));
    } else {
        out.push_str(integer);
    }

    if let Some(fraction) = fraction {
        out.push_str(locale.decimal_separator());
        out.push_str(fraction);
    }

    out
}

// Insert `separator` between groups of three digits, counting from the right
fn group_digits(digits: &str, separator: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
