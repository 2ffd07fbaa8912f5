//! Free-text quantity parsing.
//!
//! Extracts the first `number unit` pair from text such as `"12km"`,
//! `"3.5 miles"`, `"98.6 °F"` or `"2 fl oz to ml"` and resolves the unit
//! against the catalog.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::catalog;
use crate::units::{Unit, UnitCategory};

/// Longest unit phrase tried, in words
const MAX_UNIT_WORDS: usize = 3;

static QUANTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-]?\d+(?:[.,]\d+)*(?:[eE][+-]?\d+)?)\s*(.*)")
        .expect("quantity pattern is valid")
});

/// Spellings that are neither a unit's id, symbol nor name
const ALIASES: &[(&str, &str)] = &[
    ("feet", "ft"),
    ("foot", "ft"),
    ("inches", "in"),
    ("metre", "m"),
    ("metres", "m"),
    ("kilometre", "km"),
    ("kilometres", "km"),
    ("centimetre", "cm"),
    ("centimetres", "cm"),
    ("millimetre", "mm"),
    ("millimetres", "mm"),
    ("litre", "l"),
    ("litres", "l"),
    ("millilitre", "ml"),
    ("millilitres", "ml"),
    ("lbs", "lb"),
    ("pounds", "lb"),
    ("kph", "kmh"),
    ("mpg", "mpg_us"),
    ("degc", "c"),
    ("degf", "f"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty text")]
    Empty,

    #[error("No number found in '{0}'")]
    NoNumber(String),

    #[error("Could not parse unit from text: {0}")]
    UnknownUnit(String),
}

/// An amount together with the unit it was written in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub amount: f64,
    pub unit: &'static Unit,
    pub category: &'static UnitCategory,
}

/// Parse the first quantity found in `text`
pub fn parse_quantity(text: &str) -> Result<Quantity, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let caps = QUANTITY_RE
        .captures(text)
        .ok_or_else(|| ParseError::NoNumber(text.to_string()))?;

    let amount =
        parse_amount(&caps[1]).ok_or_else(|| ParseError::NoNumber(text.to_string()))?;

    let words: Vec<&str> = caps
        .get(2)
        .map(|m| m.as_str().split_whitespace().take(MAX_UNIT_WORDS).collect())
        .unwrap_or_default();

    // Longest phrase first so "fl oz" wins over "fl"
    for len in (1..=words.len()).rev() {
        let phrase = words[..len].join(" ");
        if let Some((unit, category)) = resolve_unit(&phrase) {
            tracing::debug!("Parsed {} {} from '{}'", amount, unit.id, text);
            return Ok(Quantity {
                amount,
                unit,
                category,
            });
        }
    }

    Err(ParseError::UnknownUnit(text.to_string()))
}

/// Parse a number that may use `,` for thousands or as the decimal mark
///
/// `1,000` and `1,234.5` are grouped, `1,5` is a decimal comma. A single
/// `.` is always the decimal point; several dots are thousands groups.
fn parse_amount(raw: &str) -> Option<f64> {
    let (mantissa, exponent) = match raw.find(['e', 'E']) {
        Some(pos) => raw.split_at(pos),
        None => (raw, ""),
    };

    let commas = mantissa.matches(',').count();
    let dots = mantissa.matches('.').count();

    let normalized = if commas > 0 && dots > 0 {
        // whichever separator comes last is the decimal mark
        if mantissa.rfind('.') > mantissa.rfind(',') {
            if dots > 1 || !is_grouped(mantissa.split('.').next()?, ',') {
                return None;
            }
            mantissa.replace(',', "")
        } else {
            if commas > 1 || !is_grouped(mantissa.split(',').next()?, '.') {
                return None;
            }
            mantissa.replace('.', "").replace(',', ".")
        }
    } else if commas > 0 {
        if is_grouped(mantissa, ',') {
            mantissa.replace(',', "")
        } else if commas == 1 {
            mantissa.replace(',', ".")
        } else {
            return None;
        }
    } else if dots > 1 {
        if !is_grouped(mantissa, '.') {
            return None;
        }
        mantissa.replace('.', "")
    } else {
        mantissa.to_string()
    };

    format!("{}{}", normalized, exponent).parse().ok()
}

// "1,234,567" style: a lead of one to three digits, then groups of three
fn is_grouped(digits: &str, separator: char) -> bool {
    let digits = digits.trim_start_matches(['+', '-']);
    let mut groups = digits.split(separator);
    let lead_ok = groups.next().is_some_and(|g| (1..=3).contains(&g.len()));
    let rest: Vec<&str> = groups.collect();
    lead_ok && !rest.is_empty() && rest.iter().all(|g| g.len() == 3)
}

/// Resolve a unit by id, then symbol, then case-insensitive name or alias
pub fn resolve_unit(token: &str) -> Option<(&'static Unit, &'static UnitCategory)> {
    if let Some(found) = catalog::get_unit(token) {
        return Some(found);
    }

    let by_symbol = |symbol: &str| {
        catalog::catalog()
            .iter()
            .find_map(|c| c.units.iter().find(|u| u.symbol == symbol).map(|u| (u, c)))
    };
    if let Some(found) = by_symbol(token) {
        return Some(found);
    }

    let lower = token.to_lowercase();
    if let Some(&(_, id)) = ALIASES.iter().find(|(alias, _)| *alias == lower) {
        return catalog::get_unit(id);
    }

    catalog::catalog().iter().find_map(|c| {
        c.units
            .iter()
            .find(|u| {
                let name = u.name.to_lowercase();
                u.id == lower
                    || u.symbol.to_lowercase() == lower
                    || name == lower
                    || format!("{}s", name) == lower
            })
            .map(|u| (u, c))
    })
}
