//! Tests for free-text quantity parsing
//!
//! Tests cover:
//! - Parsing and converting in one step
//! - Id collisions resolved in catalog order
//! - Error cases

use crate::common::assert_close;
use unitdeck::convert::convert_between;
use unitdeck::quantity::{parse_quantity, resolve_unit, ParseError};

#[test]
fn test_parse_and_convert() {
    let q = parse_quantity("26.2 miles").unwrap();
    let km = q.category.unit("km").unwrap();
    let result = convert_between(q.amount, q.unit, km, q.category).unwrap();
    assert_close(result, 42.164813, 1e-6);
}

#[test]
fn test_parse_temperature_and_convert() {
    let q = parse_quantity("98.6°F").unwrap();
    let celsius = q.category.unit("c").unwrap();
    let result = convert_between(q.amount, q.unit, celsius, q.category).unwrap();
    assert_close(result, 37.0, 1e-6);
}

#[test]
fn test_parse_scientific_amount() {
    let q = parse_quantity("1.5e3 m").unwrap();
    assert_eq!(q.amount, 1500.0);
    assert_eq!(q.unit.id, "m");
}

#[test]
fn test_thousands_separators() {
    assert_eq!(parse_quantity("1,000 km").unwrap().amount, 1000.0);
    assert_eq!(parse_quantity("2,500,000 m").unwrap().amount, 2_500_000.0);
    assert_eq!(parse_quantity("1,234.5 kg").unwrap().amount, 1234.5);
}

#[test]
fn test_decimal_comma() {
    assert_eq!(parse_quantity("1,5 kg").unwrap().amount, 1.5);
    assert_eq!(parse_quantity("1.234,5 kg").unwrap().amount, 1234.5);
}

#[test]
fn test_ambiguous_separators_rejected() {
    assert!(matches!(
        parse_quantity("1,2,3 km"),
        Err(ParseError::NoNumber(_))
    ));
}

#[test]
fn test_collisions_follow_catalog_order() {
    // "ml" exists in volume and cooking; volume comes first
    let q = parse_quantity("250 ml").unwrap();
    assert_eq!(q.category.id, "volume");

    // "n" is the Newton scale in temperature before the newton in force
    let (unit, category) = resolve_unit("n").unwrap();
    assert_eq!((unit.id, category.id), ("n", "temperature"));
}

#[test]
fn test_aliases() {
    assert_eq!(parse_quantity("30 mpg").unwrap().unit.id, "mpg_us");
    assert_eq!(parse_quantity("100 kph").unwrap().unit.id, "kmh");
    assert_eq!(parse_quantity("12 lbs").unwrap().unit.id, "lb");
}

#[test]
fn test_unknown_unit() {
    assert!(matches!(
        parse_quantity("3 smoots"),
        Err(ParseError::UnknownUnit(_))
    ));
    assert!(resolve_unit("").is_none());
}
