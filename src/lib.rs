//! UnitDeck - multi-category unit conversion with pinned units
//!
//! This library converts values between units of the same category and keeps
//! a set of "pinned" units mutually consistent while one of them is edited.
//!
//! ## Module Structure
//!
//! - [`units`] - Unit, category and scale types
//! - [`catalog`] - Static catalog of categories and units
//! - [`convert`] - Conversion engine (linear, temperature, fuel economy)
//! - [`pinned`] - Pinned-unit store for the active category
//! - [`storage`] - Persistence backends for pinned unit ids
//! - [`format`] - Display formatting of converted values
//! - [`locale`] - Number locale separators
//! - [`quantity`] - Free-text quantity parsing
//! - [`settings`] - User settings persistence

pub mod catalog;
pub mod convert;
pub mod format;
pub mod locale;
pub mod pinned;
pub mod quantity;
pub mod settings;
pub mod storage;
pub mod units;

pub use convert::{convert, ConversionError};
pub use format::format_value;
pub use pinned::{PinnedUnit, PinnedUnitStore, StoreError};
