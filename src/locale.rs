//! Number locale selection.
//!
//! This module maps a locale tag onto the separators used when grouping
//! formatted values.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Locales supported by the value formatter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum NumberLocale {
    #[default]
    #[strum(serialize = "en", serialize = "en-US", serialize = "en-GB")]
    English,
    #[strum(serialize = "de", serialize = "de-DE", serialize = "de-AT")]
    German,
    #[strum(serialize = "fr", serialize = "fr-FR")]
    French,
    #[strum(serialize = "es", serialize = "es-ES")]
    Spanish,
    #[strum(serialize = "it", serialize = "it-IT")]
    Italian,
    #[strum(serialize = "ch", serialize = "de-CH")]
    Swiss,
}

impl NumberLocale {
    /// Primary locale tag
    pub fn locale_code(&self) -> &'static str {
        match self {
            NumberLocale::English => "en",
            NumberLocale::German => "de",
            NumberLocale::French => "fr",
            NumberLocale::Spanish => "es",
            NumberLocale::Italian => "it",
            NumberLocale::Swiss => "de-CH",
        }
    }

    /// Separator placed between groups of three integer digits
    pub fn group_separator(&self) -> &'static str {
        match self {
            NumberLocale::English => ",",
            NumberLocale::German | NumberLocale::Spanish | NumberLocale::Italian => ".",
            // narrow no-break space
            NumberLocale::French => "\u{202f}",
            NumberLocale::Swiss => "’",
        }
    }

    pub fn decimal_separator(&self) -> &'static str {
        match self {
            NumberLocale::English | NumberLocale::Swiss => ".",
            NumberLocale::German
            | NumberLocale::French
            | NumberLocale::Spanish
            | NumberLocale::Italian => ",",
        }
    }

    /// Smallest integer part that gets grouped
    ///
    /// Spanish leaves four-digit numbers ungrouped ("1000" but "10.000").
    pub fn min_grouping_digits(&self) -> usize {
        match self {
            NumberLocale::Spanish => 5,
            _ => 4,
        }
    }
}
