//! UnitDeck - unit conversion from the command line
//!
//! Converts values between units, parses free-text quantities and manages the
//! pinned units shown for each category.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use unitdeck::catalog;
use unitdeck::convert::convert_between;
use unitdeck::format::format_value_in;
use unitdeck::locale::NumberLocale;
use unitdeck::pinned::PinnedUnitStore;
use unitdeck::quantity::parse_quantity;
use unitdeck::settings::{UserSettings, SETTINGS_FILE};
use unitdeck::storage::{JsonPinStorage, PINNED_UNITS_FILE};

#[derive(Parser)]
#[command(name = "unitdeck")]
#[command(about = "Convert between units and manage pinned units", long_about = None)]
struct Cli {
    /// Locale used to format numbers (en, de, fr, es, it, de-CH)
    #[arg(short, long, global = true)]
    locale: Option<String>,

    /// Directory holding settings and pinned units
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all categories
    Categories,

    /// List the units of a category
    Units {
        /// Category id (e.g. "length")
        category: String,
    },

    /// Convert a value between two units
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Source unit id
        from: String,

        /// Target unit id
        to: String,

        /// Category id; defaults to the first category containing the source unit
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the default number locale, or set it when a tag is given
    Locale {
        /// Locale tag to save (e.g. "de", "fr-FR", "de-CH")
        tag: Option<String>,
    },

    /// Parse a quantity such as "12 km" and convert it
    Parse {
        text: String,

        /// Target unit id in the same category
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Show or change pinned units
    Pins {
        #[command(subcommand)]
        action: PinsCommand,
    },
}

#[derive(Subcommand)]
enum PinsCommand {
    /// Show the pinned units of a category
    Show {
        /// Category id; defaults to the last used category
        category: Option<String>,
    },

    /// Set the value of one pinned unit and show the others converted
    Set {
        category: String,
        unit: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Pin a unit
    Pin { category: String, unit: String },

    /// Unpin a unit
    Unpin { category: String, unit: String },

    /// Restore the default pinned units
    Reset { category: String },
}

/// Default category when no settings exist yet
const FALLBACK_CATEGORY: &str = "length";

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_dir = cli.config_dir.clone();
    let mut settings = match &config_dir {
        Some(dir) => UserSettings::load_from(&dir.join(SETTINGS_FILE)),
        None => UserSettings::load(),
    };

    let locale = match &cli.locale {
        Some(tag) => parse_locale(tag)?,
        None => settings.locale,
    };

    match cli.command {
        Commands::Categories => {
            for category in catalog::catalog() {
                println!(
                    "{:<12} {:<14} {:<13} {} units",
                    category.id,
                    category.name,
                    category.kind.as_ref(),
                    category.units.len()
                );
            }
        }
        Commands::Units { category } => {
            let category = catalog::get_category(&category)
                .ok_or_else(|| anyhow!("Unknown category: {}", category))?;
            for unit in &category.units {
                println!("{:<12} {:<10} {}", unit.id, unit.symbol, unit.name);
            }
        }
        Commands::Convert {
            value,
            from,
            to,
            category,
        } => {
            let category_id = match category {
                Some(id) => id,
                None => catalog::get_unit(&from)
                    .map(|(_, c)| c.id.to_string())
                    .ok_or_else(|| anyhow!("Unknown unit: {}", from))?,
            };
            let result = unitdeck::convert(value, &from, &to, &category_id)?;
            let symbol = catalog::get_category(&category_id)
                .and_then(|c| c.unit(&to))
                .map(|u| u.symbol)
                .unwrap_or(to.as_str());
            println!("{} {}", format_value_in(result, locale), symbol);
        }
        Commands::Locale { tag } => {
            if let Some(tag) = tag {
                settings.locale = parse_locale(&tag)?;
                save_settings(&settings, config_dir.as_deref())?;
            }
            println!("{}", settings.locale.locale_code());
        }
        Commands::Parse { text, to } => {
            let quantity = parse_quantity(&text)?;
            let target = match &to {
                Some(id) => quantity.category.unit(id).ok_or_else(|| {
                    anyhow!("Unit {} is not in category {}", id, quantity.category.id)
                })?,
                None => quantity.unit,
            };
            let result = convert_between(quantity.amount, quantity.unit, target, quantity.category)?;
            println!(
                "{} {} ({})",
                format_value_in(result, locale),
                target.symbol,
                quantity.category.name
            );
        }
        Commands::Pins { action } => {
            let mut store = PinnedUnitStore::new(pin_storage(config_dir.as_deref())?);

            let category = match &action {
                PinsCommand::Show { category } => category
                    .clone()
                    .or_else(|| settings.last_category.clone())
                    .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
                PinsCommand::Set { category, .. }
                | PinsCommand::Pin { category, .. }
                | PinsCommand::Unpin { category, .. }
                | PinsCommand::Reset { category } => category.clone(),
            };
            store.set_category(&category)?;

            match action {
                PinsCommand::Show { .. } => {}
                PinsCommand::Set { unit, value, .. } => {
                    if !store.is_pinned(&unit) {
                        bail!("Unit {} is not pinned in {}", unit, category);
                    }
                    store.update_value(&unit, value);
                }
                PinsCommand::Pin { unit, .. } => {
                    let found = store
                        .active_category()
                        .and_then(|c| c.unit(&unit))
                        .ok_or_else(|| anyhow!("Unit {} is not in category {}", unit, category))?;
                    if !store.pin_unit(found)? {
                        println!("{} is already pinned", unit);
                    }
                }
                PinsCommand::Unpin { unit, .. } => {
                    if !store.unpin_unit(&unit)? {
                        println!("{} was not pinned", unit);
                    }
                }
                PinsCommand::Reset { .. } => store.reset_pins()?,
            }

            for pinned in store.pinned() {
                println!(
                    "{:<10} {:>20} {}",
                    pinned.unit.id,
                    format_value_in(pinned.value, locale),
                    pinned.unit.symbol
                );
            }

            settings.last_category = Some(category);
            save_settings(&settings, config_dir.as_deref())?;
        }
    }

    Ok(())
}

fn parse_locale(tag: &str) -> Result<NumberLocale> {
    NumberLocale::from_str(tag).map_err(|_| anyhow!("Unknown locale: {}", tag))
}

/// Pinned-unit file inside `config_dir`, or the platform default
fn pin_storage(config_dir: Option<&Path>) -> Result<JsonPinStorage> {
    match config_dir {
        Some(dir) => Ok(JsonPinStorage::new(dir.join(PINNED_UNITS_FILE))),
        None => JsonPinStorage::default_location().context("Could not determine config directory"),
    }
}

fn save_settings(settings: &UserSettings, config_dir: Option<&Path>) -> Result<()> {
    match config_dir {
        Some(dir) => settings.save_to(&dir.join(SETTINGS_FILE)),
        None => settings.save(),
    }
    .context("Failed to save settings")
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
