//! Static unit catalog.
//!
//! The catalog holds every [`UnitCategory`] the converter knows about, in display
//! order. It is built once on first access and never mutated, so references into
//! it are `'static` and can be shared freely.
//!
//! Unit ids are only unique within a category. Cooking reuses several volume ids
//! (`ml`, `l`, `cup`, ...) with a different base unit, and lookups that do not
//! name a category resolve to the first category in catalog order.

use once_cell::sync::Lazy;

use crate::units::{
    CategoryKind, FuelEconomyScale, TemperatureScale, Unit, UnitCategory, UnitScale,
};

static CATALOG: Lazy<Vec<UnitCategory>> = Lazy::new(build_catalog);

/// All categories in display order
pub fn catalog() -> &'static [UnitCategory] {
    &CATALOG
}

/// Look up a category by its exact id
pub fn get_category(category_id: &str) -> Option<&'static UnitCategory> {
    CATALOG.iter().find(|c| c.id == category_id)
}

/// Units of a category in display order, empty when the category is unknown
pub fn get_units_for_category(category_id: &str) -> &'static [Unit] {
    get_category(category_id)
        .map(|c| c.units.as_slice())
        .unwrap_or(&[])
}

/// Find a unit by id across all categories
///
/// Ids may repeat across categories; the first category in catalog order wins.
pub fn get_unit(unit_id: &str) -> Option<(&'static Unit, &'static UnitCategory)> {
    CATALOG
        .iter()
        .find_map(|c| c.unit(unit_id).map(|u| (u, c)))
}

fn linear(id: &'static str, name: &'static str, symbol: &'static str, base_multiplier: f64) -> Unit {
    Unit {
        id,
        name,
        symbol,
        scale: UnitScale::Linear { base_multiplier },
    }
}

fn temperature(id: &'static str, name: &'static str, symbol: &'static str, scale: TemperatureScale) -> Unit {
    Unit {
        id,
        name,
        symbol,
        scale: UnitScale::Temperature(scale),
    }
}

fn fuel(id: &'static str, name: &'static str, symbol: &'static str, scale: FuelEconomyScale) -> Unit {
    Unit {
        id,
        name,
        symbol,
        scale: UnitScale::FuelEconomy(scale),
    }
}

fn category(
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    kind: CategoryKind,
    units: Vec<Unit>,
) -> UnitCategory {
    UnitCategory {
        id,
        name,
        icon,
        kind,
        units,
    }
}

fn build_catalog() -> Vec<UnitCategory> {
    let mut c = Vec::with_capacity(19);

    // ============================================
    // Length (base: meter)
    // ============================================
    c.push(category("length", "Length", "ruler", CategoryKind::Linear, vec![
        linear("m", "Meter", "m", 1.0),
        linear("km", "Kilometer", "km", 1000.0),
        linear("cm", "Centimeter", "cm", 0.01),
        linear("mm", "Millimeter", "mm", 0.001),
        linear("um", "Micrometer", "µm", 1e-6),
        linear("nm", "Nanometer", "nm", 1e-9),
        linear("angstrom", "Ångström", "Å", 1e-10),
        linear("mi", "Mile", "mi", 1609.344),
        linear("yd", "Yard", "yd", 0.9144),
        linear("ft", "Foot", "ft", 0.3048),
        linear("in", "Inch", "in", 0.0254),
        linear("mil", "Thou", "mil", 0.0000254),
        linear("fur", "Furlong", "fur", 201.168),
        linear("ftm", "Fathom", "ftm", 1.8288),
        linear("nmi", "Nautical Mile", "nmi", 1852.0),
        linear("au", "Astronomical Unit", "AU", 1.495978707e11),
        linear("ly", "Light Year", "ly", 9.4607304725808e15),
        linear("pc", "Parsec", "pc", 3.0856775814913673e16),
    ]));

    // ============================================
    // Weight (base: kilogram)
    // ============================================
    c.push(category("weight", "Weight", "scale", CategoryKind::Linear, vec![
        linear("kg", "Kilogram", "kg", 1.0),
        linear("g", "Gram", "g", 0.001),
        linear("mg", "Milligram", "mg", 1e-6),
        linear("ug", "Microgram", "µg", 1e-9),
        linear("t", "Metric Ton", "t", 1000.0),
        linear("lb", "Pound", "lb", 0.45359237),
        linear("oz", "Ounce", "oz", 0.028349523125),
        linear("st", "Stone", "st", 6.35029318),
        linear("ton_us", "Short Ton", "ton (US)", 907.18474),
        linear("ton_uk", "Long Ton", "ton (UK)", 1016.0469088),
        linear("ct", "Carat", "ct", 0.0002),
        linear("gr", "Grain", "gr", 0.00006479891),
        linear("ozt", "Troy Ounce", "oz t", 0.0311034768),
        linear("amu", "Atomic Mass Unit", "u", 1.6605390666e-27),
    ]));

    // ============================================
    // Volume (base: liter)
    // ============================================
    c.push(category("volume", "Volume", "beaker", CategoryKind::Linear, vec![
        linear("l", "Liter", "L", 1.0),
        linear("ml", "Milliliter", "mL", 0.001),
        linear("m3", "Cubic Meter", "m³", 1000.0),
        linear("cm3", "Cubic Centimeter", "cm³", 0.001),
        linear("gal", "US Gallon", "gal", 3.785411784),
        linear("gal_uk", "Imperial Gallon", "gal (UK)", 4.54609),
        linear("qt", "US Quart", "qt", 0.946352946),
        linear("pt", "US Pint", "pt", 0.473176473),
        linear("cup", "US Cup", "cup", 0.2365882365),
        linear("floz", "US Fluid Ounce", "fl oz", 0.0295735295625),
        linear("tbsp", "Tablespoon", "tbsp", 0.01478676478125),
        linear("tsp", "Teaspoon", "tsp", 0.00492892159375),
        linear("ft3", "Cubic Foot", "ft³", 28.316846592),
        linear("in3", "Cubic Inch", "in³", 0.016387064),
        linear("bbl", "Oil Barrel", "bbl", 158.987294928),
    ]));

    // ============================================
    // Temperature (pivot: Celsius)
    // ============================================
    c.push(category("temperature", "Temperature", "thermometer", CategoryKind::Temperature, vec![
        temperature("c", "Celsius", "°C", TemperatureScale::Celsius),
        temperature("f", "Fahrenheit", "°F", TemperatureScale::Fahrenheit),
        temperature("k", "Kelvin", "K", TemperatureScale::Kelvin),
        temperature("r", "Rankine", "°R", TemperatureScale::Rankine),
        temperature("re", "Réaumur", "°Ré", TemperatureScale::Reaumur),
        temperature("n", "Newton", "°N", TemperatureScale::Newton),
        temperature("de", "Delisle", "°De", TemperatureScale::Delisle),
        temperature("ro", "Rømer", "°Rø", TemperatureScale::Romer),
    ]));

    // ============================================
    // Area (base: square meter)
    // ============================================
    c.push(category("area", "Area", "square", CategoryKind::Linear, vec![
        linear("m2", "Square Meter", "m²", 1.0),
        linear("km2", "Square Kilometer", "km²", 1e6),
        linear("cm2", "Square Centimeter", "cm²", 1e-4),
        linear("mm2", "Square Millimeter", "mm²", 1e-6),
        linear("ha", "Hectare", "ha", 1e4),
        linear("ac", "Acre", "ac", 4046.8564224),
        linear("mi2", "Square Mile", "mi²", 2589988.110336),
        linear("yd2", "Square Yard", "yd²", 0.83612736),
        linear("ft2", "Square Foot", "ft²", 0.09290304),
        linear("in2", "Square Inch", "in²", 0.00064516),
    ]));

    // ============================================
    // Speed (base: meter per second)
    // ============================================
    c.push(category("speed", "Speed", "gauge", CategoryKind::Linear, vec![
        linear("mps", "Meter per Second", "m/s", 1.0),
        linear("kmh", "Kilometer per Hour", "km/h", 0.2777777777777778),
        linear("mph", "Mile per Hour", "mph", 0.44704),
        linear("kn", "Knot", "kn", 0.5144444444444445),
        linear("fps", "Foot per Second", "ft/s", 0.3048),
        linear("mach", "Mach", "M", 343.0),
        linear("c_light", "Speed of Light", "c", 299792458.0),
    ]));

    // ============================================
    // Energy (base: joule)
    // ============================================
    c.push(category("energy", "Energy", "zap", CategoryKind::Linear, vec![
        linear("j", "Joule", "J", 1.0),
        linear("kj", "Kilojoule", "kJ", 1000.0),
        linear("cal", "Calorie", "cal", 4.184),
        linear("kcal", "Kilocalorie", "kcal", 4184.0),
        linear("wh", "Watt Hour", "Wh", 3600.0),
        linear("kwh", "Kilowatt Hour", "kWh", 3.6e6),
        linear("btu", "British Thermal Unit", "BTU", 1055.05585262),
        linear("therm", "Therm", "thm", 105480400.0),
        linear("ev", "Electronvolt", "eV", 1.602176634e-19),
        linear("erg", "Erg", "erg", 1e-7),
        linear("ftlb", "Foot-Pound", "ft⋅lb", 1.3558179483314004),
    ]));

    // ============================================
    // Power (base: watt)
    // ============================================
    c.push(category("power", "Power", "bolt", CategoryKind::Linear, vec![
        linear("w", "Watt", "W", 1.0),
        linear("kw", "Kilowatt", "kW", 1000.0),
        linear("mw", "Megawatt", "MW", 1e6),
        linear("gw", "Gigawatt", "GW", 1e9),
        linear("hp", "Horsepower", "hp", 745.6998715822702),
        linear("ps", "Metric Horsepower", "PS", 735.49875),
        linear("btuh", "BTU per Hour", "BTU/h", 0.29307107017),
        linear("ftlbs", "Foot-Pound per Second", "ft⋅lb/s", 1.3558179483314004),
    ]));

    // ============================================
    // Data (base: byte)
    // ============================================
    c.push(category("data", "Data", "database", CategoryKind::Linear, vec![
        linear("b", "Byte", "B", 1.0),
        linear("bit", "Bit", "bit", 0.125),
        linear("kb", "Kilobyte", "kB", 1e3),
        linear("mb", "Megabyte", "MB", 1e6),
        linear("gb", "Gigabyte", "GB", 1e9),
        linear("tb", "Terabyte", "TB", 1e12),
        linear("pb", "Petabyte", "PB", 1e15),
        linear("kib", "Kibibyte", "KiB", 1024.0),
        linear("mib", "Mebibyte", "MiB", 1048576.0),
        linear("gib", "Gibibyte", "GiB", 1073741824.0),
        linear("tib", "Tebibyte", "TiB", 1099511627776.0),
    ]));

    // ============================================
    // Time (base: second)
    // ============================================
    c.push(category("time", "Time", "clock", CategoryKind::Linear, vec![
        linear("s", "Second", "s", 1.0),
        linear("ms", "Millisecond", "ms", 0.001),
        linear("us", "Microsecond", "µs", 1e-6),
        linear("ns", "Nanosecond", "ns", 1e-9),
        linear("min", "Minute", "min", 60.0),
        linear("h", "Hour", "h", 3600.0),
        linear("d", "Day", "d", 86400.0),
        linear("wk", "Week", "wk", 604800.0),
        linear("mo", "Month", "mo", 2629746.0),
        linear("yr", "Year", "yr", 31556952.0),
        linear("decade", "Decade", "dec", 315569520.0),
        linear("century", "Century", "c", 3155695200.0),
    ]));

    // ============================================
    // Pressure (base: pascal)
    // ============================================
    c.push(category("pressure", "Pressure", "gauge-circle", CategoryKind::Linear, vec![
        linear("pa", "Pascal", "Pa", 1.0),
        linear("kpa", "Kilopascal", "kPa", 1000.0),
        linear("mpa", "Megapascal", "MPa", 1e6),
        linear("hpa", "Hectopascal", "hPa", 100.0),
        linear("bar", "Bar", "bar", 100000.0),
        linear("mbar", "Millibar", "mbar", 100.0),
        linear("atm", "Atmosphere", "atm", 101325.0),
        linear("psi", "Pound per Square Inch", "psi", 6894.757293168),
        linear("mmhg", "Millimeter of Mercury", "mmHg", 133.322387415),
        linear("inhg", "Inch of Mercury", "inHg", 3386.389),
        linear("torr", "Torr", "Torr", 133.32236842105263),
    ]));

    // ============================================
    // Angle (base: degree)
    // ============================================
    c.push(category("angle", "Angle", "compass", CategoryKind::Linear, vec![
        linear("deg", "Degree", "°", 1.0),
        linear("rad", "Radian", "rad", 57.29577951308232),
        linear("mrad", "Milliradian", "mrad", 0.05729577951308232),
        linear("grad", "Gradian", "grad", 0.9),
        linear("arcmin", "Arcminute", "′", 0.016666666666666666),
        linear("arcsec", "Arcsecond", "″", 0.0002777777777777778),
        linear("turn", "Turn", "tr", 360.0),
    ]));

    // ============================================
    // Frequency (base: hertz)
    // ============================================
    c.push(category("frequency", "Frequency", "activity", CategoryKind::Linear, vec![
        linear("hz", "Hertz", "Hz", 1.0),
        linear("khz", "Kilohertz", "kHz", 1e3),
        linear("mhz", "Megahertz", "MHz", 1e6),
        linear("ghz", "Gigahertz", "GHz", 1e9),
        linear("thz", "Terahertz", "THz", 1e12),
        linear("rpm", "Revolutions per Minute", "rpm", 0.016666666666666666),
    ]));

    // ============================================
    // Force (base: newton)
    // ============================================
    c.push(category("force", "Force", "move", CategoryKind::Linear, vec![
        linear("n", "Newton", "N", 1.0),
        linear("kn", "Kilonewton", "kN", 1000.0),
        linear("dyn", "Dyne", "dyn", 1e-5),
        linear("lbf", "Pound-Force", "lbf", 4.4482216152605),
        linear("kgf", "Kilogram-Force", "kgf", 9.80665),
        linear("ozf", "Ounce-Force", "ozf", 0.27801385095378125),
        linear("pdl", "Poundal", "pdl", 0.138254954376),
    ]));

    // ============================================
    // Fuel economy (pivot: km per liter)
    // ============================================
    c.push(category("fuel", "Fuel Economy", "fuel", CategoryKind::FuelEconomy, vec![
        fuel("kmpl", "Kilometers per Liter", "km/L", FuelEconomyScale::KmPerLiter),
        fuel("l100km", "Liters per 100 km", "L/100km", FuelEconomyScale::LitersPer100Km),
        fuel("mpg_us", "Miles per Gallon (US)", "mpg (US)", FuelEconomyScale::MpgUs),
        fuel("mpg_uk", "Miles per Gallon (UK)", "mpg (UK)", FuelEconomyScale::MpgUk),
    ]));

    // ============================================
    // Density (base: kilogram per cubic meter)
    // ============================================
    c.push(category("density", "Density", "layers", CategoryKind::Linear, vec![
        linear("kgm3", "Kilogram per Cubic Meter", "kg/m³", 1.0),
        linear("gcm3", "Gram per Cubic Centimeter", "g/cm³", 1000.0),
        linear("gml", "Gram per Milliliter", "g/mL", 1000.0),
        linear("kgl", "Kilogram per Liter", "kg/L", 1000.0),
        linear("mgl", "Milligram per Liter", "mg/L", 0.001),
        linear("lbft3", "Pound per Cubic Foot", "lb/ft³", 16.018463373960138),
        linear("lbin3", "Pound per Cubic Inch", "lb/in³", 27679.904710203125),
        linear("lbgal", "Pound per US Gallon", "lb/gal", 119.82642731689663),
        linear("ozin3", "Ounce per Cubic Inch", "oz/in³", 1729.994044387695),
    ]));

    // ============================================
    // Cooking (base: milliliter)
    // ============================================
    c.push(category("cooking", "Cooking", "chef-hat", CategoryKind::Linear, vec![
        linear("ml", "Milliliter", "mL", 1.0),
        linear("l", "Liter", "L", 1000.0),
        linear("tsp", "Teaspoon", "tsp", 4.92892159375),
        linear("tbsp", "Tablespoon", "tbsp", 14.78676478125),
        linear("tbsp_au", "Tablespoon (AU)", "tbsp (AU)", 20.0),
        linear("cup", "US Cup", "cup", 236.5882365),
        linear("cup_metric", "Metric Cup", "cup (metric)", 250.0),
        linear("floz", "US Fluid Ounce", "fl oz", 29.5735295625),
        linear("pt", "US Pint", "pt", 473.176473),
        linear("qt", "US Quart", "qt", 946.352946),
        linear("gal", "US Gallon", "gal", 3785.411784),
        linear("dash", "Dash", "dash", 0.616115199),
        linear("pinch", "Pinch", "pinch", 0.308057599609375),
    ]));

    // ============================================
    // Illuminance (base: lux)
    // ============================================
    c.push(category("illuminance", "Illuminance", "sun", CategoryKind::Linear, vec![
        linear("lx", "Lux", "lx", 1.0),
        linear("klx", "Kilolux", "klx", 1000.0),
        linear("fc", "Foot-Candle", "fc", 10.763910416709722),
        linear("ph", "Phot", "ph", 10000.0),
        linear("nox", "Nox", "nx", 0.001),
    ]));

    // ============================================
    // Radiation dose (base: sievert)
    // ============================================
    c.push(category("radiation", "Radiation", "radiation", CategoryKind::Linear, vec![
        linear("sv", "Sievert", "Sv", 1.0),
        linear("msv", "Millisievert", "mSv", 0.001),
        linear("usv", "Microsievert", "µSv", 1e-6),
        linear("nsv", "Nanosievert", "nSv", 1e-9),
        linear("rem", "Rem", "rem", 0.01),
        linear("mrem", "Millirem", "mrem", 1e-5),
    ]));

    c
}
