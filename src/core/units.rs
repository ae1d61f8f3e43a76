//! Conversions between stored milliliters and the display unit.

use crate::models::Unit;

/// Milliliters → display unit, full precision.
pub fn to_display_unit(ml: u32, unit: Unit) -> f64 {
    f64::from(ml) / unit.ml_factor()
}

/// Display value → milliliters, rounded to the nearest integer.
/// Negative and non-finite values clamp to 0.
pub fn to_milliliters(value: f64, unit: Unit) -> u32 {
    let ml = (value * unit.ml_factor()).round();
    if !ml.is_finite() || ml <= 0.0 {
        return 0;
    }
    if ml >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    ml as u32
}

/// Display string: integers for ml and oz, two decimals for liters.
pub fn format(value: f64, unit: Unit) -> String {
    let rounded = match unit {
        Unit::Milliliter | Unit::Ounce => value.round(),
        Unit::Liter => (value * 100.0).round() / 100.0,
    };
    // avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}

/// Stored milliliters formatted in `unit`.
pub fn format_ml(ml: u32, unit: Unit) -> String {
    format(to_display_unit(ml, unit), unit)
}

/// Lenient numeric input: anything unparsable or non-finite becomes 0.
pub fn parse_amount(text: &str) -> f64 {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
