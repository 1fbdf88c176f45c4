use crate::units::types::{LengthUnit, UnitSelection};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// "<number> <label>", e.g. "12 Foot", "-3.5 Meters", ".5 Foot", "1e3 Millimeters"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s+([A-Za-z]+)$"
    ).unwrap();
}

/// Parse the text of the value field.
/// Unparsable or non-finite input reads as 0.0, so an empty field shows 0 rather than an error.
pub fn parse_input_value(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        Ok(value) => {
            log::debug!("Non-finite input {:?} treated as 0.0", value);
            0.0
        }
        Err(_) => {
            log::debug!("Unparsable input {:?} treated as 0.0", text);
            0.0
        }
    }
}

pub fn parse_unit_label(text: &str) -> UnitSelection {
    UnitSelection::from_label(text)
}

/// Check if a string looks like a quantity with a unit label
pub fn looks_like_quantity(s: &str) -> bool {
    QUANTITY_PATTERN.is_match(s.trim())
}

/// Split "<number> <label>" into its value and unit.
/// Returns None when the shape does not match or the label is not a known unit.
pub fn parse_quantity(s: &str) -> Option<(f64, LengthUnit)> {
    let caps = QUANTITY_PATTERN.captures(s.trim())?;
    let value = caps[1].parse::<f64>().ok().filter(|v| v.is_finite())?;
    let unit = caps[2].parse::<LengthUnit>().ok()?;
    Some((value, unit))
}
