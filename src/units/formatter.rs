use crate::units::types::UnitSelection;

// Plain decimal inside [1e-3, 1e7), scientific outside
const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

/// Render a number the way the result line shows it.
/// Shortest round-trip digits; integral values keep a trailing ".0" (500.0, 0.0),
/// and magnitudes outside [1e-3, 1e7) use "1.0E7" / "5.0E-4" notation.
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if !value.is_finite() || value == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        // Debug formatting for f64 is shortest round-trip and keeps the ".0"
        return format!("{:?}", value);
    }

    // LowerExp gives shortest digits too, e.g. "1e7", "1.2345e8", "5e-4"
    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        }
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => exp,
    }
}

/// Build "Result: {value} {label}"; the label is dropped when no target unit is selected
pub fn format_result(value: &str, target: UnitSelection) -> String {
    match target.unit() {
        Some(unit) => format!("Result: {} {}", value, unit.label()),
        None => format!("Result: {}", value),
    }
}
