use crate::units::error::UnitError;
use crate::units::types::{LengthUnit, UnitSelection};
use serde::{Deserialize, Serialize};

// Meters per unit
const CENTIMETERS_TO_METERS: f64 = 0.01;
const MILLIMETERS_TO_METERS: f64 = 0.001;
const LEGACY_FOOT_TO_METERS: f64 = 0.30479;
const INTERNATIONAL_FOOT_TO_METERS: f64 = 0.3048;

// Units per meter. Kept as separate literals rather than reciprocals,
// so legacy Foot does not round-trip exactly (0.30479 * 3.28084 != 1).
const METERS_TO_CENTIMETERS: f64 = 100.0;
const METERS_TO_MILLIMETERS: f64 = 1000.0;
const METERS_TO_LEGACY_FOOT: f64 = 3.28084;
const METERS_TO_INTERNATIONAL_FOOT: f64 = 1.0 / INTERNATIONAL_FOOT_TO_METERS;

/// Which pair of constants converts feet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FootCalibration {
    /// 0.30479 m per foot, 3.28084 feet per meter
    #[default]
    Legacy,
    /// Exact 0.3048 m per foot
    International,
}

/// Converts lengths through meters using a fixed factor table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionEngine {
    calibration: FootCalibration,
}

impl ConversionEngine {
    pub fn new(calibration: FootCalibration) -> Self {
        Self { calibration }
    }

    pub fn calibration(&self) -> FootCalibration {
        self.calibration
    }

    /// Meters in one unit. Unset yields 0.0, collapsing any conversion to zero.
    pub fn factor(&self, unit: impl Into<UnitSelection>) -> f64 {
        match unit.into() {
            UnitSelection::Selected(LengthUnit::Centimeters) => CENTIMETERS_TO_METERS,
            UnitSelection::Selected(LengthUnit::Meters) => 1.0,
            UnitSelection::Selected(LengthUnit::Foot) => match self.calibration {
                FootCalibration::Legacy => LEGACY_FOOT_TO_METERS,
                FootCalibration::International => INTERNATIONAL_FOOT_TO_METERS,
            },
            UnitSelection::Selected(LengthUnit::Millimeters) => MILLIMETERS_TO_METERS,
            UnitSelection::Unset => 0.0,
        }
    }

    /// Units in one meter. Unset yields 0.0.
    pub fn inverse_factor(&self, unit: impl Into<UnitSelection>) -> f64 {
        match unit.into() {
            UnitSelection::Selected(LengthUnit::Centimeters) => METERS_TO_CENTIMETERS,
            UnitSelection::Selected(LengthUnit::Meters) => 1.0,
            UnitSelection::Selected(LengthUnit::Foot) => match self.calibration {
                FootCalibration::Legacy => METERS_TO_LEGACY_FOOT,
                FootCalibration::International => METERS_TO_INTERNATIONAL_FOOT,
            },
            UnitSelection::Selected(LengthUnit::Millimeters) => METERS_TO_MILLIMETERS,
            UnitSelection::Unset => 0.0,
        }
    }

    pub fn to_base(&self, value: f64, unit: impl Into<UnitSelection>) -> f64 {
        let unit = unit.into();
        if !unit.is_set() {
            log::debug!("to_base({}) with no unit selected, result is 0.0", value);
        }
        value * self.factor(unit)
    }

    pub fn from_base(&self, base_value: f64, unit: impl Into<UnitSelection>) -> f64 {
        let unit = unit.into();
        if !unit.is_set() {
            log::debug!("from_base({}) with no unit selected, result is 0.0", base_value);
        }
        base_value * self.inverse_factor(unit)
    }

    pub fn convert(
        &self,
        value: f64,
        from: impl Into<UnitSelection>,
        to: impl Into<UnitSelection>,
    ) -> f64 {
        self.from_base(self.to_base(value, from), to)
    }

    /// Like `convert`, but an unset unit is an error instead of a zero result
    pub fn try_convert(
        &self,
        value: f64,
        from: impl Into<UnitSelection>,
        to: impl Into<UnitSelection>,
    ) -> Result<f64, UnitError> {
        let from = from
            .into()
            .unit()
            .ok_or_else(|| UnitError::InvalidUnit("source unit not selected".to_string()))?;
        let to = to
            .into()
            .unit()
            .ok_or_else(|| UnitError::InvalidUnit("target unit not selected".to_string()))?;
        Ok(self.convert(value, from, to))
    }
}

/// Convert a value in `unit` to meters with the legacy table
pub fn to_base(value: f64, unit: impl Into<UnitSelection>) -> f64 {
    ConversionEngine::default().to_base(value, unit)
}

/// Convert meters to `unit` with the legacy table
pub fn from_base(base_value: f64, unit: impl Into<UnitSelection>) -> f64 {
    ConversionEngine::default().from_base(base_value, unit)
}

pub fn convert(value: f64, from: impl Into<UnitSelection>, to: impl Into<UnitSelection>) -> f64 {
    ConversionEngine::default().convert(value, from, to)
}

/// `to_base` keyed by a raw label; unknown labels give 0.0
pub fn to_base_label(value: f64, label: &str) -> f64 {
    to_base(value, UnitSelection::from_label(label))
}

/// `from_base` keyed by a raw label; unknown labels give 0.0
pub fn from_base_label(base_value: f64, label: &str) -> f64 {
    from_base(base_value, UnitSelection::from_label(label))
}
