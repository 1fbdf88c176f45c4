use crate::units::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported length unit
/// The variant names double as display labels ("Centimeters", "Meters", "Foot", "Millimeters")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LengthUnit {
    Centimeters,
    Meters,
    Foot,
    Millimeters,
}

impl LengthUnit {
    /// All units in picker order
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Centimeters,
        LengthUnit::Meters,
        LengthUnit::Foot,
        LengthUnit::Millimeters,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LengthUnit::Centimeters => "Centimeters",
            LengthUnit::Meters => "Meters",
            LengthUnit::Foot => "Foot",
            LengthUnit::Millimeters => "Millimeters",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|u| u.label()).collect()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        LengthUnit::ALL
            .into_iter()
            .find(|u| u.label() == trimmed)
            .ok_or_else(|| UnitError::InvalidUnit(format!("'{}' is not one of {:?}", s, Self::labels())))
    }
}

/// A unit as seen at the UI boundary: either picked or not yet picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(from = "Option<LengthUnit>", into = "Option<LengthUnit>")]
pub enum UnitSelection {
    #[default]
    Unset,
    Selected(LengthUnit),
}

impl UnitSelection {
    /// Map a raw label to a selection; anything unknown is `Unset`
    pub fn from_label(label: &str) -> Self {
        label.parse::<LengthUnit>().map(Self::Selected).unwrap_or(Self::Unset)
    }

    pub fn unit(&self) -> Option<LengthUnit> {
        match self {
            UnitSelection::Selected(unit) => Some(*unit),
            UnitSelection::Unset => None,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, UnitSelection::Selected(_))
    }

    /// Label shown next to a result; empty when unset
    pub fn label(&self) -> &'static str {
        self.unit().map(|u| u.label()).unwrap_or("")
    }
}

impl From<LengthUnit> for UnitSelection {
    fn from(unit: LengthUnit) -> Self {
        UnitSelection::Selected(unit)
    }
}

impl From<Option<LengthUnit>> for UnitSelection {
    fn from(unit: Option<LengthUnit>) -> Self {
        unit.map(UnitSelection::Selected).unwrap_or_default()
    }
}

impl From<UnitSelection> for Option<LengthUnit> {
    fn from(selection: UnitSelection) -> Self {
        selection.unit()
    }
}

/// One conversion as produced by a front end on every edit
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub text: String,
    pub from: UnitSelection,
    pub to: UnitSelection,
}

impl ConversionRequest {
    pub fn new(
        text: impl Into<String>,
        from: impl Into<UnitSelection>,
        to: impl Into<UnitSelection>,
    ) -> Self {
        Self {
            text: text.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}
