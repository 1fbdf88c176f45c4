use crate::units::{LengthUnit, UnitSelection};
use serde::Serialize;

/// Drop-down for choosing a unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UnitPicker {
    pub selection: UnitSelection,
    pub expanded: bool,
}

impl UnitPicker {
    pub fn new(selection: impl Into<UnitSelection>) -> Self {
        Self {
            selection: selection.into(),
            expanded: false,
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Apply a menu choice. `None` is a dismiss and keeps the current selection.
    pub fn pick(&mut self, unit: Option<LengthUnit>) {
        if let Some(unit) = unit {
            self.selection = UnitSelection::Selected(unit);
        }
        self.expanded = false;
    }

    pub fn button_label(&self) -> &'static str {
        self.selection.unit().map(|u| u.label()).unwrap_or("Select")
    }

    /// Entries shown while expanded
    pub fn options(&self) -> &'static [LengthUnit] {
        &LengthUnit::ALL
    }
}
