// WebAssembly bindings for the length converter
use crate::converter::ConverterState;
use crate::units::{self, ConversionEngine, FootCalibration, LengthUnit};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct LengthConverterWasm {
    engine: ConversionEngine,
}

impl Default for LengthConverterWasm {
    fn default() -> Self {
        Self::new(false)
    }
}

#[wasm_bindgen]
impl LengthConverterWasm {
    /// `international_foot` switches feet to the exact 0.3048 m
    #[wasm_bindgen(constructor)]
    pub fn new(international_foot: bool) -> Self {
        let calibration = if international_foot {
            FootCalibration::International
        } else {
            FootCalibration::Legacy
        };
        Self {
            engine: ConversionEngine::new(calibration),
        }
    }

    /// Convert raw field text between two unit labels
    /// Returns the result line, e.g. "Result: 500.0 Centimeters"
    #[wasm_bindgen]
    pub fn convert(&self, text: &str, from: &str, to: &str) -> String {
        let mut state = ConverterState::with_units(
            self.engine,
            units::parse_unit_label(from),
            units::parse_unit_label(to),
        );
        state.set_input_text(text);
        state.result_line()
    }

    /// Numeric conversion; unknown labels give 0.0
    #[wasm_bindgen]
    pub fn convert_value(&self, value: f64, from: &str, to: &str) -> f64 {
        self.engine.convert(
            value,
            units::parse_unit_label(from),
            units::parse_unit_label(to),
        )
    }

    /// Numeric conversion that rejects unknown labels
    #[wasm_bindgen]
    pub fn convert_strict(&self, value: f64, from: &str, to: &str) -> Result<f64, JsValue> {
        self.engine
            .try_convert(
                value,
                units::parse_unit_label(from),
                units::parse_unit_label(to),
            )
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Format a number the way result lines do
    #[wasm_bindgen]
    pub fn format_value(&self, value: f64) -> String {
        units::format_value(value)
    }

    /// Returns JSON string array of unit labels
    #[wasm_bindgen]
    pub fn units(&self) -> Result<String, JsValue> {
        serde_json::to_string(&LengthUnit::labels())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
    }
}
