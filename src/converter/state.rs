use crate::converter::picker::UnitPicker;
use crate::units::{
    format_result, format_value, parse_input_value, ConversionEngine, ConversionRequest,
    LengthUnit, UnitSelection,
};
use serde::Serialize;

/// State behind the converter screen.
/// Every mutation recomputes `output_value` before returning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConverterState {
    pub input_text: String,
    pub input_picker: UnitPicker,
    pub output_picker: UnitPicker,
    pub output_value: String,
    #[serde(skip)]
    engine: ConversionEngine,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::new(ConversionEngine::default())
    }
}

impl ConverterState {
    pub fn new(engine: ConversionEngine) -> Self {
        Self {
            input_text: String::new(),
            input_picker: UnitPicker::default(),
            output_picker: UnitPicker::default(),
            output_value: format_value(0.0),
            engine,
        }
    }

    /// Start with preselected units, e.g. from config defaults
    pub fn with_units(
        engine: ConversionEngine,
        from: impl Into<UnitSelection>,
        to: impl Into<UnitSelection>,
    ) -> Self {
        let mut state = Self::new(engine);
        state.input_picker = UnitPicker::new(from);
        state.output_picker = UnitPicker::new(to);
        state.recompute();
        state
    }

    pub fn input_unit(&self) -> UnitSelection {
        self.input_picker.selection
    }

    pub fn output_unit(&self) -> UnitSelection {
        self.output_picker.selection
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
        self.recompute();
    }

    pub fn toggle_input_picker(&mut self) {
        self.input_picker.toggle();
    }

    pub fn toggle_output_picker(&mut self) {
        self.output_picker.toggle();
    }

    pub fn pick_input_unit(&mut self, unit: Option<LengthUnit>) {
        self.input_picker.pick(unit);
        self.recompute();
    }

    pub fn pick_output_unit(&mut self, unit: Option<LengthUnit>) {
        self.output_picker.pick(unit);
        self.recompute();
    }

    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(self.input_text.clone(), self.input_unit(), self.output_unit())
    }

    pub fn recompute(&mut self) {
        let result = evaluate(&self.engine, &self.request());
        self.output_value = format_value(result);
    }

    pub fn result_line(&self) -> String {
        format_result(&self.output_value, self.output_unit())
    }
}

/// Run one request: parse the text, go through meters, land in the target unit
pub fn evaluate(engine: &ConversionEngine, request: &ConversionRequest) -> f64 {
    let value = parse_input_value(&request.text);
    let meters = engine.to_base(value, request.from);
    engine.from_base(meters, request.to)
}
