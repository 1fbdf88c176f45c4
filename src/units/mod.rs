// Length units and conversion through meters
// Every conversion goes value -> meters -> target unit

pub mod engine;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod types;

pub use engine::{
    convert, from_base, from_base_label, to_base, to_base_label, ConversionEngine,
    FootCalibration,
};
pub use error::UnitError;
pub use formatter::{format_result, format_value};
pub use parser::{parse_input_value, parse_quantity, parse_unit_label};
pub use types::{ConversionRequest, LengthUnit, UnitSelection};
