use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    InvalidUnit(String),
    ParseError(String),
    ConfigError(String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::InvalidUnit(msg) => write!(f, "Invalid unit: {}", msg),
            UnitError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            UnitError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for UnitError {}
