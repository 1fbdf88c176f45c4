use crate::units::{ConversionEngine, FootCalibration, LengthUnit, UnitError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "lengthconv.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Constants used for feet
    #[serde(default)]
    pub foot_calibration: FootCalibration,

    // Units used when the command line leaves one out
    #[serde(default)]
    pub default_from: Option<LengthUnit>,
    #[serde(default)]
    pub default_to: Option<LengthUnit>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::load_from_str(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn load_from_str(content: &str) -> Result<Self, UnitError> {
        toml::from_str(content).map_err(|e| UnitError::ConfigError(e.to_string()))
    }

    /// Load an explicit path, or the default file if present, or fall back to defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from_file(default_path)
                } else {
                    log::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::empty())
                }
            }
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn engine(&self) -> ConversionEngine {
        ConversionEngine::new(self.foot_calibration)
    }
}
