//! Radio dial settings with JSON file persistence

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::core::{DEFAULT_ANTENNA_HEIGHT_M, DEFAULT_FREQUENCY_MHZ, DEFAULT_TX_POWER_WATTS};

/// Configuration load/save/validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {parameter}: {value} ({reason})")]
    InvalidParameter {
        parameter: String,
        value: f64,
        reason: String,
    },
}

/// Operator dial settings used by the link budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadioConfig {
    /// Operating frequency (MHz)
    pub frequency_mhz: f64,
    /// Transmit power (W)
    pub tx_power_watts: f64,
    /// Antenna height above ground (m)
    pub antenna_height_m: f64,
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            frequency_mhz: DEFAULT_FREQUENCY_MHZ,
            tx_power_watts: DEFAULT_TX_POWER_WATTS,
            antenna_height_m: DEFAULT_ANTENNA_HEIGHT_M,
        }
    }
}

impl RadioConfig {
    pub fn with_frequency(mut self, frequency_mhz: f64) -> Self {
        self.frequency_mhz = frequency_mhz;
        self
    }

    pub fn with_tx_power(mut self, tx_power_watts: f64) -> Self {
        self.tx_power_watts = tx_power_watts;
        self
    }

    pub fn with_antenna_height(mut self, antenna_height_m: f64) -> Self {
        self.antenna_height_m = antenna_height_m;
        self
    }

    /// Validate all parameters against their documented ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.frequency_mhz > 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "frequency_mhz".to_string(),
                value: self.frequency_mhz,
                reason: "must be positive".to_string(),
            });
        }
        if !(self.tx_power_watts > 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "tx_power_watts".to_string(),
                value: self.tx_power_watts,
                reason: "must be positive".to_string(),
            });
        }
        if !(self.antenna_height_m >= 0.0) {
            return Err(ConfigError::InvalidParameter {
                parameter: "antenna_height_m".to_string(),
                value: self.antenna_height_m,
                reason: "must be non-negative".to_string(),
            });
        }
        Ok(())
    }

    /// Load and validate settings from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: RadioConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save settings as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
