//! Correction Configuration
//!
//! Serializable settings used to build a [`BiasCorrector`](crate::correction::BiasCorrector).
use crate::correction::linear::DEFAULT_ROUND_DECIMALS;
use crate::correction::CorrectionMethod;
use crate::errors::BiasCorrectionError;
use crate::utils::validate_int_parameter;
use serde::{Deserialize, Serialize};

fn default_method() -> CorrectionMethod {
    CorrectionMethod::Shift
}
fn default_round_decimals() -> i32 {
    DEFAULT_ROUND_DECIMALS
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectionConfig {
    /// Correction technique to apply.
    #[serde(default = "default_method")]
    pub method: CorrectionMethod,
    /// Decimals the linear regression coefficients are rounded to.
    #[serde(default = "default_round_decimals")]
    pub round_decimals: i32,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        CorrectionConfig {
            method: default_method(),
            round_decimals: default_round_decimals(),
        }
    }
}

impl CorrectionConfig {
    pub fn new(method: CorrectionMethod) -> Self {
        CorrectionConfig {
            method,
            ..Default::default()
        }
    }

    pub fn set_round_decimals(mut self, round_decimals: i32) -> Self {
        self.round_decimals = round_decimals;
        self
    }

    pub fn validate(&self) -> Result<(), BiasCorrectionError> {
        validate_int_parameter(self.round_decimals, 0, 15, "round_decimals")
    }

    /// Parse a configuration from JSON, filling in defaults for absent fields.
    pub fn from_json_str(json: &str) -> Result<Self, BiasCorrectionError> {
        let config: CorrectionConfig = serde_json::from_str(json).map_err(|e| {
            BiasCorrectionError::InvalidParameter(
                "config".to_string(),
                "a valid JSON correction config".to_string(),
                e.to_string(),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, BiasCorrectionError> {
        serde_json::to_string(self).map_err(|e| {
            BiasCorrectionError::InvalidParameter("config".to_string(), "a serializable config".to_string(), e.to_string())
        })
    }
}
