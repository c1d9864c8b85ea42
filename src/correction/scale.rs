use crate::correction::{BiasCorrection, FitStatus};
use crate::errors::BiasCorrectionError;
use crate::utils::{count_valid, nan_mean, validate_paired};
use log::{debug, warn};

/// Multiplicative bias correction.
///
/// `corrected = model * k` where `k = 1 / (mean(model) / mean(observed))`,
/// both means skipping missing values. A model mean of zero gives an infinite factor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scale {
    k: Option<f64>,
}

impl Scale {
    pub fn new() -> Self {
        Scale::default()
    }

    /// The fitted factor, `None` until `fit` has been called.
    pub fn factor(&self) -> Option<f64> {
        self.k
    }
}

impl BiasCorrection for Scale {
    fn name(&self) -> &'static str {
        "Scale"
    }

    fn fit(&mut self, observed: &[f64], model: &[f64]) -> Result<FitStatus, BiasCorrectionError> {
        validate_paired(observed, model)?;
        if count_valid(observed) == 0 {
            warn!("Not enough observed data to fit Scale, using a factor of 1.");
            self.k = Some(1.0);
            return Ok(FitStatus::Degraded);
        }
        let k = 1.0 / (nan_mean(model) / nan_mean(observed));
        debug!("Scale fitted with factor {}", k);
        self.k = Some(k);
        Ok(FitStatus::Fitted)
    }

    fn correct(&self, model: &[f64]) -> Result<Vec<f64>, BiasCorrectionError> {
        let k = self.k.ok_or_else(|| BiasCorrectionError::NotFitted(self.name().to_string()))?;
        Ok(model.iter().map(|m| m * k).collect())
    }

    fn is_fitted(&self) -> bool {
        self.k.is_some()
    }
}
