use crate::correction::{BiasCorrection, FitStatus};
use crate::errors::BiasCorrectionError;
use crate::utils::{count_valid, nan_mean, validate_paired};
use log::{debug, warn};

/// Additive bias correction.
///
/// `corrected = model - c` where `c = mean(model) - mean(observed)`,
/// both means skipping missing values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shift {
    c: Option<f64>,
}

impl Shift {
    pub fn new() -> Self {
        Shift::default()
    }

    /// The fitted offset, `None` until `fit` has been called.
    pub fn offset(&self) -> Option<f64> {
        self.c
    }
}

impl BiasCorrection for Shift {
    fn name(&self) -> &'static str {
        "Shift"
    }

    fn fit(&mut self, observed: &[f64], model: &[f64]) -> Result<FitStatus, BiasCorrectionError> {
        validate_paired(observed, model)?;
        if count_valid(observed) == 0 {
            warn!("Not enough observed data to fit Shift, using an offset of 0.");
            self.c = Some(0.0);
            return Ok(FitStatus::Degraded);
        }
        let c = nan_mean(model) - nan_mean(observed);
        debug!("Shift fitted with offset {}", c);
        self.c = Some(c);
        Ok(FitStatus::Fitted)
    }

    fn correct(&self, model: &[f64]) -> Result<Vec<f64>, BiasCorrectionError> {
        let c = self.c.ok_or_else(|| BiasCorrectionError::NotFitted(self.name().to_string()))?;
        Ok(model.iter().map(|m| m - c).collect())
    }

    fn is_fitted(&self) -> bool {
        self.c.is_some()
    }
}
