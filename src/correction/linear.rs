use crate::correction::{BiasCorrection, FitStatus};
use crate::errors::BiasCorrectionError;
use crate::solver::LeastSquares;
use crate::utils::{complete_pairs, count_valid, precision_round, validate_int_parameter, validate_paired};
use log::{debug, warn};

/// Default number of decimals the fitted coefficients are rounded to.
pub const DEFAULT_ROUND_DECIMALS: i32 = 6;

/// Linear regression bias correction.
///
/// `corrected = model * slope + intercept`, with slope and intercept from an
/// ordinary least-squares fit of observed on model. Pairs where either value
/// is missing are left out of the fit.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearReg {
    coefficients: Option<LeastSquares>,
    round_decimals: i32,
}

impl Default for LinearReg {
    fn default() -> Self {
        LinearReg {
            coefficients: None,
            round_decimals: DEFAULT_ROUND_DECIMALS,
        }
    }
}

impl LinearReg {
    pub fn new() -> Self {
        LinearReg::default()
    }

    /// Round fitted coefficients to `decimals` places instead of the default 6.
    pub fn with_round_decimals(decimals: i32) -> Result<Self, BiasCorrectionError> {
        validate_int_parameter(decimals, 0, 15, "round_decimals")?;
        Ok(LinearReg {
            coefficients: None,
            round_decimals: decimals,
        })
    }

    /// The fitted `(slope, intercept)`, `None` until `fit` has been called.
    pub fn coefficients(&self) -> Option<(f64, f64)> {
        self.coefficients.map(|c| (c.slope, c.intercept))
    }

    pub fn round_decimals(&self) -> i32 {
        self.round_decimals
    }

    fn fallback(&mut self) -> FitStatus {
        self.coefficients = Some(LeastSquares::default());
        FitStatus::Degraded
    }
}

impl BiasCorrection for LinearReg {
    fn name(&self) -> &'static str {
        "LinearReg"
    }

    fn fit(&mut self, observed: &[f64], model: &[f64]) -> Result<FitStatus, BiasCorrectionError> {
        validate_paired(observed, model)?;
        if count_valid(observed) == 0 {
            warn!("Not enough observed data to fit LinearReg, using slope 1 and intercept 0.");
            return Ok(self.fallback());
        }
        let (x, y) = complete_pairs(model, observed);
        let fitted = match LeastSquares::fit(&x, &y)? {
            Some(f) => f,
            None => {
                warn!("No complete observed and model pairs to fit LinearReg, using slope 1 and intercept 0.");
                return Ok(self.fallback());
            }
        };
        let rounded = LeastSquares {
            slope: precision_round(fitted.slope, self.round_decimals),
            intercept: precision_round(fitted.intercept, self.round_decimals),
        };
        debug!(
            "LinearReg fitted on {} pairs with slope {} and intercept {}",
            x.len(),
            rounded.slope,
            rounded.intercept
        );
        self.coefficients = Some(rounded);
        Ok(FitStatus::Fitted)
    }

    fn correct(&self, model: &[f64]) -> Result<Vec<f64>, BiasCorrectionError> {
        let coefficients = self
            .coefficients
            .ok_or_else(|| BiasCorrectionError::NotFitted(self.name().to_string()))?;
        Ok(coefficients.predict(model))
    }

    fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }
}
