//! Correction Module
//!
//! Bias correction strategies sharing one fit, correct and score contract.
//!
//! # Submodules
//!
//! * `shift`: Additive correction, `model - c`.
//! * `scale`: Multiplicative correction, `model * k`.
//! * `linear`: Linear regression correction, `model * slope + intercept`.
//! * `score`: Before and after error report.
//! * `config`: Serializable configuration for building a corrector.
//! * `compare`: Score every strategy on the same data and pick the best one.

pub mod compare;
pub mod config;
pub mod linear;
pub mod scale;
pub mod score;
pub mod shift;

pub use compare::{best_method, compare_methods};
pub use config::CorrectionConfig;
pub use linear::LinearReg;
pub use scale::Scale;
pub use score::ScoreReport;
pub use shift::Shift;

use crate::errors::BiasCorrectionError;
use crate::metrics::Metric;
use crate::utils::{items_to_strings, validate_paired};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Outcome of a successful `fit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStatus {
    /// Parameters were estimated from the data.
    Fitted,
    /// The observed series had no usable values, neutral parameters were used.
    Degraded,
}

impl FitStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, FitStatus::Degraded)
    }
}

/// Contract shared by all bias correction strategies.
///
/// A strategy starts unfitted. `fit` estimates its parameters from paired
/// observed and model series, after which `correct` and `score` may be called
/// any number of times. Calling `fit` again overwrites the parameters.
pub trait BiasCorrection {
    /// Name of the strategy, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Estimate the correction parameters.
    ///
    /// # Arguments
    /// * `observed` - reference values, may contain NaN.
    /// * `model` - model values paired positionally with `observed`.
    ///
    /// An `observed` series without a single non-missing value does not fail,
    /// the strategy falls back to an identity correction and returns
    /// [`FitStatus::Degraded`].
    fn fit(&mut self, observed: &[f64], model: &[f64]) -> Result<FitStatus, BiasCorrectionError>;

    /// Apply the fitted parameters to a model series.
    fn correct(&self, model: &[f64]) -> Result<Vec<f64>, BiasCorrectionError>;

    fn is_fitted(&self) -> bool;

    /// Error of `model` against `observed` before and after the correction.
    ///
    /// Metrics are evaluated as-is, so missing values in either series
    /// propagate into the reported errors.
    fn score(&self, observed: &[f64], model: &[f64], metric: Metric) -> Result<ScoreReport, BiasCorrectionError> {
        validate_paired(observed, model)?;
        let corrected = self.correct(model)?;
        Ok(ScoreReport::new(
            metric,
            metric.calculate(model, observed)?,
            metric.calculate(&corrected, observed)?,
        ))
    }

    /// Same as [`score`](BiasCorrection::score), with the metric given by name (`mae`, `mse` or `rmse`).
    fn score_by_name(&self, observed: &[f64], model: &[f64], metric: &str) -> Result<ScoreReport, BiasCorrectionError> {
        let metric = Metric::from_str(metric)?;
        self.score(observed, model, metric)
    }
}

/// The available correction techniques.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrectionMethod {
    #[default]
    #[serde(rename = "shift")]
    Shift,
    #[serde(rename = "scale")]
    Scale,
    #[serde(rename = "linear_regression", alias = "linear")]
    LinearRegression,
}

impl CorrectionMethod {
    pub const ALL: [CorrectionMethod; 3] = [
        CorrectionMethod::Shift,
        CorrectionMethod::Scale,
        CorrectionMethod::LinearRegression,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CorrectionMethod::Shift => "shift",
            CorrectionMethod::Scale => "scale",
            CorrectionMethod::LinearRegression => "linear_regression",
        }
    }
}

impl FromStr for CorrectionMethod {
    type Err = BiasCorrectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shift" => Ok(CorrectionMethod::Shift),
            "scale" => Ok(CorrectionMethod::Scale),
            "linear" | "linear_regression" => Ok(CorrectionMethod::LinearRegression),
            _ => Err(BiasCorrectionError::ParseString(
                s.to_string(),
                "CorrectionMethod".to_string(),
                items_to_strings(vec!["shift", "scale", "linear", "linear_regression"]),
            )),
        }
    }
}

impl fmt::Display for CorrectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the correction strategies, chosen at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum BiasCorrector {
    Shift(Shift),
    Scale(Scale),
    LinearRegression(LinearReg),
}

impl BiasCorrector {
    /// An unfitted corrector for `method`.
    pub fn new(method: CorrectionMethod) -> Self {
        match method {
            CorrectionMethod::Shift => BiasCorrector::Shift(Shift::new()),
            CorrectionMethod::Scale => BiasCorrector::Scale(Scale::new()),
            CorrectionMethod::LinearRegression => BiasCorrector::LinearRegression(LinearReg::new()),
        }
    }

    pub fn from_config(config: &CorrectionConfig) -> Result<Self, BiasCorrectionError> {
        config.validate()?;
        Ok(match config.method {
            CorrectionMethod::LinearRegression => {
                BiasCorrector::LinearRegression(LinearReg::with_round_decimals(config.round_decimals)?)
            }
            method => BiasCorrector::new(method),
        })
    }

    pub fn method(&self) -> CorrectionMethod {
        match self {
            BiasCorrector::Shift(_) => CorrectionMethod::Shift,
            BiasCorrector::Scale(_) => CorrectionMethod::Scale,
            BiasCorrector::LinearRegression(_) => CorrectionMethod::LinearRegression,
        }
    }

    fn inner(&self) -> &dyn BiasCorrection {
        match self {
            BiasCorrector::Shift(s) => s,
            BiasCorrector::Scale(s) => s,
            BiasCorrector::LinearRegression(l) => l,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn BiasCorrection {
        match self {
            BiasCorrector::Shift(s) => s,
            BiasCorrector::Scale(s) => s,
            BiasCorrector::LinearRegression(l) => l,
        }
    }
}

impl BiasCorrection for BiasCorrector {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn fit(&mut self, observed: &[f64], model: &[f64]) -> Result<FitStatus, BiasCorrectionError> {
        self.inner_mut().fit(observed, model)
    }

    fn correct(&self, model: &[f64]) -> Result<Vec<f64>, BiasCorrectionError> {
        self.inner().correct(model)
    }

    fn is_fitted(&self) -> bool {
        self.inner().is_fitted()
    }
}
