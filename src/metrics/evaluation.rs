use crate::errors::BiasCorrectionError;
use crate::metrics::regression;
use crate::utils::items_to_strings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type MetricFn = fn(&[f64], &[f64]) -> Result<f64, BiasCorrectionError>;

/// Compare two error values, determining if `comparison` is better.
/// Lower error is better.
/// If one of them is NaN favor the non NaN value.
/// If both are NaN, consider the first value to be better.
pub fn is_comparison_better(value: f64, comparison: f64) -> bool {
    match (value.is_nan(), comparison.is_nan()) {
        // Both nan, comparison is not better,
        // Or comparison is nan, also not better
        (true, true) | (false, true) => false,
        // comparison is not Nan, it's better
        (true, false) => true,
        (false, false) => value > comparison,
    }
}

/// Error metric used when scoring a correction.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// Mean of absolute differences.
    #[default]
    #[serde(rename = "mae")]
    MeanAbsoluteError,
    /// Mean of squared differences.
    #[serde(rename = "mse")]
    MeanSquaredError,
    /// Square root of the mean squared error.
    #[serde(rename = "rmse")]
    RootMeanSquaredError,
}

fn get_parse_error(s: &str) -> BiasCorrectionError {
    BiasCorrectionError::ParseString(
        s.to_string(),
        "Metric".to_string(),
        items_to_strings(vec!["mae", "mse", "rmse"]),
    )
}

impl FromStr for Metric {
    type Err = BiasCorrectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mae" => Ok(Metric::MeanAbsoluteError),
            "mse" => Ok(Metric::MeanSquaredError),
            "rmse" => Ok(Metric::RootMeanSquaredError),
            _ => Err(get_parse_error(s)),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Metric {
    /// Short name, used as the prefix of score report keys.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::MeanAbsoluteError => regression::MeanAbsoluteErrorMetric::name(),
            Metric::MeanSquaredError => regression::MeanSquaredErrorMetric::name(),
            Metric::RootMeanSquaredError => regression::RootMeanSquaredErrorMetric::name(),
        }
    }

    pub fn calculate(&self, predicted: &[f64], actual: &[f64]) -> Result<f64, BiasCorrectionError> {
        metric_callables(self)(predicted, actual)
    }
}

pub fn metric_callables(metric_type: &Metric) -> MetricFn {
    match metric_type {
        Metric::MeanAbsoluteError => regression::MeanAbsoluteErrorMetric::calculate_metric,
        Metric::MeanSquaredError => regression::MeanSquaredErrorMetric::calculate_metric,
        Metric::RootMeanSquaredError => regression::RootMeanSquaredErrorMetric::calculate_metric,
    }
}

pub trait EvaluationMetric {
    fn calculate_metric(predicted: &[f64], actual: &[f64]) -> Result<f64, BiasCorrectionError>;
    fn name() -> &'static str;
}
