use crate::errors::BiasCorrectionError;
use crate::metrics::evaluation::EvaluationMetric;
use crate::utils::validate_paired;

// Missing values are not filtered here, a NaN in either series yields a NaN error.

pub struct MeanAbsoluteErrorMetric {}
impl EvaluationMetric for MeanAbsoluteErrorMetric {
    fn calculate_metric(predicted: &[f64], actual: &[f64]) -> Result<f64, BiasCorrectionError> {
        mae(predicted, actual)
    }
    fn name() -> &'static str {
        "mae"
    }
}

pub struct MeanSquaredErrorMetric {}
impl EvaluationMetric for MeanSquaredErrorMetric {
    fn calculate_metric(predicted: &[f64], actual: &[f64]) -> Result<f64, BiasCorrectionError> {
        mse(predicted, actual)
    }
    fn name() -> &'static str {
        "mse"
    }
}

pub struct RootMeanSquaredErrorMetric {}
impl EvaluationMetric for RootMeanSquaredErrorMetric {
    fn calculate_metric(predicted: &[f64], actual: &[f64]) -> Result<f64, BiasCorrectionError> {
        rmse(predicted, actual)
    }
    fn name() -> &'static str {
        "rmse"
    }
}

/// Mean absolute error.
pub fn mae(predicted: &[f64], actual: &[f64]) -> Result<f64, BiasCorrectionError> {
    validate_paired(actual, predicted)?;
    let res = predicted
        .iter()
        .zip(actual)
        .map(|(p_, a_)| (p_ - a_).abs())
        .sum::<f64>();
    Ok(res / predicted.len() as f64)
}

/// Mean squared error.
pub fn mse(predicted: &[f64], actual: &[f64]) -> Result<f64, BiasCorrectionError> {
    validate_paired(actual, predicted)?;
    let res = predicted
        .iter()
        .zip(actual)
        .map(|(p_, a_)| (p_ - a_).powi(2))
        .sum::<f64>();
    Ok(res / predicted.len() as f64)
}

/// Root mean squared error.
pub fn rmse(predicted: &[f64], actual: &[f64]) -> Result<f64, BiasCorrectionError> {
    Ok(mse(predicted, actual)?.sqrt())
}
