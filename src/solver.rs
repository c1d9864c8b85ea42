//! Least Squares
//!
//! Ordinary least-squares fit of a single predictor with an intercept.
use crate::errors::BiasCorrectionError;
use crate::utils::validate_paired;
use serde::{Deserialize, Serialize};

/// Coefficients of `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeastSquares {
    pub slope: f64,
    pub intercept: f64,
}

impl Default for LeastSquares {
    /// The identity line.
    fn default() -> Self {
        LeastSquares {
            slope: 1.0,
            intercept: 0.0,
        }
    }
}

impl LeastSquares {
    /// Fit `y` on `x`, minimizing the sum of squared residuals.
    ///
    /// Sums are taken around the means, which keeps the estimate stable when `x`
    /// carries a large offset. A predictor without variance gets a zero slope and
    /// the mean of `y` as the intercept.
    ///
    /// Returns `None` when there are no samples.
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Option<Self>, BiasCorrectionError> {
        validate_paired(y, x)?;
        if x.is_empty() {
            return Ok(None);
        }
        let n = x.len() as f64;
        let x_mean = x.iter().sum::<f64>() / n;
        let y_mean = y.iter().sum::<f64>() / n;

        let (sxy, sxx) = x.iter().zip(y).fold((0.0, 0.0), |(sxy, sxx), (x_, y_)| {
            let dx = x_ - x_mean;
            (sxy + dx * (y_ - y_mean), sxx + dx * dx)
        });

        let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
        Ok(Some(LeastSquares {
            slope,
            intercept: y_mean - slope * x_mean,
        }))
    }

    #[inline]
    pub fn predict_single(&self, x: f64) -> f64 {
        x * self.slope + self.intercept
    }

    pub fn predict(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|x_| self.predict_single(*x_)).collect()
    }
}
