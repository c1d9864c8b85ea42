//! Errors
//!
//! Custom error types used throughout the `bias_correction` crate.
use thiserror::Error;

/// Errors that can occur while fitting, applying or scoring a correction.
#[derive(Debug, Error, PartialEq)]
pub enum BiasCorrectionError {
    /// Paired series do not have the same length.
    #[error("Observed and model series must have the same length, got {0} and {1}.")]
    ShapeMismatch(usize, usize),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// A correction was applied before any parameters were fitted.
    #[error("{0} has not been fitted, call fit before correct or score.")]
    NotFitted(String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
}
