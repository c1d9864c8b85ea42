//! Bias correction of model output against observed reference values.
//!
//! Three strategies share the [`BiasCorrection`] contract: [`Shift`] (additive),
//! [`Scale`] (multiplicative) and [`LinearReg`] (least-squares line). Each is
//! fitted on paired observed and model series, then applied to model series and
//! scored with one of the error metrics in [`metrics`].

// Modules
pub mod correction;
pub mod errors;
pub mod metrics;
pub mod solver;
pub mod utils;

// Individual classes, and functions
pub use correction::{
    best_method, compare_methods, BiasCorrection, BiasCorrector, CorrectionConfig, CorrectionMethod, FitStatus,
    LinearReg, Scale, ScoreReport, Shift,
};
pub use errors::BiasCorrectionError;
pub use metrics::{mae, mse, rmse, Metric};
