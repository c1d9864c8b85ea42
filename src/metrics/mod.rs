//! Metrics
//!
//! Error metrics used to judge how far a model series is from the observed series,
//! before and after a correction is applied.
pub mod evaluation;
pub mod regression;

pub use evaluation::{is_comparison_better, metric_callables, Metric, MetricFn};
pub use regression::{mae, mse, rmse};
