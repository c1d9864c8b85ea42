use crate::correction::{BiasCorrection, BiasCorrector, CorrectionMethod, ScoreReport};
use crate::errors::BiasCorrectionError;
use crate::metrics::{is_comparison_better, Metric};
use log::info;

/// Fit every correction method on the same pair of series and score each one.
///
/// Reports come back in [`CorrectionMethod::ALL`] order.
pub fn compare_methods(
    observed: &[f64],
    model: &[f64],
    metric: Metric,
) -> Result<Vec<(CorrectionMethod, ScoreReport)>, BiasCorrectionError> {
    CorrectionMethod::ALL
        .iter()
        .map(|method| {
            let mut corrector = BiasCorrector::new(*method);
            corrector.fit(observed, model)?;
            let report = corrector.score(observed, model, metric)?;
            info!("{} {}", method, report);
            Ok((*method, report))
        })
        .collect()
}

/// Method with the lowest error after correction.
/// Ties keep the earlier method, NaN errors never win.
pub fn best_method(reports: &[(CorrectionMethod, ScoreReport)]) -> Option<CorrectionMethod> {
    let mut best: Option<(CorrectionMethod, f64)> = None;
    for (method, report) in reports {
        match best {
            None => best = Some((*method, report.after)),
            Some((_, value)) => {
                if is_comparison_better(value, report.after) {
                    best = Some((*method, report.after));
                }
            }
        }
    }
    best.map(|(method, _)| method)
}
