use crate::errors::BiasCorrectionError;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    items.join(", ")
}

// Validation
pub fn validate_int_parameter(value: i32, min: i32, max: i32, parameter: &str) -> Result<(), BiasCorrectionError> {
    if value < min || max < value {
        let ex_msg = format!("integer value within range {} and {}", min, max);
        Err(BiasCorrectionError::InvalidParameter(
            parameter.to_string(),
            ex_msg,
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Check that two paired series line up positionally.
#[inline]
pub fn validate_paired(observed: &[f64], model: &[f64]) -> Result<(), BiasCorrectionError> {
    if observed.len() != model.len() {
        Err(BiasCorrectionError::ShapeMismatch(observed.len(), model.len()))
    } else {
        Ok(())
    }
}

/// Number of values that are not missing.
#[inline]
pub fn count_valid(v: &[f64]) -> usize {
    v.iter().filter(|x| !x.is_nan()).count()
}

/// Mean of all non-missing values.
/// Returns NaN when every value is missing.
pub fn nan_mean(v: &[f64]) -> f64 {
    let (sum, n) = v
        .iter()
        .filter(|x| !x.is_nan())
        .fold((0.0, 0usize), |(s, n), x| (s + x, n + 1));
    if n == 0 {
        f64::NAN
    } else {
        sum / n as f64
    }
}

/// Pairs where neither value is missing, returned as (x, y) columns.
pub fn complete_pairs(x: &[f64], y: &[f64]) -> (Vec<f64>, Vec<f64>) {
    x.iter()
        .zip(y)
        .filter(|(x_, y_)| !x_.is_nan() && !y_.is_nan())
        .map(|(x_, y_)| (*x_, *y_))
        .unzip()
}

/// Round to `precision` decimals, halves go to the even neighbour.
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round_ties_even() / p
}
