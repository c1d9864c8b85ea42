use bias_correction::utils::nan_mean;
use bias_correction::{
    compare_methods, mae, mse, rmse, BiasCorrection, BiasCorrectionError, BiasCorrector, CorrectionConfig,
    CorrectionMethod, FitStatus, LinearReg, Metric, Scale, Shift,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn synthetic_observed(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(5.0..50.0)).collect()
}

fn with_gaps(v: &[f64], every: usize) -> Vec<f64> {
    v.iter()
        .enumerate()
        .map(|(i, x)| if i % every == 0 { f64::NAN } else { *x })
        .collect()
}

#[test]
fn test_rmse_matches_sqrt_mse_random() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let a: Vec<f64> = (0..50).map(|_| rng.gen_range(-100.0..100.0)).collect();
        let b: Vec<f64> = (0..50).map(|_| rng.gen_range(-100.0..100.0)).collect();
        let r = rmse(&a, &b).unwrap();
        assert!((r - mse(&a, &b).unwrap().sqrt()).abs() < 1e-9);
        assert!((mae(&a, &b).unwrap() - mae(&b, &a).unwrap()).abs() < 1e-9);
    }
}

#[test]
fn test_shift_recovers_observed_mean() {
    let observed = with_gaps(&synthetic_observed(200, 0), 7);
    let mut rng = StdRng::seed_from_u64(1);
    let model: Vec<f64> = synthetic_observed(200, 0)
        .iter()
        .map(|o| o + 4.0 + rng.gen_range(-1.0..1.0))
        .collect();

    let mut shift = Shift::new();
    assert_eq!(shift.fit(&observed, &model).unwrap(), FitStatus::Fitted);
    let corrected = shift.correct(&model).unwrap();
    assert_eq!(corrected.len(), model.len());
    assert!((nan_mean(&corrected) - nan_mean(&observed)).abs() < 1e-9);
}

#[test]
fn test_scale_recovers_observed_mean() {
    let observed = synthetic_observed(150, 2);
    let model: Vec<f64> = observed.iter().map(|o| o * 1.8).collect();

    let mut scale = Scale::new();
    scale.fit(&observed, &model).unwrap();
    let corrected = scale.correct(&model).unwrap();
    assert!((nan_mean(&corrected) / nan_mean(&observed) - 1.0).abs() < 1e-9);

    let report = scale.score(&observed, &model, Metric::MeanSquaredError).unwrap();
    assert!(report.after <= report.before);
}

#[test]
fn test_linear_reference_case() {
    let mut lr = LinearReg::new();
    lr.fit(&[2.0, 4.0, 6.0], &[1.0, 2.0, 3.0]).unwrap();
    let (slope, intercept) = lr.coefficients().unwrap();
    assert!((slope - 2.0).abs() < 1e-9);
    assert!(intercept.abs() < 1e-9);
    let corrected = lr.correct(&[4.0]).unwrap();
    assert!((corrected[0] - 8.0).abs() < 1e-9);
}

#[test]
fn test_linear_recovers_affine_bias() {
    let observed = synthetic_observed(300, 3);
    let model: Vec<f64> = observed.iter().map(|o| (o - 2.0) / 0.8).collect();

    let mut lr = LinearReg::new();
    lr.fit(&observed, &model).unwrap();
    let (slope, intercept) = lr.coefficients().unwrap();
    assert!((slope - 0.8).abs() < 1e-6);
    assert!((intercept - 2.0).abs() < 1e-5);

    let report = lr.score_by_name(&observed, &model, "rmse").unwrap();
    assert!(report.after < 1e-3);
    assert!(report.after <= report.before);
}

#[test]
fn test_degraded_fit_is_identity_for_all_methods() {
    let observed = vec![f64::NAN, f64::NAN];
    let model = vec![3.0, 4.0];
    for method in CorrectionMethod::ALL {
        let mut corrector = BiasCorrector::new(method);
        let status = corrector.fit(&observed, &model).unwrap();
        assert!(status.is_degraded(), "{} should report a degraded fit", method);
        assert_eq!(corrector.correct(&model).unwrap(), model);
    }
}

#[test]
fn test_degraded_fit_on_empty_series() {
    for method in CorrectionMethod::ALL {
        let mut corrector = BiasCorrector::new(method);
        assert_eq!(corrector.fit(&[], &[]).unwrap(), FitStatus::Degraded);
        assert!(corrector.correct(&[]).unwrap().is_empty());
        assert_eq!(corrector.correct(&[2.5]).unwrap(), vec![2.5]);
    }
    assert!(mae(&[], &[]).unwrap().is_nan());
}

#[test]
fn test_all_missing_model_gives_nan_parameters() {
    let observed = vec![1.0, 2.0, 3.0];
    let model = vec![f64::NAN; 3];

    let mut shift = Shift::new();
    shift.fit(&observed, &model).unwrap();
    assert!(shift.offset().unwrap().is_nan());

    let mut scale = Scale::new();
    scale.fit(&observed, &model).unwrap();
    assert!(scale.factor().unwrap().is_nan());
}

#[test]
fn test_degraded_parameters() {
    let observed = vec![f64::NAN, f64::NAN];
    let model = vec![1.0, 9.0];

    let mut shift = Shift::new();
    shift.fit(&observed, &model).unwrap();
    assert_eq!(shift.offset(), Some(0.0));

    let mut scale = Scale::new();
    scale.fit(&observed, &model).unwrap();
    assert_eq!(scale.factor(), Some(1.0));

    let mut lr = LinearReg::new();
    lr.fit(&observed, &model).unwrap();
    assert_eq!(lr.coefficients(), Some((1.0, 0.0)));
}

#[test]
fn test_score_keys_and_improvement() {
    let observed = synthetic_observed(100, 4);
    let model: Vec<f64> = observed.iter().map(|o| o - 6.5).collect();

    let mut shift = Shift::new();
    shift.fit(&observed, &model).unwrap();
    let map = shift.score_by_name(&observed, &model, "mae").unwrap().to_map();
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    assert_eq!(keys, vec!["mae_after", "mae_before"]);
    assert!(map["mae_after"] <= map["mae_before"]);
    assert!((map["mae_before"] - 6.5).abs() < 1e-9);
}

#[test]
fn test_correct_new_series_with_fitted_parameters() {
    let observed = synthetic_observed(50, 5);
    let model: Vec<f64> = observed.iter().map(|o| o + 2.0).collect();
    let mut shift = Shift::new();
    shift.fit(&observed, &model).unwrap();

    let future_model = vec![12.0, 22.0, f64::NAN];
    let corrected = shift.correct(&future_model).unwrap();
    assert!((corrected[0] - 10.0).abs() < 1e-9);
    assert!((corrected[1] - 20.0).abs() < 1e-9);
    assert!(corrected[2].is_nan());
}

#[test]
fn test_usage_errors() {
    let corrector = BiasCorrector::new(CorrectionMethod::LinearRegression);
    assert!(matches!(
        corrector.correct(&[1.0]),
        Err(BiasCorrectionError::NotFitted(_))
    ));

    let mut shift = Shift::new();
    assert_eq!(
        shift.fit(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
        Err(BiasCorrectionError::ShapeMismatch(2, 3))
    );
    shift.fit(&[1.0, 2.0], &[1.0, 2.0]).unwrap();
    assert!(matches!(
        shift.score_by_name(&[1.0, 2.0], &[1.0, 2.0], "nse"),
        Err(BiasCorrectionError::ParseString(..))
    ));
}

#[test]
fn test_config_driven_workflow() {
    let config = CorrectionConfig::from_json_str(r#"{"method": "scale"}"#).unwrap();
    let observed = synthetic_observed(80, 6);
    let model: Vec<f64> = observed.iter().map(|o| o * 0.5).collect();

    let mut corrector = BiasCorrector::from_config(&config).unwrap();
    corrector.fit(&observed, &model).unwrap();
    let report = corrector.score_by_name(&observed, &model, "rmse").unwrap();
    assert_eq!(report.key_after(), "rmse_after");
    assert!(report.after < 1e-9);
}

#[test]
fn test_compare_methods_reports_every_method() {
    let observed = synthetic_observed(120, 8);
    let model: Vec<f64> = observed.iter().map(|o| o * 1.3 + 1.0).collect();
    let reports = compare_methods(&observed, &model, Metric::MeanAbsoluteError).unwrap();
    let methods: Vec<CorrectionMethod> = reports.iter().map(|(m, _)| *m).collect();
    assert_eq!(methods, CorrectionMethod::ALL.to_vec());
    for (_, report) in &reports {
        assert!(report.improved());
    }
    assert_eq!(
        bias_correction::best_method(&reports),
        Some(CorrectionMethod::LinearRegression)
    );
}
