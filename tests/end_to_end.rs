//! Whole-pipeline tests through the facade

use approx::assert_relative_eq;
use paired_stats::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn example_request_from_text_fields() {
    init_tracing();
    let input = PairedInput::from_fields(
        "10, 12, 9, 15, 11",
        "8,11,9,13,10",
        TTestConfig::default(),
    )
    .unwrap();
    let Analysis { result, curve } = compute_and_render(&input).unwrap();

    assert_relative_eq!(result.mean_diff, 1.2, epsilon = 1e-12);
    assert_relative_eq!(result.t_statistic, 3.207_134_902_949_093, epsilon = 1e-9);
    assert_relative_eq!(result.p_value, 0.032_677_923_336_803, epsilon = 1e-8);
    assert_relative_eq!(result.confidence_interval.lower, 0.161_149_366_316_432, epsilon = 1e-8);
    assert_relative_eq!(result.confidence_interval.upper, 2.238_850_633_683_568, epsilon = 1e-8);
    assert_eq!(result.decision, Decision::RejectNull);

    assert_eq!(curve.points.len(), 81);
    assert_relative_eq!(curve.critical_left, -2.131_846_786_326_65, epsilon = 1e-9);

    let report = result.report().to_string();
    assert!(report.contains("t statistic: 3.2071"));
    assert!(report.contains("Reject H0"));
}

#[test]
fn csv_request_with_one_sided_alternative() {
    init_tracing();
    let config = TTestConfig::default().with_alternative(AlternativeHypothesis::Right);
    let csv = "10,8\n12,11\n9,9\n15,13\n11,10\n";
    let input = PairedInput::from_csv_reader(csv.as_bytes(), config).unwrap();
    let analysis = compute_and_render(&input).unwrap();

    assert_relative_eq!(analysis.result.p_value, 0.016_338_961_668_401, epsilon = 1e-8);
    assert_eq!(analysis.result.alternative, AlternativeHypothesis::Right);
}

#[test]
fn zero_variance_request_fails() {
    init_tracing();
    let input = PairedInput::new(vec![3.0, 4.0, 5.0], vec![2.0, 3.0, 4.0], TTestConfig::default());
    let err = compute_and_render(&input).unwrap_err();
    assert!(err.is_zero_variance());
}

#[test]
fn unparseable_field_is_rejected() {
    let err = PairedInput::from_fields("1,a", "1,2", TTestConfig::default()).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn analysis_serializes_to_json() {
    let input = PairedInput::new(
        vec![10.0, 12.0, 9.0, 15.0, 11.0],
        vec![8.0, 11.0, 9.0, 13.0, 10.0],
        TTestConfig::default(),
    );
    let analysis = compute_and_render(&input).unwrap();
    let json = serde_json::to_string(&analysis).unwrap();
    let back: Analysis = serde_json::from_str(&json).unwrap();
    assert_eq!(back.result.degrees_of_freedom, 4);
    assert_eq!(back.curve.points.len(), analysis.curve.points.len());
}
