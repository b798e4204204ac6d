// File: crates/graph-core/tests/sample.rs
// Purpose: Expression sampling: domains, per-point skipping, and failure modes.

use graph_core::{sample, BuildError};

#[test]
fn squares_over_symmetric_domain() {
    let series = sample("x^2", -2.0, 2.0, 1.0).expect("valid expression");
    let xs: Vec<f64> = series.iter().map(|s| s.x).collect();
    let ys: Vec<f64> = series.iter().map(|s| s.y).collect();
    assert_eq!(xs, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    assert_eq!(ys, vec![4.0, 1.0, 0.0, 1.0, 4.0]);
}

#[test]
fn skips_points_outside_log_domain() {
    // log of a non-positive number is not an error for the series, only
    // for the point; x <= 0 drops out, the rest survives.
    let series = sample("log(x)", -1.0, 1.0, 0.5).expect("valid overall");
    let xs: Vec<f64> = series.iter().map(|s| s.x).collect();
    assert_eq!(xs, vec![0.5, 1.0]);
}

#[test]
fn skips_division_by_zero_point() {
    let series = sample("1/x", -1.0, 1.0, 1.0).expect("valid overall");
    let xs: Vec<f64> = series.iter().map(|s| s.x).collect();
    assert_eq!(xs, vec![-1.0, 1.0]);
}

#[test]
fn malformed_expression_fails_validation() {
    assert_eq!(sample("1/0*bogus(", -1.0, 1.0, 1.0), Err(BuildError::InvalidExpression));
}

#[test]
fn blank_expression_is_missing() {
    assert_eq!(sample("", 0.0, 1.0, 1.0), Err(BuildError::MissingExpression));
    assert_eq!(sample("   \t ", 0.0, 1.0, 1.0), Err(BuildError::MissingExpression));
}

#[test]
fn non_positive_step_is_rejected_before_iterating() {
    assert_eq!(sample("x", 0.0, 10.0, 0.0), Err(BuildError::InvalidStep));
    assert_eq!(sample("x", 0.0, 10.0, -1.0), Err(BuildError::InvalidStep));
    assert_eq!(sample("x", 0.0, 10.0, f64::NAN), Err(BuildError::InvalidStep));
}

#[test]
fn zero_surviving_samples_is_an_error() {
    // valid expression, but NaN at every point of this domain
    assert_eq!(sample("sqrt(x)", -5.0, -1.0, 1.0), Err(BuildError::NoValidPoints));
}

#[test]
fn empty_domain_yields_no_points() {
    assert_eq!(sample("x", 5.0, 4.0, 1.0), Err(BuildError::NoValidPoints));
}

#[test]
fn labels_carry_one_decimal() {
    let series = sample("x", 0.0, 1.0, 0.25).expect("valid expression");
    let labels: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["0.0", "0.2", "0.5", "0.8", "1.0"]);
}

#[test]
fn input_is_case_folded() {
    let lower = sample("sin(x) + 1", 0.0, 3.0, 1.0).expect("valid expression");
    let upper = sample("SIN(X) + 1", 0.0, 3.0, 1.0).expect("valid expression");
    assert_eq!(lower, upper);
}

#[test]
fn constants_are_in_scope() {
    let series = sample("sin(pi * x) + e", 0.0, 2.0, 1.0).expect("valid expression");
    assert_eq!(series.len(), 3);
    // sin(0) + e
    assert!((series[0].y - std::f64::consts::E).abs() < 1e-9);
}

#[test]
fn inclusive_upper_bound() {
    let series = sample("x", 0.0, 4.0, 2.0).expect("valid expression");
    let xs: Vec<f64> = series.iter().map(|s| s.x).collect();
    assert_eq!(xs, vec![0.0, 2.0, 4.0]);
}
