//! tests for the bisection root finding algorithm 
use approx::assert_abs_diff_eq; 
use rootscan::root_finding::bisection::{bisection, BisectionCfg, BisectionError};
use rootscan::root_finding::errors::{FailureDiagnostics, FailureKind, RootOutcome};
use rootscan::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), BisectionError>;

#[test]
fn no_sign_change_returns_none_without_iterating() {
    let f   = |x: f64| x;
    let res = bisection(f, 1.0, 2.0, BisectionCfg::new());

    assert!(matches!(res, Err(BisectionError::NoSignChange { a, b }) if a == 1.0 && b == 2.0));
    assert_eq!(res.failure_kind(), Some(FailureKind::InvalidInput));
    assert_eq!(res.into_pair(), (None, 0));
}

#[test]
fn root_on_endpoint_is_not_a_sign_change() {
    let f   = |x: f64| x - 1.0;
    let err = bisection(f, 1.0, 2.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::NoSignChange { .. }));
    assert_eq!(err.iterations(), 0);
}

#[test]
fn midpoint_exact_root_returns_on_first_iteration() -> TestResult {
    let f   = |x: f64| x - 1.0;
    let res = bisection(f, 0.0, 2.0, BisectionCfg::new())?;

    assert_eq!(res.root, 1.0);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::AbsFxReached);
    assert_eq!(res.stencil.stencil(), &[0.0, 2.0]);
    assert_eq!(res.algorithm_name, "bisection");
    Ok(())
}

#[test]
fn finds_sqrt_2_within_default_epsilon() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = bisection(f, 0.0, 2.0, BisectionCfg::new())?;

    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-4);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn tighter_epsilon_tightens_root() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let cfg = BisectionCfg::new().set_epsilon(1e-10).unwrap();
    let res = bisection(f, 0.0, 2.0, cfg)?;

    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-10);
    Ok(())
}

#[test]
fn accepts_reversed_bounds() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let res = bisection(f, 2.0, 0.0, BisectionCfg::new())?;

    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-4);
    assert!(res.iterations > 0);
    Ok(())
}

#[test]
fn bracket_halves_every_iteration() -> TestResult {
    // step function: |f| never drops below epsilon, only the width can stop the loop
    let mut xs = Vec::new();
    let f = |x: f64| {
        xs.push(x);
        if x < 1.0 / 3.0 { -1.0 } else { 1.0 }
    };
    let res = bisection(f, 0.0, 1.0, BisectionCfg::new())?;

    // half-width 2^-14 is the first <= 1e-4
    assert_eq!(res.iterations, 13);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::WidthTolReached);
    assert_eq!(res.stencil.width(), Some(0.5_f64.powi(13)));

    // xs = [a, b, m_1 .. m_13, final midpoint]
    let midpoints = &xs[2..15];
    for (k, pair) in midpoints.windows(2).enumerate() {
        let width_after_k = 0.5_f64.powi(k as i32 + 1);
        assert_eq!((pair[1] - pair[0]).abs(), width_after_k / 2.0);
    }
    assert_eq!(xs.len(), 16);
    assert_eq!(res.evaluations, 16);
    Ok(())
}

#[test]
fn midpoint_of_widest_finite_bracket_stays_finite() -> TestResult {
    // b - a overflows to inf, (a + b) / 2 does not
    let f   = |x: f64| x;
    let res = bisection(f, -1e308, 1e308, BisectionCfg::new());

    assert_eq!(res.into_pair(), (Some(0.0), 1));

    let res = bisection(f, -f64::MAX, f64::MAX / 2.0, BisectionCfg::new())?;
    assert!(res.root.is_finite());
    assert_eq!(res.termination_reason, TerminationReason::ToleranceReached);
    assert!(res.stencil.stencil().iter().all(|x| x.is_finite()));
    Ok(())
}

#[test]
fn invalid_bounds() {
    let f   = |x: f64| x;
    let err = bisection(f, f64::NAN, 1.0, BisectionCfg::new()).unwrap_err();

    assert!(matches!(err, BisectionError::InvalidBounds { .. }));
    assert_eq!(err.kind(), FailureKind::InvalidInput);
}

#[test]
fn adjacent_floats_stop_at_machine_precision() -> TestResult {
    let a   = 1.0;
    let b   = 1.0 + f64::EPSILON;
    let f   = |x: f64| (x - 1.0) - f64::EPSILON / 2.0;
    let cfg = BisectionCfg::new().set_epsilon(1e-300).unwrap();
    let res = bisection(f, a, b, cfg)?;

    assert_eq!(res.termination_reason, TerminationReason::MachinePrecisionReached);
    assert_eq!(res.iterations, 1);
    assert!(res.root == a || res.root == b);
    Ok(())
}

#[test]
fn repeated_calls_are_identical() -> TestResult {
    let f      = |x: f64| x.cos() - x;
    let first  = bisection(f, 0.0, 1.0, BisectionCfg::new())?;
    let second = bisection(f, 0.0, 1.0, BisectionCfg::new())?;

    assert_eq!(first, second);
    Ok(())
}
