//! tests for the sign-change scan driver
use approx::assert_abs_diff_eq;
use rootscan::root_finding::errors::FailureKind;
use rootscan::root_finding::scan::{sample_curve, scan_roots, ScanCfg, ScanError, ScanMethod};

type TestResult = Result<(), ScanError>;

fn cubic(x: f64) -> f64 {
    x * x * x - 6.0 * x * x + 11.0 * x - 6.0
}

fn cubic_prime(x: f64) -> f64 {
    3.0 * x * x - 12.0 * x + 11.0
}

fn near_cubic_root(x: f64) -> bool {
    [1.0, 2.0, 3.0].iter().any(|r| (x - r).abs() < 1e-4)
}

#[test]
fn every_method_finds_sqrt_2() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = ScanCfg::new(0.0, 4.0, 0.1)?;

    for method in [ScanMethod::Bisection, ScanMethod::Newton, ScanMethod::Secant] {
        let report = scan_roots(method, f, df, &cfg)?;

        assert_eq!(report.algorithm_name, method.algorithm().algorithm_name());
        assert_eq!(report.windows_tried, 1);
        assert_eq!(report.hits.len(), 1);
        assert!(report.misses.is_empty());

        let hit = report.hits[0];
        assert_eq!(hit.index, 1);
        assert!(hit.window.0 < 2.0_f64.sqrt() && 2.0_f64.sqrt() < hit.window.1);
        assert_abs_diff_eq!(hit.root(), 2.0_f64.sqrt(), epsilon = 1e-4);
    }
    Ok(())
}

#[test]
fn bisection_scan_of_cubic() -> TestResult {
    let cfg    = ScanCfg::new(0.0, 4.0, 0.1)?;
    let report = scan_roots(ScanMethod::Bisection, cubic, cubic_prime, &cfg)?;

    let roots = report.roots();
    assert_eq!(roots.len(), 3);
    for (root, expected) in roots.iter().zip([1.0, 2.0, 3.0]) {
        assert_abs_diff_eq!(*root, expected, epsilon = 1e-4);
    }

    // windows around the extrema of the cubic have no sign change in f
    assert_eq!(report.misses.len(), 2);
    for miss in &report.misses {
        assert_eq!(miss.kind, FailureKind::InvalidInput);
        assert_eq!(miss.iterations, 0);
    }
    Ok(())
}

#[test]
fn open_method_scans_of_cubic_land_on_roots() -> TestResult {
    let cfg = ScanCfg::new(0.0, 4.0, 0.1)?;

    for method in [ScanMethod::Newton, ScanMethod::Secant] {
        let report = scan_roots(method, cubic, cubic_prime, &cfg)?;

        assert!(report.found_any());
        assert!(report.roots().iter().all(|&x| near_cubic_root(x)));
        let indices: Vec<usize> = report.hits.iter().map(|h| h.index).collect();
        assert_eq!(indices, (1..=report.hits.len()).collect::<Vec<_>>());
    }
    Ok(())
}

#[test]
fn grid_point_on_root_is_an_exact_hit() -> TestResult {
    let f   = |x: f64| x - 1.0;
    let df  = |_x: f64| 1.0;
    let cfg = ScanCfg::new(0.0, 2.0, 0.5)?;

    for method in [ScanMethod::Bisection, ScanMethod::Newton, ScanMethod::Secant] {
        let report = scan_roots(method, f, df, &cfg)?;

        // no solver call: [0.5, 1] ends on the root, [1, 1.5] starts on it
        assert_eq!(report.windows_tried, 0);
        assert!(report.misses.is_empty());
        assert_eq!(report.hits.len(), 1);

        let hit = report.hits[0];
        assert_eq!(hit.index, 1);
        assert_eq!(hit.window, (1.0, 1.5));
        assert_eq!(hit.root(), 1.0);
        assert_eq!(hit.iterations(), 0);
        assert_eq!(hit.report.f_root, 0.0);
    }
    Ok(())
}

#[test]
fn nothing_to_find() -> TestResult {
    let f   = |x: f64| x * x + 1.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = ScanCfg::new(0.5, 2.0, 0.25)?;

    let report = scan_roots(ScanMethod::Secant, f, df, &cfg)?;

    assert!(!report.found_any());
    assert_eq!(report.windows_tried, 0);
    Ok(())
}

#[test]
fn scan_epsilon_reaches_the_solver() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let df  = |x: f64| 2.0 * x;
    let cfg = ScanCfg::new(1.0, 2.0, 0.5)?.set_epsilon(1e-12)?;

    let report = scan_roots(ScanMethod::Bisection, f, df, &cfg)?;

    assert_eq!(report.hits.len(), 1);
    assert_abs_diff_eq!(report.hits[0].root(), 2.0_f64.sqrt(), epsilon = 1e-12);
    Ok(())
}

#[test]
fn windows_cover_range() -> TestResult {
    let cfg     = ScanCfg::new(0.0, 1.0, 0.25)?;
    let windows: Vec<(f64, f64)> = cfg.windows().collect();

    assert_eq!(windows, vec![(0.0, 0.25), (0.25, 0.5), (0.5, 0.75), (0.75, 1.0)]);
    Ok(())
}

#[test]
fn invalid_scan_config() {
    assert!(matches!(ScanCfg::new(1.0, 1.0, 0.1), Err(ScanError::InvalidRange { .. })));
    assert!(matches!(ScanCfg::new(f64::NAN, 1.0, 0.1), Err(ScanError::InvalidRange { .. })));
    assert!(matches!(ScanCfg::new(0.0, 1.0, 0.0), Err(ScanError::InvalidStep { .. })));
    assert!(matches!(ScanCfg::new(0.0, 1.0, -0.1), Err(ScanError::InvalidStep { .. })));

    let cfg = ScanCfg::new(0.0, 1.0, 0.1).unwrap();
    assert!(matches!(cfg.set_epsilon(0.0), Err(ScanError::Tolerance(_))));
}

#[test]
fn samples_include_both_ends() -> TestResult {
    let samples = sample_curve(|x| 2.0 * x, 0.0, 1.0, 0.25)?;

    assert_eq!(
        samples,
        vec![(0.0, 0.0), (0.25, 0.5), (0.5, 1.0), (0.75, 1.5), (1.0, 2.0)]
    );
    Ok(())
}
