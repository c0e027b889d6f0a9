use rootscan::root_finding::algorithms::{Algorithm, BracketFamily, OpenFamily};
use rootscan::root_finding::bisection::BisectionCfg;
use rootscan::root_finding::config::DEFAULT_EPSILON;
use rootscan::root_finding::errors::{RootFindingError, ToleranceError};
use rootscan::root_finding::newton::NewtonCfg;
use rootscan::root_finding::secant::SecantCfg;

#[test]
fn defaults() {
    assert_eq!(DEFAULT_EPSILON, 1e-4);
    assert_eq!(BisectionCfg::new().epsilon(), 1e-4);
    assert_eq!(NewtonCfg::new().epsilon(), 1e-4);
    assert_eq!(NewtonCfg::new().max_iter(), 100);
    assert_eq!(SecantCfg::new().max_iter(), 100);
}

#[test]
fn setters_override_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = SecantCfg::new().set_epsilon(1e-8)?.set_max_iter(7)?;

    assert_eq!(cfg.epsilon(), 1e-8);
    assert_eq!(cfg.max_iter(), 7);
    Ok(())
}

#[test]
fn invalid_epsilon() {
    for bad in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
        let err = BisectionCfg::new().set_epsilon(bad).unwrap_err();
        assert!(matches!(err, ToleranceError::InvalidEpsilon { .. }));

        let err = NewtonCfg::new().set_epsilon(bad).unwrap_err();
        assert!(matches!(err, ToleranceError::InvalidEpsilon { .. }));
    }
}

#[test]
fn invalid_max_iter_zero() {
    let err = NewtonCfg::new().set_max_iter(0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidMaxIter { got: 0 }));

    let err = SecantCfg::new().set_max_iter(0).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidMaxIter { got: 0 }));
}

#[test]
fn algorithm_names_and_budgets() {
    assert_eq!(Algorithm::Bracket(BracketFamily::Bisection).to_string(), "bisection");
    assert_eq!(Algorithm::Open(OpenFamily::Newton).to_string(), "newton");
    assert_eq!(Algorithm::Open(OpenFamily::Secant).to_string(), "secant");

    assert_eq!(Algorithm::BISECTION.default_max_iter(), None);
    assert_eq!(Algorithm::NEWTON.default_max_iter(), Some(100));
    assert_eq!(Algorithm::SECANT.default_max_iter(), Some(100));
}
