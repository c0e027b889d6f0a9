//! Bisection method

use super::algorithms::Algorithm; 
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied, Stencil}; 
use super::errors::{FailureDiagnostics, FailureKind}; 
use super::config::{CommonCfg, impl_common_cfg}; 
use super::signs::opposite_sign; 
use super::tolerances::{residual_reached, width_reached}; 
use log::{debug, warn}; 
use thiserror::Error; 

const ALGORITHM: Algorithm = Algorithm::BISECTION;

#[derive(Debug, Error)]
pub enum BisectionError {
    #[error("no sign change on [{a}, {b}]: f(a) * f(b) >= 0")]
    NoSignChange  { a: f64, b: f64 },

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")] 
    InvalidBounds { a: f64, b: f64 },
}
impl FailureDiagnostics for BisectionError { 
    fn kind(&self) -> FailureKind { FailureKind::InvalidInput }

    // both variants are detected before the first halving 
    fn iterations(&self) -> usize { 0 }
}


/// Bisection configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`]; only `epsilon` is used. 
///
/// Bisection has no iteration cap: the loop ends once the half-width of 
/// the bracket drops to `epsilon`, which each halving guarantees.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct BisectionCfg { 
    common: CommonCfg, 
}
impl BisectionCfg { 
    #[must_use]
    pub fn new() -> Self { Self::default() } 
}
impl_common_cfg!(BisectionCfg);


/// Calculates midpoint of [a, b]; finite for any finite `a`, `b` 
#[inline] 
fn calculate_bisection(a: f64, b: f64) -> f64 { 
    a * 0.5 + b * 0.5
}


#[inline] 
fn eval_fx<F>(f: &mut F, x: f64, evals: &mut usize) -> f64 
where F: FnMut(f64) -> f64 { 
    *evals += 1; 
    f(x)
}


/// Finds a root of a function using the 
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the bracket. Must be finite.
/// ├ `b`    - Other end of the bracket. Must be finite. Either order is accepted.
/// └ `cfg`  - [`BisectionCfg`] (default `epsilon = 1e-4`)
///
/// # Returns
///
/// [`RootFindingReport`] with:
/// - `root`                : midpoint estimate
/// - `iterations`          : halvings performed, counting the one that produced `root`
/// - `tolerance_satisfied` : 
///     - [`ToleranceSatisfied::AbsFxReached`]    : `|f(m)| < epsilon` at a midpoint `m`
///     - [`ToleranceSatisfied::WidthTolReached`] : `|b - a| / 2 <= epsilon`
/// - `stencil`             : bracket that contained `root`
/// - `algorithm_name`      : "bisection"
///
/// # Errors
/// - [`BisectionError::InvalidBounds`] : `a` or `b` is NaN/inf.
/// - [`BisectionError::NoSignChange`]  : `f(a) * f(b) >= 0`; zero iterations.
///
/// # Behavior
/// - Each iteration evaluates `f(m)` at the midpoint; an early `|f(m)| < epsilon` 
///   returns `m` directly instead of shrinking further.
/// - Otherwise the endpoint sharing the sign of `f(m)` is replaced by `m`, so the 
///   bracket keeps its sign change and exactly halves.
/// - If `m` can no longer be separated from an endpoint (adjacent floats), the 
///   midpoint is returned with [`TerminationReason::MachinePrecisionReached`].
/// - On width exit, `f` is evaluated once more at the final midpoint for `f_root`.
pub fn bisection<F>(
    mut func: F,                
    mut a: f64, 
    mut b: f64, 
    cfg: BisectionCfg
) -> Result<RootFindingReport, BisectionError> 
where F: FnMut(f64) -> f64 {
    
    if !(a.is_finite() && b.is_finite()) { 
        warn!("[{ALGORITHM}] invalid bounds [{a}, {b}]: endpoints must be finite");
        return Err(BisectionError::InvalidBounds { a, b }); 
    }

    let epsilon   = cfg.epsilon(); 
    let algo_name = ALGORITHM.algorithm_name(); 
    let mut evals = 0; 

    let mut fa = eval_fx(&mut func, a, &mut evals); 
    let fb     = eval_fx(&mut func, b, &mut evals); 
    if !opposite_sign(fa, fb) { 
        warn!("[{ALGORITHM}] function does not change sign on [{a}, {b}]");
        return Err(BisectionError::NoSignChange { a, b }); 
    } 

    let mut iterations = 0; 
    while !width_reached(a, b, epsilon) { 
        iterations += 1; 
        let midpoint = calculate_bisection(a, b); 

        // bracket cannot shrink any further 
        if midpoint.is_finite() && (midpoint == a || midpoint == b) { 
            let fm = eval_fx(&mut func, midpoint, &mut evals); 
            debug!("[{ALGORITHM}] machine precision reached at x = {midpoint} (iteration {iterations})");
            return Ok(RootFindingReport { 
                root                : midpoint, 
                f_root              : fm, 
                iterations, 
                evaluations         : evals, 
                termination_reason  : TerminationReason::MachinePrecisionReached, 
                tolerance_satisfied : ToleranceSatisfied::WidthTolReached, 
                stencil             : Stencil::bracket(a, b), 
                algorithm_name      : algo_name, 
            });
        }

        let fm = eval_fx(&mut func, midpoint, &mut evals); 
        if residual_reached(fm, epsilon) { 
            debug!("[{ALGORITHM}] exact root found at x = {midpoint} (iteration {iterations})");
            return Ok(RootFindingReport { 
                root                : midpoint, 
                f_root              : fm, 
                iterations, 
                evaluations         : evals, 
                termination_reason  : TerminationReason::ToleranceReached, 
                tolerance_satisfied : ToleranceSatisfied::AbsFxReached, 
                stencil             : Stencil::bracket(a, b), 
                algorithm_name      : algo_name, 
            });
        }

        // shrink interval
        if opposite_sign(fa, fm) { 
            b = midpoint; 
        } else { 
            a  = midpoint; 
            fa = fm; 
        }
    }

    let root   = calculate_bisection(a, b); 
    let f_root = eval_fx(&mut func, root, &mut evals); 
    debug!("[{ALGORITHM}] converged to x = {root} after {iterations} iterations");

    Ok(RootFindingReport { 
        root, 
        f_root, 
        iterations, 
        evaluations         : evals, 
        termination_reason  : TerminationReason::ToleranceReached, 
        tolerance_satisfied : ToleranceSatisfied::WidthTolReached, 
        stencil             : Stencil::bracket(a, b), 
        algorithm_name      : algo_name, 
    })
}
