//! Newton-Raphson method

use super::algorithms::Algorithm; 
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied, Stencil}; 
use super::errors::{FailureDiagnostics, FailureKind, RootFindingError}; 
use super::config::{CommonCfg, impl_common_cfg, impl_iteration_cfg}; 
use super::tolerances::step_reached; 
use log::{debug, warn}; 
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::NEWTON;


#[derive(Debug, Error)] 
pub enum NewtonError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error("derivative is zero at x={x} (iteration {iter})")]
    ZeroDerivative { x: f64, iter: usize },

    #[error("step non-finite at x={x} (iteration {iter}); f(x)/f'(x) undefined")] 
    NonFiniteStep { x: f64, iter: usize }, 
}
impl FailureDiagnostics for NewtonError { 
    fn kind(&self) -> FailureKind { 
        match self { 
            NewtonError::RootFinding(e)         => e.kind(), 
            NewtonError::ZeroDerivative { .. }  
            | NewtonError::NonFiniteStep { .. } => FailureKind::SingularStep, 
        }
    }

    fn iterations(&self) -> usize { 
        match self { 
            NewtonError::RootFinding(e)              => e.iterations(), 
            NewtonError::ZeroDerivative { iter, .. } 
            | NewtonError::NonFiniteStep { iter, .. } => *iter, 
        }
    }
}


/// Newton configuration.
/// 
/// # Fields
/// - `common` : [`CommonCfg`] with `epsilon` and optional `max_iter`.
///
/// # Defaults
/// - `epsilon  = 1e-4`
/// - `max_iter = 100` ([`Algorithm::default_max_iter`])
#[derive(Debug, Copy, Clone, PartialEq, Default)] 
pub struct NewtonCfg {
    common: CommonCfg,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl_common_cfg!(NewtonCfg);
impl_iteration_cfg!(NewtonCfg, ALGORITHM);


#[inline] 
fn eval_counted<F>(f: &mut F, x: f64, evals: &mut usize) -> f64 
where F: FnMut(f64) -> f64 { 
    *evals += 1; 
    f(x)
}


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : its derivative; consistency with `func` is not checked
/// - `x0`    : initial guess
/// - `cfg`   : [`NewtonCfg`] (`epsilon`, `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with:
/// - `root`                : first iterate whose step was below `epsilon`
/// - `iterations`          : steps taken, counting the confirming one
/// - `evaluations`         : total evaluations (f and f')
/// - `tolerance_satisfied` : [`ToleranceSatisfied::StepSizeReached`]
/// - `stencil`             : iterate the final step was taken from
/// - `algorithm_name`      : "newton"
///
/// # Errors
/// - [`NewtonError::ZeroDerivative`] : `f'(x) == 0` at an iterate; no division is attempted
/// - [`NewtonError::NonFiniteStep`]  : `x - f(x)/f'(x)` is NaN/inf
///  
/// * Propagated via [`NewtonError::RootFinding`]:
/// - [`RootFindingError::NonConvergence`] : `max_iter` steps without `|x1 - x0| < epsilon`
///
/// # Notes
/// - Convergence is *local only*: quadratic near a simple root given a good `x0`, 
///   otherwise iterates may diverge or cycle until the iteration cap. 
///   For guaranteed convergence, use a **bracketed method** (e.g. bisection).
pub fn newton<F, G>( 
    mut func: F, 
    mut dfunc: G, 
    x0: f64, 
    cfg: NewtonCfg, 
) -> Result<RootFindingReport, NewtonError> 
where 
    F: FnMut(f64) -> f64, 
    G: FnMut(f64) -> f64 { 

    let epsilon   = cfg.epsilon(); 
    let num_iter  = cfg.max_iter(); 
    let algo_name = ALGORITHM.algorithm_name(); 

    let mut evals = 0; 
    let mut x     = x0; 
    for iter in 0..num_iter { 
        let fx  = eval_counted(&mut func,  x, &mut evals); 
        let dfx = eval_counted(&mut dfunc, x, &mut evals); 

        if dfx == 0.0 { 
            warn!("[{ALGORITHM}] derivative is zero at x = {x} (iteration {iter})");
            return Err(NewtonError::ZeroDerivative { x, iter }); 
        }

        let x_next = x - fx / dfx; 
        if !x_next.is_finite() { 
            warn!("[{ALGORITHM}] non-finite step from x = {x} (iteration {iter})");
            return Err(NewtonError::NonFiniteStep { x, iter }); 
        }

        if step_reached(x, x_next, epsilon) { 
            let f_root = eval_counted(&mut func, x_next, &mut evals); 
            debug!("[{ALGORITHM}] converged to x = {x_next} after {} iterations", iter + 1);
            return Ok(RootFindingReport {
                root                : x_next,
                f_root,
                iterations          : iter + 1,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                stencil             : Stencil::singleton(x), 
                algorithm_name      : algo_name,
            });
        }

        x = x_next; 
    }

    warn!("[{ALGORITHM}] did not converge within {num_iter} iterations");
    Err(RootFindingError::NonConvergence { iterations: num_iter }.into())
}
