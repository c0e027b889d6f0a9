use super::algorithms::Algorithm; 
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied, Stencil}; 
use super::errors::{FailureDiagnostics, FailureKind, RootFindingError}; 
use super::config::{CommonCfg, impl_common_cfg, impl_iteration_cfg}; 
use super::tolerances::{residual_reached, step_reached}; 
use log::{debug, warn}; 
use std::convert::Infallible; 
use std::error::Error as StdError; 
use thiserror::Error; 

const ALGORITHM: Algorithm = Algorithm::SECANT;

/// Boxed error raised by a fallible function under evaluation.
pub type EvalError = Box<dyn StdError + Send + Sync + 'static>; 


#[derive(Debug, Error)] 
pub enum SecantError { 
    #[error(transparent)] 
    RootFinding(#[from] RootFindingError),

    #[error("invalid initial guesses: x0 and x1 are both {x}")]
    IdenticalGuesses { x: f64 }, 

    #[error("division by zero at iteration {iter}: f(x1) - f(x0) = 0")]
    ZeroDenominator { iter: usize }, 

    #[error("error evaluating function at x={x} (iteration {iter}): {source}")]
    Evaluation { 
        x: f64, 
        iter: usize, 
        #[source] 
        source: EvalError, 
    }, 
}
impl FailureDiagnostics for SecantError { 
    fn kind(&self) -> FailureKind { 
        match self { 
            SecantError::RootFinding(e)          => e.kind(), 
            SecantError::IdenticalGuesses { .. } => FailureKind::InvalidInput, 
            SecantError::ZeroDenominator { .. }  => FailureKind::SingularStep, 
            SecantError::Evaluation { .. }       => FailureKind::EvaluationError, 
        }
    }

    fn iterations(&self) -> usize { 
        match self { 
            SecantError::RootFinding(e)          => e.iterations(), 
            SecantError::IdenticalGuesses { .. } => 0, 
            SecantError::ZeroDenominator { iter } 
            | SecantError::Evaluation { iter, .. } => *iter, 
        }
    }
}


/// Secant configuration 
///
/// # Fields 
/// - `common` : [`CommonCfg`] with `epsilon` and optional `max_iter`.
///
/// # Defaults 
/// - `epsilon  = 1e-4`
/// - `max_iter = 100` ([`Algorithm::default_max_iter`])
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SecantCfg { 
    common: CommonCfg, 
}
impl SecantCfg { 
    #[must_use]
    pub fn new() -> Self { Self::default() }
}
impl_common_cfg!(SecantCfg);
impl_iteration_cfg!(SecantCfg, ALGORITHM);


/// Evaluates `f(x)`, counting the call and turning both a returned error 
/// and a non-finite value into a [`SecantError`] tagged with `iter`.
#[inline] 
fn eval_checked<F, E>(
    f: &mut F, 
    x: f64, 
    iter: usize, 
    evals: &mut usize
) -> Result<f64, SecantError> 
where 
    F: FnMut(f64) -> Result<f64, E>, 
    E: Into<EvalError> { 
    *evals += 1; 
    let fx = f(x).map_err(|e| SecantError::Evaluation { x, iter, source: e.into() })?; 
    if !fx.is_finite() { 
        return Err(RootFindingError::NonFiniteEvaluation { x, fx, iter }.into()); 
    }

    Ok(fx)
}


/// Finds a root of a function using the 
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// Infallible front end for [`try_secant`]: a NaN/inf `f(x)` is reported as 
/// [`RootFindingError::NonFiniteEvaluation`].
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess. Must differ from `x1`
/// - `x1`   : Second initial guess
/// - `cfg`  : [`SecantCfg`] (`epsilon`, `max_iter`)
pub fn secant<F>( 
    mut func: F, 
    x0: f64, 
    x1: f64,
    cfg: SecantCfg
) -> Result<RootFindingReport, SecantError> 
where F: FnMut(f64) -> f64 { 
    try_secant(|x| Ok::<f64, Infallible>(func(x)), x0, x1, cfg)
}


/// Finds a root of a possibly partial function using the secant method.
///
/// # Arguments
/// - `func` : The function whose root is to be found; may return `Err` 
///            outside its domain
/// - `x0`   : First initial guess. Must differ from `x1`
/// - `x1`   : Second initial guess
/// - `cfg`  : [`SecantCfg`] (`epsilon`, `max_iter`)
///
/// # Returns
/// [`RootFindingReport`] with 
/// - `root`                : approximate root
/// - `f_root`              : function value at `root` (NaN if it could not be evaluated)
/// - `iterations`          : iterations counted towards the result
/// - `evaluations`         : total function evaluations 
/// - `tolerance_satisfied` : 
///     - [`ToleranceSatisfied::AbsFxReached`]    : `|f(x0)| < epsilon` or `|f(x1)| < epsilon`
///     - [`ToleranceSatisfied::StepSizeReached`] : `|x2 - x1| < epsilon`
/// - `stencil`             : the pair `{x0, x1}` that produced the result
/// - `algorithm_name`      : "secant"
///
/// # Errors
/// - [`SecantError::IdenticalGuesses`] : `x0 == x1`; zero iterations
/// - [`SecantError::ZeroDenominator`]  : `f(x1) - f(x0) == 0`; no division is attempted
/// - [`SecantError::Evaluation`]       : `func` returned `Err`
/// 
/// * Propagated via [`SecantError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`] : `f(x)` produced NaN/inf
/// - [`RootFindingError::NonConvergence`]      : `max_iter` iterations without convergence
///
/// # Behavior
/// - Each iteration checks `|f(x0)|` before `|f(x1)|`, so `x0` wins ties, then 
///   applies x2 = x1 - f(x1) * (x1 - x0) / (f(x1) - f(x0)).
/// - `|x2 - x1| < epsilon` returns `x2` with the confirming iteration counted.
/// - Otherwise the window shifts: `(x0, x1) <- (x1, x2)`.
///
/// # Warning 
/// - No bracket is kept, so poor initial guesses may diverge; this is only 
///   caught by the iteration cap.
pub fn try_secant<F, E>( 
    mut func: F, 
    x0: f64, 
    x1: f64,
    cfg: SecantCfg
) -> Result<RootFindingReport, SecantError> 
where 
    F: FnMut(f64) -> Result<f64, E>, 
    E: Into<EvalError> { 

    if x0 == x1 { 
        warn!("[{ALGORITHM}] invalid input: x0 and x1 are the same ({x0})");
        return Err(SecantError::IdenticalGuesses { x: x0 });
    }

    let epsilon   = cfg.epsilon(); 
    let num_iter  = cfg.max_iter(); 
    let algo_name = ALGORITHM.algorithm_name(); 

    let mut evals  = 0; 
    let mut x_prev = x0; 
    let mut x_curr = x1; 
    // f(x_prev) carried over from the previous iteration
    let mut f_carry: Option<f64> = None; 

    for iter in 0..num_iter { 
        let f_prev = match f_carry { 
            Some(v) => v, 
            None    => eval_checked(&mut func, x_prev, iter, &mut evals)
                .inspect_err(|e| warn!("[{ALGORITHM}] {e}"))?, 
        };
        let f_curr = eval_checked(&mut func, x_curr, iter, &mut evals)
            .inspect_err(|e| warn!("[{ALGORITHM}] {e}"))?; 

        if residual_reached(f_prev, epsilon) { 
            debug!("[{ALGORITHM}] exact root found at x = {x_prev} (iteration {iter})");
            return Ok(RootFindingReport {
                root                : x_prev, 
                f_root              : f_prev, 
                iterations          : iter, 
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached, 
                tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
                stencil             : Stencil::doubleton(x_prev, x_curr),
                algorithm_name      : algo_name
            }); 
        }
        if residual_reached(f_curr, epsilon) { 
            debug!("[{ALGORITHM}] exact root found at x = {x_curr} (iteration {iter})");
            return Ok(RootFindingReport {
                root                : x_curr, 
                f_root              : f_curr, 
                iterations          : iter, 
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached, 
                tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
                stencil             : Stencil::doubleton(x_prev, x_curr),
                algorithm_name      : algo_name
            }); 
        }

        let denom = f_curr - f_prev; 
        if denom == 0.0 { 
            warn!("[{ALGORITHM}] division by zero detected at iteration {iter}: f(x1) - f(x0) = 0");
            return Err(SecantError::ZeroDenominator { iter }); 
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / denom; 
        if step_reached(x_curr, x_next, epsilon) { 
            evals += 1; 
            let f_root = func(x_next).unwrap_or(f64::NAN); 
            debug!("[{ALGORITHM}] converged to x = {x_next} after {} iterations", iter + 1);
            return Ok(RootFindingReport {
                root                : x_next, 
                f_root, 
                iterations          : iter + 1, 
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached, 
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                stencil             : Stencil::doubleton(x_prev, x_curr),
                algorithm_name      : algo_name
            }); 
        }

        x_prev  = x_curr; 
        x_curr  = x_next; 
        f_carry = Some(f_curr); 
    }

    warn!("[{ALGORITHM}] did not converge within {num_iter} iterations");
    Err(RootFindingError::NonConvergence { iterations: num_iter }.into())
}
