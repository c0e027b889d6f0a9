//! Root-finding error types.  
//! 
//! ┌ [`RootFindingError`] : errors shared by every method  
//! │   ├ iteration budget exhausted (non-convergence)  
//! │   ├ non-finite function evaluation  
//! │   └ invalid global parameters (e.g. max_iter) 
//! │
//! ├ [`ToleranceError`]   : invalid `epsilon`  
//! │
//! └ [`FailureKind`]      : category of any solver failure, 
//!                          reported through [`FailureDiagnostics`]  
//!
//! Method-specific errors live next to their method 
//! (e.g. [`super::newton::NewtonError`]) and wrap the shared ones.  
//! A solver's `Err` is the absence marker: there is no root, only the 
//! diagnostic iteration count and the reason. [`RootOutcome`] collapses 
//! any solver result into the uniform `(Option<root>, iterations)` pair.


use thiserror::Error; 
use super::report::RootFindingReport; 


/// Root-finding runtime errors shared by all methods.  
/// 
/// ┌ Iteration budget exhausted  
/// ├ Non-finite function evaluation  
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("did not converge within {iterations} iterations")]
    NonConvergence { iterations: usize },

    #[error("function non-finite at x={x}, f(x)={fx} (iteration {iter})")]
    NonFiniteEvaluation { x: f64, fx: f64, iter: usize },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}


/// Tolerance configuration errors.  
#[derive(Debug, Error)]
pub enum ToleranceError { 
    #[error("invalid `epsilon` tolerance: must be finite and > 0. got {got}")]
    InvalidEpsilon { got: f64 },
}


/// Category of a solver failure.  
/// 
/// ┌ [`FailureKind::InvalidInput`]    : degenerate start, detected before iterating  
/// ├ [`FailureKind::SingularStep`]    : zero derivative or zero secant denominator  
/// ├ [`FailureKind::EvaluationError`] : `f(x)` could not be evaluated  
/// └ [`FailureKind::NonConvergence`]  : iteration budget exhausted  
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind { 
    InvalidInput, 
    SingularStep, 
    EvaluationError, 
    NonConvergence, 
}
impl std::fmt::Display for FailureKind { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { 
        let name = match self { 
            FailureKind::InvalidInput    => "invalid input", 
            FailureKind::SingularStep    => "singular step", 
            FailureKind::EvaluationError => "evaluation error", 
            FailureKind::NonConvergence  => "non-convergence", 
        };
        write!(f, "{name}")
    }
}


/// Diagnostics every solver error carries.  
pub trait FailureDiagnostics: std::error::Error { 
    /// Which [`FailureKind`] occurred.
    fn kind(&self) -> FailureKind; 

    /// Iteration count reached when the failure was detected.
    fn iterations(&self) -> usize; 
}

impl FailureDiagnostics for RootFindingError { 
    fn kind(&self) -> FailureKind { 
        match self { 
            RootFindingError::NonConvergence { .. }      => FailureKind::NonConvergence, 
            RootFindingError::NonFiniteEvaluation { .. } => FailureKind::EvaluationError, 
            RootFindingError::InvalidMaxIter { .. }      => FailureKind::InvalidInput, 
        }
    }

    fn iterations(&self) -> usize { 
        match self { 
            RootFindingError::NonConvergence { iterations }     => *iterations, 
            RootFindingError::NonFiniteEvaluation { iter, .. }  => *iter, 
            RootFindingError::InvalidMaxIter { .. }             => 0, 
        }
    }
}


/// Uniform `(root | none, iterations)` view of a solver result.  
/// 
/// ```
/// use rootscan::root_finding::bisection::{bisection, BisectionCfg};
/// use rootscan::root_finding::errors::RootOutcome;
///
/// let (root, iterations) = bisection(|x: f64| x, 1.0, 2.0, BisectionCfg::new()).into_pair();
/// assert_eq!(root, None);
/// assert_eq!(iterations, 0);
/// ```
pub trait RootOutcome { 
    /// Root estimate, or `None` on failure.
    fn root(&self) -> Option<f64>; 

    /// Iterations consumed, on success or failure.
    fn iterations(&self) -> usize; 

    /// Failure category, `None` on success.
    fn failure_kind(&self) -> Option<FailureKind>; 

    fn into_pair(self) -> (Option<f64>, usize) where Self: Sized { 
        (self.root(), self.iterations())
    }
}

impl<E: FailureDiagnostics> RootOutcome for Result<RootFindingReport, E> { 
    fn root(&self) -> Option<f64> { 
        self.as_ref().ok().map(|report| report.root)
    }

    fn iterations(&self) -> usize { 
        match self { 
            Ok(report) => report.iterations, 
            Err(err)   => err.iterations(), 
        }
    }

    fn failure_kind(&self) -> Option<FailureKind> { 
        self.as_ref().err().map(|err| err.kind())
    }
}
