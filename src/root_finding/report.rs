//! Defines the [`RootFindingReport`] struct returned by all 
//! root-finding algorithms on success. 
//!
//! Failures are never encoded in the report; they travel on the `Err` 
//! side of each solver's `Result` (see [`super::errors`]).

/// Reasons a root-finding algorithm may terminate successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)] 
pub enum TerminationReason { 
    ToleranceReached, 
    MachinePrecisionReached, 
}


/// Which tolerance condition was satisfied.
/// - [`ToleranceSatisfied::AbsFxReached`]    
///     - All methods 
///     - |f(x)| < epsilon
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - [`super::algorithms::Algorithm::Bracket`] 
///     - |b - a| / 2 <= epsilon 
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - [`super::algorithms::Algorithm::Open`] 
///     - |x_n - x_{n - 1}| < epsilon 
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied { 
    AbsFxReached, 
    WidthTolReached, 
    StepSizeReached, 
}


/// Method-specific data returned by a solver. 
/// Contains the last set of points used in the update formula. 
/// - [`Stencil::Bracket`] : bracketing methods  
///     - `left`, `right` bounds of the final interval  
/// - [`Stencil::Open`]    : open methods  
///     - `x` = last iterate(s) used to compute the root  
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Stencil { 
    Bracket { bounds: [f64; 2] },
    Open    { x: [f64; 2], len: usize }, 
}
impl Stencil { 
    pub fn stencil(&self) -> &[f64] { 
        match self { 
            Stencil::Bracket { bounds } => &bounds[..],
            Stencil::Open { x, len }    => &x[..*len],
        }
    }
    pub fn bracket(a: f64, b: f64) -> Self { 
        Stencil::Bracket { bounds: [a, b] }
    }
    pub fn singleton(x: f64) -> Self { 
        Stencil::Open { x: [x, 0.0], len: 1 }
    }
    pub fn doubleton(x1: f64, x2: f64) -> Self { 
        Stencil::Open { x: [x1, x2], len: 2 }
    }

    /// Width of a bracket stencil, `None` for open stencils. 
    pub fn width(&self) -> Option<f64> { 
        match self { 
            Stencil::Bracket { bounds } => Some((bounds[1] - bounds[0]).abs()), 
            Stencil::Open { .. }        => None, 
        }
    }
}


/// Final report returned by all root-finding algorithms.  
/// 
/// [`RootFindingReport`]
/// - `root`                : root estimate  
/// - `f_root`              : function value at `root`  
/// - `iterations`          : iterations counted towards the result  
/// - `evaluations`         : total function (and derivative) evaluations  
/// - `termination_reason`  : why the solver stopped  ([`TerminationReason`])  
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`]) 
/// - `stencil`             : last set of points used in update formula    
/// - `algorithm_name`      : algorithm name (e.g. `"bisection"`)  
#[derive(Debug, Copy, Clone, PartialEq)] 
pub struct RootFindingReport {
    pub root                : f64, 
    pub f_root              : f64, 
    pub iterations          : usize, 
    pub evaluations         : usize, 
    pub termination_reason  : TerminationReason, 
    pub tolerance_satisfied : ToleranceSatisfied, 
    pub stencil             : Stencil, 
    pub algorithm_name      : &'static str, 
}
