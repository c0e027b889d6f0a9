//! Sign-change scan driver.  
//! 
//! Walks `[start, end)` in fixed windows `[x, x + step]` and hands every 
//! window where `f` or `f'` changes sign to one of the solvers. A grid 
//! point with `f(x) == 0` is recorded as an exact root without a solver call.  
//! ├ [`ScanMethod::Bisection`] : bisection on the window  
//! ├ [`ScanMethod::Newton`]    : Newton seeded at the window midpoint  
//! └ [`ScanMethod::Secant`]    : secant seeded with the window endpoints  
//!
//! Every attempt ends up in the [`ScanReport`] as a [`ScanHit`] or a 
//! [`ScanMiss`]. Hits are not deduplicated: two windows may converge 
//! to the same root.  
//!
//! [`sample_curve`] produces the `(x, f(x))` points a plotting front end 
//! needs to draw `f` next to the roots.

use super::algorithms::Algorithm; 
use super::bisection::{bisection, BisectionCfg}; 
use super::newton::{newton, NewtonCfg}; 
use super::secant::{secant, SecantCfg}; 
use super::config::DEFAULT_EPSILON; 
use super::errors::{FailureDiagnostics, FailureKind, ToleranceError}; 
use super::report::{RootFindingReport, TerminationReason, ToleranceSatisfied, Stencil}; 
use super::signs::opposite_sign; 
use log::{debug, info}; 
use thiserror::Error; 


#[derive(Debug, Error)]
pub enum ScanError { 
    #[error(transparent)]
    Tolerance(#[from] ToleranceError), 

    #[error("invalid range: start and end must be finite with start < end. got [{start}, {end}]")]
    InvalidRange { start: f64, end: f64 }, 

    #[error("invalid step: must be finite and > 0. got {step}")]
    InvalidStep { step: f64 }, 
}


/// Solver used on each candidate window.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScanMethod { 
    Bisection, 
    Newton, 
    Secant, 
}
impl ScanMethod { 
    pub const fn algorithm(self) -> Algorithm { 
        match self { 
            ScanMethod::Bisection => Algorithm::BISECTION, 
            ScanMethod::Newton    => Algorithm::NEWTON, 
            ScanMethod::Secant    => Algorithm::SECANT, 
        }
    }
}


/// Scan configuration.
///
/// # Fields 
/// - `start`, `end` : scanned range, `start < end`
/// - `step`         : window width, `> 0`
/// - `epsilon`      : tolerance handed to every solver (default `1e-4`)
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScanCfg { 
    start:   f64, 
    end:     f64, 
    step:    f64, 
    epsilon: f64, 
}
impl ScanCfg { 
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, ScanError> { 
        validate_range(start, end, step)?; 
        Ok(Self { start, end, step, epsilon: DEFAULT_EPSILON })
    }

    pub fn set_epsilon(mut self, v: f64) -> Result<Self, ScanError> { 
        if !v.is_finite() || v <= 0.0 { 
            return Err(ToleranceError::InvalidEpsilon { got: v }.into()); 
        }
        self.epsilon = v; 
        Ok(self)
    }

    #[inline] #[must_use] pub fn start(&self)   -> f64 { self.start }
    #[inline] #[must_use] pub fn end(&self)     -> f64 { self.end }
    #[inline] #[must_use] pub fn step(&self)    -> f64 { self.step }
    #[inline] #[must_use] pub fn epsilon(&self) -> f64 { self.epsilon }

    /// Windows `[x_i, x_i + step]` with `x_i = start + i * step` while `x_i < end`.
    ///
    /// The last window may extend past `end`.
    pub fn windows(&self) -> impl Iterator<Item = (f64, f64)> { 
        let (start, end, step) = (self.start, self.end, self.step); 
        (0_usize..)
            .map(move |i| start + i as f64 * step)
            .take_while(move |&x| x < end)
            .map(move |x| (x, x + step))
    }
}


fn validate_range(start: f64, end: f64, step: f64) -> Result<(), ScanError> { 
    if !(start.is_finite() && end.is_finite()) || start >= end { 
        return Err(ScanError::InvalidRange { start, end }); 
    }
    if !step.is_finite() || step <= 0.0 { 
        return Err(ScanError::InvalidStep { step }); 
    }
    Ok(())
}


/// A window whose solver call found a root.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScanHit { 
    /// 1-based position of this root in the scan.
    pub index:  usize, 
    pub window: (f64, f64), 
    pub report: RootFindingReport, 
}
impl ScanHit { 
    pub fn root(&self)       -> f64   { self.report.root }
    pub fn iterations(&self) -> usize { self.report.iterations }
}


/// A window whose solver call failed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScanMiss { 
    pub window:     (f64, f64), 
    pub kind:       FailureKind, 
    pub iterations: usize, 
}


/// Outcome of [`scan_roots`].
///
/// [`ScanReport`]
/// - `algorithm_name` : solver used on each window  
/// - `windows_tried`  : number of windows handed to the solver  
/// - `hits`           : roots found, in scan order  
/// - `misses`         : failed attempts  
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport { 
    pub algorithm_name: &'static str, 
    pub windows_tried:  usize, 
    pub hits:           Vec<ScanHit>, 
    pub misses:         Vec<ScanMiss>, 
}
impl ScanReport { 
    fn new(algorithm: Algorithm) -> Self { 
        Self { 
            algorithm_name: algorithm.algorithm_name(), 
            windows_tried:  0, 
            hits:           Vec::new(), 
            misses:         Vec::new(), 
        }
    }

    /// Roots in scan order.
    pub fn roots(&self) -> Vec<f64> { 
        self.hits.iter().map(ScanHit::root).collect()
    }

    pub fn found_any(&self) -> bool { 
        !self.hits.is_empty()
    }

    fn record_exact(&mut self, window: (f64, f64), x: f64) { 
        let report = RootFindingReport { 
            root                : x, 
            f_root              : 0.0, 
            iterations          : 0, 
            evaluations         : 1, 
            termination_reason  : TerminationReason::ToleranceReached, 
            tolerance_satisfied : ToleranceSatisfied::AbsFxReached, 
            stencil             : Stencil::bracket(window.0, window.1), 
            algorithm_name      : self.algorithm_name, 
        };
        let index = self.hits.len() + 1; 
        info!("Root {index}: {x} (exact grid point)");
        self.hits.push(ScanHit { index, window, report }); 
    }

    fn record<E: FailureDiagnostics>(
        &mut self, 
        window: (f64, f64), 
        outcome: Result<RootFindingReport, E>
    ) { 
        self.windows_tried += 1; 
        match outcome { 
            Ok(report) => { 
                let index = self.hits.len() + 1; 
                info!(
                    "Root {index}: {} (iterations: {}) in [{}, {}]", 
                    report.root, report.iterations, window.0, window.1
                );
                self.hits.push(ScanHit { index, window, report }); 
            }
            Err(err) => { 
                debug!("[{}] no root in [{}, {}]: {err}", self.algorithm_name, window.0, window.1);
                self.misses.push(ScanMiss { 
                    window, 
                    kind:       err.kind(), 
                    iterations: err.iterations(), 
                }); 
            }
        }
    }
}


/// Scans `cfg`'s range and runs `method` on every window where `f` or 
/// `df` changes sign. A window starting exactly on a root (`f(x) == 0`) 
/// is recorded as a hit with zero iterations.
///
/// # Arguments 
/// - `method` : solver tried on each window ([`ScanMethod`]) 
/// - `f`      : function whose roots are sought 
/// - `df`     : derivative of `f`; used by the window test and by Newton 
/// - `cfg`    : [`ScanCfg`]
///
/// # Errors 
/// - [`ScanError::Tolerance`] : `cfg.epsilon` rejected by a solver config 
///
/// Solver failures are not errors; they are collected as [`ScanMiss`]es.
pub fn scan_roots<F, G>( 
    method: ScanMethod, 
    f: F, 
    df: G, 
    cfg: &ScanCfg
) -> Result<ScanReport, ScanError> 
where 
    F: Fn(f64) -> f64, 
    G: Fn(f64) -> f64 { 

    let algorithm = method.algorithm(); 
    let epsilon   = cfg.epsilon(); 
    let bisection_cfg = BisectionCfg::new().set_epsilon(epsilon)?; 
    let newton_cfg    = NewtonCfg::new().set_epsilon(epsilon)?; 
    let secant_cfg    = SecantCfg::new().set_epsilon(epsilon)?; 

    let mut report = ScanReport::new(algorithm); 
    for (lo, hi) in cfg.windows() { 
        let f_lo = f(lo); 

        // grid point sits exactly on a root; no strict sign change on either side 
        if f_lo == 0.0 { 
            report.record_exact((lo, hi), lo); 
            continue; 
        }

        let sign_change = opposite_sign(f_lo, f(hi)) || opposite_sign(df(lo), df(hi)); 
        if !sign_change { 
            continue; 
        }

        match method { 
            ScanMethod::Bisection => { 
                report.record((lo, hi), bisection(&f, lo, hi, bisection_cfg)); 
            }
            ScanMethod::Newton => { 
                let mid = (lo + hi) / 2.0; 
                report.record((lo, hi), newton(&f, &df, mid, newton_cfg)); 
            }
            ScanMethod::Secant => { 
                report.record((lo, hi), secant(&f, lo, hi, secant_cfg)); 
            }
        }
    }

    if !report.found_any() { 
        info!(
            "No root found in [{}, {}] using {algorithm}", 
            cfg.start(), cfg.end()
        );
    }

    Ok(report)
}


/// Samples `f` at `x_i = start + i * step` while `x_i <= end`.
///
/// # Errors 
/// - [`ScanError::InvalidRange`] : non-finite bounds or `start >= end`
/// - [`ScanError::InvalidStep`]  : `step` non-finite or <= 0
pub fn sample_curve<F>( 
    f: F, 
    start: f64, 
    end: f64, 
    step: f64
) -> Result<Vec<(f64, f64)>, ScanError> 
where F: Fn(f64) -> f64 { 
    validate_range(start, end, step)?; 

    Ok((0_usize..)
        .map(|i| start + i as f64 * step)
        .take_while(|&x| x <= end)
        .map(|x| (x, f(x)))
        .collect())
}
