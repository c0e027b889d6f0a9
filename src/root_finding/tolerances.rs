//! Stopping criteria shared by the root-finding algorithms.
//!
//! All criteria compare against the single absolute `epsilon`: 
//! - `residual_reached(fx, eps)`  : |f(x)| < eps  
//! - `width_reached(a, b, eps)`   : |b - a| / 2 <= eps  (bracketing)  
//! - `step_reached(x0, x1, eps)`  : |x1 - x0| < eps     (open)  


#[inline]
pub(crate) fn residual_reached(fx: f64, epsilon: f64) -> bool { 
    fx.abs() < epsilon
}

/// Bisection keeps halving while the half-width exceeds `epsilon`.
#[inline]
pub(crate) fn width_reached(a: f64, b: f64, epsilon: f64) -> bool { 
    (b - a).abs() / 2.0 <= epsilon
}

#[inline]
pub(crate) fn step_reached(x_prev: f64, x_next: f64, epsilon: f64) -> bool { 
    (x_next - x_prev).abs() < epsilon
}
