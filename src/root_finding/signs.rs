//! Sign utilities for root-finding algorithms.
//! - `opposite_sign` : `true` if values have strictly opposite sign  

/// Returns `true` if `x * y < 0`.
///
/// Compared without multiplying, so tiny values cannot underflow to a 
/// zero product. Zero and NaN never count as a sign change.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}
