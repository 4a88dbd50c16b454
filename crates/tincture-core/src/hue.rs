//! Circular hue arithmetic.
//!
//! Hues are degrees on a circle. Every construction and generation boundary
//! runs its hue through [`normalize_hue`], which is a true floor-modulo:
//! `f64 %` keeps the sign of the dividend and cannot be used directly.

/// Number of degrees in a full turn of the color wheel.
pub const FULL_TURN: f64 = 360.0;

/// Wrap any hue into `[0, 360)`.
///
/// ```
/// use tincture_core::normalize_hue;
///
/// assert_eq!(normalize_hue(-20.0), 340.0);
/// assert_eq!(normalize_hue(361.0), 1.0);
/// assert_eq!(normalize_hue(720.0), 0.0);
/// ```
#[inline]
pub fn normalize_hue(hue: f64) -> f64 {
    let wrapped = hue.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Clamp `x` into `[min, max]`.
#[inline]
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    x.min(max).max(min)
}
