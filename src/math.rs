#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Wraps an angle in degrees into the range (0, 360].
///
/// Uses the truncating remainder followed by a single shift, so an input that
/// is an exact multiple of 360 maps to 360 rather than 0. The solar mean
/// longitude is defined this way and the reference values depend on it.
pub(crate) fn wrap_degrees_360(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped > 0.0 {
        wrapped
    } else {
        wrapped + 360.0
    }
}

#[inline]
pub(crate) fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

#[inline]
pub(crate) fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

#[inline]
pub(crate) fn tan_deg(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}
