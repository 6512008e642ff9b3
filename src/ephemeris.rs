//! Low-precision solar ephemeris from the NOAA solar calculator.
//!
//! Every function takes the Julian century `t` measured from J2000.0 and returns a
//! value in degrees, except [`eccentricity`] (unitless) and [`equation_of_time`]
//! (minutes of time). The formulas follow Meeus, *Astronomical Algorithms*,
//! chapter 25, as simplified by NOAA.

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::{cos_deg, sin_deg, wrap_degrees_360};

/// Longitude of the ascending node of the Moon's orbit, used by the nutation
/// and aberration corrections.
fn lunar_node_longitude(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Geometric mean longitude of the Sun, in (0°, 360°].
pub fn mean_longitude(t: f64) -> f64 {
    wrap_degrees_360(280.46646 + t * (36000.76983 + 0.0003032 * t))
}

/// Geometric mean anomaly of the Sun. Not wrapped.
pub fn mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

/// Eccentricity of Earth's orbit.
pub fn eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// Equation of center: the first three harmonics of the mean anomaly.
pub fn equation_of_center(t: f64) -> f64 {
    let m = mean_anomaly(t).to_radians();
    let sin_m = m.sin();
    let sin_2m = (m + m).sin();
    let sin_3m = (m + m + m).sin();
    sin_m * (1.914602 - t * (0.004817 + 0.000014 * t)) + sin_2m * (0.019993 - 0.000101 * t) + sin_3m * 0.000289
}

pub fn true_longitude(t: f64) -> f64 {
    mean_longitude(t) + equation_of_center(t)
}

/// True longitude corrected for nutation and aberration.
pub fn apparent_longitude(t: f64) -> f64 {
    true_longitude(t) - 0.00569 - 0.00478 * sin_deg(lunar_node_longitude(t))
}

/// Mean obliquity of the ecliptic, from a polynomial in arcseconds.
pub fn mean_obliquity(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Mean obliquity corrected for nutation.
pub fn obliquity_correction(t: f64) -> f64 {
    mean_obliquity(t) + 0.00256 * cos_deg(lunar_node_longitude(t))
}

/// Declination of the Sun.
pub fn declination(t: f64) -> f64 {
    let sin_declination = sin_deg(obliquity_correction(t)) * sin_deg(apparent_longitude(t));
    sin_declination.asin().to_degrees()
}

/// Equation of time in minutes: apparent solar time minus mean solar time.
pub fn equation_of_time(t: f64) -> f64 {
    let epsilon = obliquity_correction(t);
    let l0 = mean_longitude(t).to_radians();
    let e = eccentricity(t);
    let m = mean_anomaly(t).to_radians();

    let mut y = (epsilon.to_radians() / 2.0).tan();
    y *= y;

    let sin_2l0 = (2.0 * l0).sin();
    let sin_m = m.sin();
    let cos_2l0 = (2.0 * l0).cos();
    let sin_4l0 = (4.0 * l0).sin();
    let sin_2m = (2.0 * m).sin();

    let radians = y * sin_2l0 - 2.0 * e * sin_m + 4.0 * e * y * sin_m * cos_2l0
        - 0.5 * y * y * sin_4l0
        - 1.25 * e * e * sin_2m;
    radians.to_degrees() * 4.0
}

/// All solar quantities at one Julian century.
///
/// A snapshot: it is recomputed from scratch for every query and carries no state
/// beyond the values themselves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SolarParameters {
    /// Julian century the values were computed for.
    pub century: f64,
    pub mean_longitude: f64,
    pub mean_anomaly: f64,
    pub eccentricity: f64,
    pub equation_of_center: f64,
    pub true_longitude: f64,
    pub apparent_longitude: f64,
    pub obliquity_correction: f64,
    pub declination: f64,
    /// Minutes of time.
    pub equation_of_time: f64,
}

impl SolarParameters {
    /// Evaluates every ephemeris quantity at Julian century `t`.
    ///
    /// ```
    /// use astrotime::SolarParameters;
    ///
    /// let params = SolarParameters::at(0.0);
    /// assert!(params.declination < -22.0 && params.declination > -23.5);
    /// ```
    pub fn at(t: f64) -> Self {
        Self {
            century: t,
            mean_longitude: mean_longitude(t),
            mean_anomaly: mean_anomaly(t),
            eccentricity: eccentricity(t),
            equation_of_center: equation_of_center(t),
            true_longitude: true_longitude(t),
            apparent_longitude: apparent_longitude(t),
            obliquity_correction: obliquity_correction(t),
            declination: declination(t),
            equation_of_time: equation_of_time(t),
        }
    }
}
