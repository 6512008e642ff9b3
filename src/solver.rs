//! Solar noon, sunrise and sunset in minutes after UTC midnight.
//!
//! Both solvers refine their estimate exactly once: a first pass samples the
//! ephemeris at an approximate time, a second pass resamples it at the time the
//! first pass produced. The second pass is final, there is no convergence loop.

#[allow(unused_imports)]
use core_maths::CoreFloat;
use log::trace;

use crate::ephemeris::{declination, equation_of_time};
use crate::math::{cos_deg, tan_deg};
use crate::time::{julian_century, julian_day_from_century};
use crate::types::{GeoCoordinate, PolarCondition, SolarEvent};
use crate::CalculationError;

/// Zenith distance of the Sun's center at sunrise and sunset, in degrees:
/// 90° plus 34' of standard refraction plus the 16' semi-diameter of the disk.
pub(crate) const SUNRISE_ZENITH_DEG: f64 = 90.833;

/// Hour angle, in radians, at which the Sun's center reaches [`SUNRISE_ZENITH_DEG`].
///
/// Negative for [`SolarEvent::Sunrise`] (before local noon), positive for
/// [`SolarEvent::Sunset`].
///
/// # Errors
///
/// [`CalculationError::NoSunriseOrSunset`] when the Sun never reaches that altitude
/// on this day at this latitude.
pub(crate) fn hour_angle(latitude: f64, declination: f64, event: SolarEvent) -> Result<f64, CalculationError> {
    let cos_hour_angle = cos_deg(SUNRISE_ZENITH_DEG) / (cos_deg(latitude) * cos_deg(declination))
        - tan_deg(latitude) * tan_deg(declination);
    if !(-1.0..=1.0).contains(&cos_hour_angle) {
        let condition = if cos_hour_angle < -1.0 {
            PolarCondition::MidnightSun
        } else {
            PolarCondition::PolarNight
        };
        trace!("cos(hour angle) = {cos_hour_angle} at latitude {latitude}, declination {declination}: {condition}");
        return Err(CalculationError::NoSunriseOrSunset(condition));
    }
    let angle = -cos_hour_angle.acos();
    Ok(match event {
        SolarEvent::Sunrise => angle,
        SolarEvent::Sunset => -angle,
    })
}

/// Minutes after UTC midnight of local solar noon at `longitude`, on the day whose
/// Julian century is `t`.
pub(crate) fn solar_noon_utc(t: f64, longitude: f64) -> f64 {
    let jd = julian_day_from_century(t);

    let estimate = noon_pass(julian_century(jd - longitude / 360.0), longitude);
    let refined = noon_pass(julian_century(jd - 0.5 + estimate / 1440.0), longitude);
    trace!("solar noon at longitude {longitude}: {estimate} min, refined {refined} min");
    refined
}

fn noon_pass(t: f64, longitude: f64) -> f64 {
    720.0 - longitude * 4.0 - equation_of_time(t)
}

/// Minutes after UTC midnight of `event` on the Julian day `jd`.
///
/// The result may be negative or exceed 1440 when the event falls on the
/// neighbouring UTC day.
fn event_utc(jd: f64, coordinate: &GeoCoordinate, event: SolarEvent) -> Result<f64, CalculationError> {
    let t = julian_century(jd);

    // Sample the declination at solar noon rather than at the start of the day.
    let noon = solar_noon_utc(t, coordinate.longitude());
    let t_noon = julian_century(jd + noon / 1440.0);

    let estimate = event_pass(t_noon, coordinate, event)?;
    let refined = event_pass(julian_century(julian_day_from_century(t) + estimate / 1440.0), coordinate, event)?;
    trace!("{event} at {coordinate}: {estimate} min, refined {refined} min");
    Ok(refined)
}

fn event_pass(t: f64, coordinate: &GeoCoordinate, event: SolarEvent) -> Result<f64, CalculationError> {
    let eq_time = equation_of_time(t);
    let hour_angle = hour_angle(coordinate.latitude(), declination(t), event)?;
    let delta = hour_angle.to_degrees() - coordinate.longitude();
    Ok(720.0 + 4.0 * delta - eq_time)
}

pub(crate) fn sunrise_utc(jd: f64, coordinate: &GeoCoordinate) -> Result<f64, CalculationError> {
    event_utc(jd, coordinate, SolarEvent::Sunrise)
}

pub(crate) fn sunset_utc(jd: f64, coordinate: &GeoCoordinate) -> Result<f64, CalculationError> {
    event_utc(jd, coordinate, SolarEvent::Sunset)
}
