//! # astrotime
//!
//! Sunrise, sunset and solar noon for any date and place, using the NOAA solar
//! position approximation (Meeus, *Astronomical Algorithms*, as implemented in the
//! NOAA solar calculator).
//!
//! Times go in and come out as chrono [`DateTime`]s in any [`TimeZone`]: the result
//! of [`sunrise`] and [`sunset`] is on the calendar date of the input, in the input's
//! time zone. The time of day of the input barely matters; it only moves the point
//! at which the ephemeris is sampled.
//!
//! The Sun is considered risen when its center is 0.833° below the horizon,
//! accounting for standard atmospheric refraction and the radius of the disk.
//! Elevation and local atmospheric conditions are not modeled.
//!
//! ## Basic Usage
//!
//! ```
//! use astrotime::{sunrise, sunset};
//! use chrono::{TimeZone, Utc};
//!
//! // Reykjavik, 64.1265°N 21.8174°W
//! let day = Utc.with_ymd_and_hms(2017, 10, 15, 15, 4, 5).unwrap();
//!
//! let rise = sunrise(&day, 64.1265, -21.8174).unwrap();
//! let set = sunset(&day, 64.1265, -21.8174).unwrap();
//! assert_eq!(rise.to_rfc3339(), "2017-10-15T08:19:47+00:00");
//! assert_eq!(set.to_rfc3339(), "2017-10-15T18:04:34+00:00");
//! ```
//!
//! Near the poles the Sun may not cross the horizon at all:
//!
//! ```
//! use astrotime::{sunset, CalculationError, PolarCondition};
//! use chrono::{TimeZone, Utc};
//!
//! let midsummer = Utc.with_ymd_and_hms(2017, 6, 21, 12, 0, 0).unwrap();
//! match sunset(&midsummer, 78.2232, 15.6267) {
//!     Err(CalculationError::NoSunriseOrSunset(PolarCondition::MidnightSun)) => {}
//!     other => panic!("expected midnight sun, got {other:?}"),
//! }
//! ```
#![no_std]

#[cfg(test)]
extern crate std;

mod ephemeris;
mod math;
mod solver;
mod time;
mod types;

#[cfg(test)]
mod tests;

use chrono::{DateTime, NaiveDate, TimeZone};
use log::debug;
use thiserror::Error;

pub use crate::ephemeris::SolarParameters;
pub use crate::time::{julian_century, julian_day};
pub use crate::types::{GeoCoordinate, PolarCondition, SolarEvent};

use crate::time::from_utc_minutes;

/// Civil days after the starting one searched by [`next_event_time`].
///
/// The event of day D can fall almost a full day before D's local midnight when the
/// zone offset is far from the location's solar time.
const MAX_DAYS_AHEAD: u32 = 3;

/// Calculates the sunrise on the calendar date of `instant`, in `instant`'s time zone.
///
/// # Arguments
///
/// * `instant` - Any moment of the wanted day; its calendar date and time zone are used
/// * `latitude` - Latitude in degrees (positive North, negative South)
/// * `longitude` - Longitude in degrees (positive East, negative West)
///
/// # Errors
///
/// [`CalculationError::LatitudeOutOfRange`] or [`CalculationError::LongitudeOutOfRange`]
/// for invalid coordinates, [`CalculationError::NoSunriseOrSunset`] during polar day
/// or night.
///
/// # Example
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
///
/// // Melbourne in winter, local time (AEST, UTC+10).
/// let aest = FixedOffset::east_opt(10 * 3600).unwrap();
/// let day = aest.with_ymd_and_hms(2017, 7, 10, 12, 0, 0).unwrap();
///
/// let rise = astrotime::sunrise(&day, -37.8136, 144.9631).unwrap();
/// assert_eq!(rise.format("%Y-%m-%d %H:%M").to_string(), "2017-07-10 07:34");
/// ```
pub fn sunrise<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<DateTime<Tz>, CalculationError> {
    event_time(instant, &GeoCoordinate::new(latitude, longitude)?, SolarEvent::Sunrise)
}

/// Calculates the sunset on the calendar date of `instant`, in `instant`'s time zone.
///
/// Same arguments and errors as [`sunrise`].
pub fn sunset<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<DateTime<Tz>, CalculationError> {
    event_time(instant, &GeoCoordinate::new(latitude, longitude)?, SolarEvent::Sunset)
}

/// Returns the first sunrise strictly after `after`, in `after`'s time zone.
///
/// That is the sunrise of `after`'s calendar date if it has not happened yet,
/// otherwise the sunrise of the next civil day.
///
/// # Example
///
/// ```
/// use chrono::TimeZone;
/// use chrono_tz::America::New_York;
///
/// let t = New_York.with_ymd_and_hms(2017, 12, 15, 10, 14, 0).unwrap();
/// let next = astrotime::next_sunrise(&t, 38.8895, -77.0352).unwrap();
/// assert_eq!(next.format("%H:%M %Z on %-m/%-d/%Y").to_string(), "07:20 EST on 12/16/2017");
/// ```
pub fn next_sunrise<Tz: TimeZone>(
    after: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<DateTime<Tz>, CalculationError> {
    next_event_time(after, &GeoCoordinate::new(latitude, longitude)?, SolarEvent::Sunrise)
}

/// Returns the first sunset strictly after `after`, in `after`'s time zone.
pub fn next_sunset<Tz: TimeZone>(
    after: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<DateTime<Tz>, CalculationError> {
    next_event_time(after, &GeoCoordinate::new(latitude, longitude)?, SolarEvent::Sunset)
}

/// Calculates local solar noon, when the Sun crosses the meridian at `longitude`,
/// on the calendar date of `instant`.
///
/// # Errors
///
/// [`CalculationError::LongitudeOutOfRange`] unless `longitude` is in [-180, 180].
pub fn solar_noon<Tz: TimeZone>(instant: &DateTime<Tz>, longitude: f64) -> Result<DateTime<Tz>, CalculationError> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(CalculationError::LongitudeOutOfRange);
    }
    let minutes = solver::solar_noon_utc(julian_century(julian_day(instant)), longitude);
    let noon = from_utc_minutes(instant.date_naive(), minutes, &instant.timezone())?;
    debug!("solar noon at {longitude}° on {}: {noon:?}", instant.date_naive());
    Ok(noon)
}

/// Calculates `event` on the calendar date of `instant` at an already validated
/// coordinate.
pub fn event_time<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    coordinate: &GeoCoordinate,
    event: SolarEvent,
) -> Result<DateTime<Tz>, CalculationError> {
    event_on(instant.date_naive(), julian_day(instant), &instant.timezone(), coordinate, event)
}

/// Returns the first `event` strictly after `after` at an already validated
/// coordinate.
///
/// Later days are reached by advancing the civil calendar date, so a 23 or 25 hour
/// day at a daylight saving change neither skips nor repeats a day. The ephemeris
/// is sampled one Julian day later for each day advanced.
pub fn next_event_time<Tz: TimeZone>(
    after: &DateTime<Tz>,
    coordinate: &GeoCoordinate,
    event: SolarEvent,
) -> Result<DateTime<Tz>, CalculationError> {
    let tz = after.timezone();
    let jd = julian_day(after);
    let mut date = after.date_naive();
    for days_ahead in 0..=MAX_DAYS_AHEAD {
        let candidate = event_on(date, jd + f64::from(days_ahead), &tz, coordinate, event)?;
        if *after < candidate {
            return Ok(candidate);
        }
        date = date.succ_opt().ok_or(CalculationError::TimeConversion)?;
    }
    // Unreachable for valid coordinates: see MAX_DAYS_AHEAD.
    Err(CalculationError::TimeConversion)
}

fn event_on<Tz: TimeZone>(
    date: NaiveDate,
    jd: f64,
    tz: &Tz,
    coordinate: &GeoCoordinate,
    event: SolarEvent,
) -> Result<DateTime<Tz>, CalculationError> {
    let minutes = match event {
        SolarEvent::Sunrise => solver::sunrise_utc(jd, coordinate)?,
        SolarEvent::Sunset => solver::sunset_utc(jd, coordinate)?,
    };
    let time = from_utc_minutes(date, minutes, tz)?;
    debug!("{event} at {coordinate} on {date}: {time:?}");
    Ok(time)
}

/// Errors returned by the sunrise and sunset calculations.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CalculationError {
    /// Latitude outside [-90, 90] degrees
    #[error("Latitude out of range")]
    LatitudeOutOfRange,

    /// Longitude outside [-180, 180] degrees
    #[error("Longitude out of range")]
    LongitudeOutOfRange,

    /// The Sun does not cross the horizon on the requested date at this latitude
    #[error("No sunrise or sunset on this date: {0}")]
    NoSunriseOrSunset(PolarCondition),

    /// The result cannot be represented as a date/time
    #[error("Time conversion error")]
    TimeConversion,
}
