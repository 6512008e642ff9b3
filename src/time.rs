use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Timelike, Utc};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::CalculationError;

/// Julian Day of the J2000.0 epoch.
pub(crate) const J2000_EPOCH_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub(crate) const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Compute the Julian Day for a date/time in any chrono `TimeZone`.
///
/// The instant is first brought to UT, so two `DateTime`s naming the same moment
/// in different zones give the same value. The day number comes from the integer
/// Gregorian formula (truncating division, as in Fliegel and Van Flandern) and the
/// time of day is added as a fraction, counted from noon. Sub-millisecond
/// precision is dropped.
///
/// ```
/// use chrono::{TimeZone, Utc};
///
/// let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
/// assert_eq!(astrotime::julian_day(&j2000), 2_451_545.0);
/// ```
pub fn julian_day<Tz: TimeZone>(date: &DateTime<Tz>) -> f64 {
    let ut = date.naive_utc();
    let year = i64::from(ut.year());
    let month = i64::from(ut.month());
    let day = i64::from(ut.day());

    let a = (month - 14) / 12;
    let day_number = (1461 * (year + 4800 + a)) / 4 + (367 * (month - 2 - 12 * a)) / 12
        - (3 * ((year + 4900 + a) / 100)) / 4
        + day
        - 32075;

    let millis = ut.nanosecond() / 1_000_000;
    day_number as f64
        + (f64::from(ut.hour()) - 12.0) / 24.0
        + f64::from(ut.minute()) / 1440.0
        + f64::from(ut.second()) / 86_400.0
        + f64::from(millis) / 86_400_000.0
}

/// Julian century (T) from the given Julian Day,
/// measured in Julian centuries since the J2000.0 epoch.
pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000_EPOCH_JD) / DAYS_PER_CENTURY
}

/// Julian Day from a Julian century; the inverse of [`julian_century`].
pub(crate) fn julian_day_from_century(century: f64) -> f64 {
    century * DAYS_PER_CENTURY + J2000_EPOCH_JD
}

/// Build the civil instant lying `minutes_utc` minutes after UTC midnight of `anchor`,
/// expressed in `tz`.
///
/// The offset is floored to whole seconds. `minutes_utc` may be negative or exceed a
/// full day; the result then lands on the neighbouring UTC day.
pub(crate) fn from_utc_minutes<Tz: TimeZone>(
    anchor: NaiveDate,
    minutes_utc: f64,
    tz: &Tz,
) -> Result<DateTime<Tz>, CalculationError> {
    if !minutes_utc.is_finite() {
        return Err(CalculationError::TimeConversion);
    }
    let seconds = (minutes_utc * 60.0).floor() as i64;
    let offset = TimeDelta::try_seconds(seconds).ok_or(CalculationError::TimeConversion)?;
    let midnight = anchor.and_hms_opt(0, 0, 0).ok_or(CalculationError::TimeConversion)?;
    let utc = Utc
        .from_utc_datetime(&midnight)
        .checked_add_signed(offset)
        .ok_or(CalculationError::TimeConversion)?;
    Ok(utc.with_timezone(tz))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn julian_day_of_known_epochs() {
        let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(julian_day(&j2000), 2_451_545.0);

        let unix = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(julian_day(&unix), 2_440_587.5);

        // Start of the Gregorian calendar.
        let gregorian = Utc.with_ymd_and_hms(1582, 10, 15, 12, 0, 0).unwrap();
        assert_eq!(julian_day(&gregorian), 2_299_161.0);
    }

    #[test]
    fn julian_day_uses_universal_time() {
        let utc = Utc.with_ymd_and_hms(2017, 12, 15, 15, 14, 0).unwrap();
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
        let local = eastern.with_ymd_and_hms(2017, 12, 15, 10, 14, 0).unwrap();
        assert_eq!(julian_day(&utc), julian_day(&local));
    }

    #[test]
    fn julian_day_counts_milliseconds() {
        let base = Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap();
        let later = base + TimeDelta::milliseconds(1500);
        let diff = julian_day(&later) - julian_day(&base);
        assert!((diff - 1.5 / 86_400.0).abs() < 1e-9);
    }

    #[test]
    fn century_round_trips() {
        assert_eq!(julian_century(J2000_EPOCH_JD), 0.0);
        assert_eq!(julian_century(J2000_EPOCH_JD + DAYS_PER_CENTURY), 1.0);
        let t = julian_century(2_458_000.25);
        assert!((julian_day_from_century(t) - 2_458_000.25).abs() < 1e-6);
    }

    #[test]
    fn utc_minutes_floor_to_whole_seconds() {
        let anchor = NaiveDate::from_ymd_opt(2017, 7, 10).unwrap();
        let got = from_utc_minutes(anchor, 771.6099, &Utc).unwrap();
        assert_eq!(got, Utc.with_ymd_and_hms(2017, 7, 10, 12, 51, 36).unwrap());
    }

    #[test]
    fn negative_minutes_land_on_previous_day() {
        let anchor = NaiveDate::from_ymd_opt(2017, 7, 10).unwrap();
        let got = from_utc_minutes(anchor, -145.5, &Utc).unwrap();
        assert_eq!(got, Utc.with_ymd_and_hms(2017, 7, 9, 21, 34, 30).unwrap());

        // Floor, not truncation toward zero.
        let got = from_utc_minutes(anchor, -0.001, &Utc).unwrap();
        assert_eq!(got, Utc.with_ymd_and_hms(2017, 7, 9, 23, 59, 59).unwrap());
    }

    #[test]
    fn minutes_are_reinterpreted_in_target_zone() {
        let anchor = NaiveDate::from_ymd_opt(2017, 12, 16).unwrap();
        let eastern = FixedOffset::west_opt(5 * 3600).unwrap();
        let got = from_utc_minutes(anchor, 740.75, &eastern).unwrap();
        assert_eq!(got, eastern.with_ymd_and_hms(2017, 12, 16, 7, 20, 45).unwrap());
    }

    #[test]
    fn non_finite_minutes_are_rejected() {
        let anchor = NaiveDate::from_ymd_opt(2017, 7, 10).unwrap();
        assert!(matches!(
            from_utc_minutes(anchor, f64::NAN, &Utc),
            Err(CalculationError::TimeConversion)
        ));
        assert!(matches!(
            from_utc_minutes(anchor, f64::INFINITY, &Utc),
            Err(CalculationError::TimeConversion)
        ));
    }
}
