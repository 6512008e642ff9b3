use core::fmt;

#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::CalculationError;

/// A point on Earth's surface in decimal degrees.
///
/// Latitude is positive north, longitude positive east. No altitude, no datum.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate, validating both angles.
    ///
    /// # Errors
    ///
    /// [`CalculationError::LatitudeOutOfRange`] unless latitude is in [-90, 90], and
    /// [`CalculationError::LongitudeOutOfRange`] unless longitude is in [-180, 180].
    /// NaN is rejected for both.
    ///
    /// ```
    /// use astrotime::{CalculationError, GeoCoordinate};
    ///
    /// let reykjavik = GeoCoordinate::new(64.1265, -21.8174).unwrap();
    /// assert_eq!(reykjavik.latitude(), 64.1265);
    /// assert!(matches!(GeoCoordinate::new(91.0, 0.0), Err(CalculationError::LatitudeOutOfRange)));
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CalculationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CalculationError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CalculationError::LongitudeOutOfRange);
        }
        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.latitude < 0.0 { 'S' } else { 'N' };
        let ew = if self.longitude < 0.0 { 'W' } else { 'E' };
        write!(f, "{:.4}°{}, {:.4}°{}", self.latitude.abs(), ns, self.longitude.abs(), ew)
    }
}

/// The solar event a solver is asked for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// Upper limb of the Sun appears on the horizon, before solar noon.
    Sunrise,
    /// Upper limb of the Sun disappears below the horizon, after solar noon.
    Sunset,
}

impl fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolarEvent::Sunrise => f.write_str("sunrise"),
            SolarEvent::Sunset => f.write_str("sunset"),
        }
    }
}

/// Why the Sun does not cross the horizon on a given day.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PolarCondition {
    /// Sun stays above the horizon all day.
    MidnightSun,
    /// Sun stays below the horizon all day.
    PolarNight,
}

impl fmt::Display for PolarCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolarCondition::MidnightSun => f.write_str("midnight sun"),
            PolarCondition::PolarNight => f.write_str("polar night"),
        }
    }
}
