use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid latitude/longitude input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("latitude {0} is not a finite value in [-90, 90]")]
    Latitude(f64),

    #[error("longitude {0} is not a finite value in [-180, 180]")]
    Longitude(f64),
}

/// A latitude/longitude pair.
///
/// Produced once by the position selector and passed by value afterwards;
/// there is no way to mutate a `Coordinate` in place.
/// 坐标值对象，一经选定即不可变。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Builds a coordinate from constants already known to be in range.
    pub(crate) const fn from_trusted(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    /// Formats as `lat,lng` using the shortest round-trip decimal form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_values_in_range() {
        let c = Coordinate::new(-6.52, -38.42).unwrap();
        assert_eq!(c.latitude(), -6.52);
        assert_eq!(c.longitude(), -38.42);
    }

    #[test]
    fn accepts_boundaries() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert_eq!(
            Coordinate::new(90.5, 0.0),
            Err(CoordinateError::Latitude(90.5))
        );
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(matches!(
            Coordinate::new(f64::NAN, 0.0),
            Err(CoordinateError::Latitude(_))
        ));
        assert!(matches!(
            Coordinate::new(0.0, f64::INFINITY),
            Err(CoordinateError::Longitude(_))
        ));
    }

    #[test]
    fn display_uses_shortest_decimal_form() {
        let c = Coordinate::new(-6.5205485, -38.4155765).unwrap();
        assert_eq!(c.to_string(), "-6.5205485,-38.4155765");

        let whole = Coordinate::new(10.0, -20.0).unwrap();
        assert_eq!(whole.to_string(), "10,-20");
    }
}
