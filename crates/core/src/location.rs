//! Geographic coordinates

use serde::{Deserialize, Serialize};

use crate::error::{HazardError, Result};

/// Raw latitude/longitude pair in degrees, unvalidated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

impl LatLong {
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }
}

/// Validated location of a hazard
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    center: LatLong,
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Repr {
            center: LatLong,
        }

        let repr = Repr::deserialize(deserializer)?;
        Location::new(repr.center).map_err(serde::de::Error::custom)
    }
}

impl Location {
    /// Fails unless -90 <= lat <= 90 and -180 <= long <= 180
    pub fn new(center: LatLong) -> Result<Self> {
        if !Self::validate_latitude(center.lat) {
            return Err(HazardError::invalid_value(format!(
                "Latitude {} is outside [-90, 90]",
                center.lat
            )));
        }
        if !Self::validate_longitude(center.long) {
            return Err(HazardError::invalid_value(format!(
                "Longitude {} is outside [-180, 180]",
                center.long
            )));
        }
        Ok(Self { center })
    }

    pub fn validate_latitude(lat: f64) -> bool {
        (-90.0..=90.0).contains(&lat)
    }

    pub fn validate_longitude(long: f64) -> bool {
        (-180.0..=180.0).contains(&long)
    }

    pub fn center(&self) -> LatLong {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Location::new(LatLong::new(90.0, 180.0)).is_ok());
        assert!(Location::new(LatLong::new(-90.0, -180.0)).is_ok());
        assert!(Location::new(LatLong::new(19.421, -155.287)).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        let err = Location::new(LatLong::new(91.0, 0.0)).unwrap_err();
        assert!(err.is_invalid_value());
        assert!(err.to_string().contains("Latitude"));

        let err = Location::new(LatLong::new(0.0, -180.5)).unwrap_err();
        assert!(err.to_string().contains("Longitude"));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(Location::new(LatLong::new(f64::NAN, 0.0)).is_err());
        assert!(Location::new(LatLong::new(0.0, f64::NAN)).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let location: Location =
            serde_json::from_str(r#"{"center": {"lat": 37.75, "long": 14.99}}"#).unwrap();
        assert_eq!(location.center(), LatLong::new(37.75, 14.99));
        assert!(serde_json::from_str::<Location>(r#"{"center": {"lat": 100.0, "long": 0.0}}"#)
            .is_err());
    }
}
