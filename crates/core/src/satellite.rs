//! Satellites and orbit direction
//!
//! A satellite token names a mission and, optionally, an orbit direction:
//!
//! | Token          | Satellites                 |
//! |----------------|----------------------------|
//! | `S1A`          | `S1A_ASC`, `S1A_DESC`      |
//! | `S1A_BOTH`     | `S1A_ASC`, `S1A_DESC`      |
//! | `S1A_ASC`      | `S1A_ASC`                  |
//! | `S1A_DESC`     | `S1A_DESC`                 |

use serde::{Deserialize, Serialize};

use crate::error::{HazardError, Result};
use crate::kinds::SatelliteEnum;

/// A satellite mission on one orbit direction
///
/// Two satellites are equal when their string forms (`S1A_ASC`) are equal,
/// which is exactly when mission and direction both match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Satellite {
    pub satellite_id: SatelliteEnum,
    pub ascending: bool,
}

impl Satellite {
    pub fn new(satellite_id: SatelliteEnum, ascending: bool) -> Self {
        Self {
            satellite_id,
            ascending,
        }
    }

    pub fn ascending(satellite_id: SatelliteEnum) -> Self {
        Self::new(satellite_id, true)
    }

    pub fn descending(satellite_id: SatelliteEnum) -> Self {
        Self::new(satellite_id, false)
    }

    /// Parse a satellite token into one or two satellites.
    ///
    /// Both directions come back ascending first. The direction suffix is
    /// case-insensitive.
    ///
    /// # Errors
    /// * [`HazardError::AscendingParse`] when the suffix is not asc/desc/both
    /// * [`HazardError::InvalidValue`] for an unknown mission or a token with
    ///   more than one `_`
    pub fn from_string(raw_satellite: &str) -> Result<Vec<Satellite>> {
        let (sat_id, direction) = match raw_satellite.split_once('_') {
            Some((sat_id, direction)) => {
                if direction.contains('_') {
                    return Err(HazardError::invalid_value(format!(
                        "{} is not a valid satellite",
                        raw_satellite
                    )));
                }
                (sat_id, direction.to_lowercase())
            }
            None => (raw_satellite, "both".to_string()),
        };

        if !matches!(direction.as_str(), "asc" | "desc" | "both") {
            return Err(HazardError::AscendingParse(raw_satellite.to_string()));
        }

        let sat_enum = SatelliteEnum::from_string(sat_id)?;
        let satellites = match direction.as_str() {
            "asc" => vec![Self::ascending(sat_enum)],
            "desc" => vec![Self::descending(sat_enum)],
            _ => vec![Self::ascending(sat_enum), Self::descending(sat_enum)],
        };
        Ok(satellites)
    }
}

impl std::fmt::Display for Satellite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let direction = if self.ascending { "ASC" } else { "DESC" };
        write!(f, "{}_{}", self.satellite_id, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bare_id_yields_both_directions() {
        let satellites = Satellite::from_string("S1A").unwrap();
        assert_eq!(
            satellites,
            vec![
                Satellite::new(SatelliteEnum::S1a, true),
                Satellite::new(SatelliteEnum::S1a, false)
            ]
        );
        assert_eq!(Satellite::from_string("s1a_both").unwrap(), satellites);
    }

    #[test]
    fn test_single_direction() {
        assert_eq!(
            Satellite::from_string("S1A_ASC").unwrap(),
            vec![Satellite::ascending(SatelliteEnum::S1a)]
        );
        assert_eq!(
            Satellite::from_string("alos2_Desc").unwrap(),
            vec![Satellite::descending(SatelliteEnum::Alos2)]
        );
    }

    #[test]
    fn test_bad_direction() {
        let err = Satellite::from_string("S1A_XYZ").unwrap_err();
        assert!(err.is_ascending_parse());
        assert!(Satellite::from_string("S1A_").unwrap_err().is_ascending_parse());
    }

    #[test]
    fn test_bad_direction_reported_before_unknown_id() {
        assert!(Satellite::from_string("FOO_XYZ").unwrap_err().is_ascending_parse());
    }

    #[test]
    fn test_unknown_id() {
        assert!(Satellite::from_string("FOO").unwrap_err().is_invalid_value());
        assert!(Satellite::from_string("FOO_ASC").unwrap_err().is_invalid_value());
    }

    #[test]
    fn test_too_many_separators() {
        assert!(Satellite::from_string("S1A_ASC_DESC").unwrap_err().is_invalid_value());
    }

    #[test]
    fn test_display() {
        assert_eq!(Satellite::ascending(SatelliteEnum::Csk).to_string(), "CSK_ASC");
        assert_eq!(Satellite::descending(SatelliteEnum::Nisar).to_string(), "NISAR_DESC");
    }

    #[test]
    fn test_display_round_trip() {
        let satellite = Satellite::descending(SatelliteEnum::Rs2);
        assert_eq!(Satellite::from_string(&satellite.to_string()).unwrap(), vec![satellite]);
    }

    #[test]
    fn test_hash_follows_string_form() {
        let set: HashSet<Satellite> = Satellite::from_string("TSX")
            .unwrap()
            .into_iter()
            .chain(Satellite::from_string("tsx_asc").unwrap())
            .collect();
        assert_eq!(set.len(), 2);
    }
}
