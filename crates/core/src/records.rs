//! Hazard and image records
//!
//! Records add no validation of their own: each field is already a validated
//! value.

use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::image_url::ImageUrl;
use crate::kinds::{HazardType, ImageType};
use crate::location::Location;
use crate::satellite::Satellite;

/// A monitored volcano or earthquake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub hazard_id: String,
    pub name: String,
    pub hazard_type: HazardType,
    pub location: Location,
    pub last_updated: Date,
}

impl Hazard {
    pub fn new(
        hazard_id: impl Into<String>,
        name: impl Into<String>,
        hazard_type: HazardType,
        location: Location,
        last_updated: Date,
    ) -> Self {
        Self {
            hazard_id: hazard_id.into(),
            name: name.into(),
            hazard_type,
            location,
            last_updated,
        }
    }
}

/// A satellite-derived image of a hazard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub image_id: String,
    pub hazard_id: String,
    pub satellite: Satellite,
    pub image_type: ImageType,
    pub image_date: Date,
    pub raw_image_url: ImageUrl,
    pub tif_image_url: ImageUrl,
    pub modified_image_url: ImageUrl,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinds::SatelliteEnum;
    use crate::location::LatLong;

    #[test]
    fn test_hazard_serde() {
        let hazard = Hazard::new(
            "kilauea",
            "Kilauea",
            HazardType::Volcano,
            Location::new(LatLong::new(19.421, -155.287)).unwrap(),
            Date::new("20200115").unwrap(),
        );
        let json = serde_json::to_value(&hazard).unwrap();
        assert_eq!(json["hazard_type"], "volcano");
        assert_eq!(json["last_updated"], "20200115");

        let back: Hazard = serde_json::from_value(json).unwrap();
        assert_eq!(back, hazard);
    }

    #[test]
    fn test_image_rejects_invalid_fields() {
        let json = serde_json::json!({
            "image_id": "img-1",
            "hazard_id": "etna",
            "satellite": { "satellite_id": "S1A", "ascending": true },
            "image_type": "geo_coherence",
            "image_date": "20200115",
            "raw_image_url": "raw.jpg",
            "tif_image_url": "img.tif",
            "modified_image_url": "mod.bmp"
        });
        assert!(serde_json::from_value::<Image>(json.clone()).is_err());

        let mut fixed = json;
        fixed["modified_image_url"] = "mod.png".into();
        let image: Image = serde_json::from_value(fixed).unwrap();
        assert_eq!(image.satellite, Satellite::ascending(SatelliteEnum::S1a));
        assert_eq!(image.image_type, ImageType::GeoCoherence);
    }
}
