//! Closed enumerations of hazard, image and satellite kinds
//!
//! Parsing is a case-insensitive lookup against the member names. Rendering
//! differs by kind: hazard and image types render lowercase, satellites render
//! uppercase (e.g. `volcano`, `geo_coherence`, `S1A`).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{HazardError, Result};

/// Kind of monitored natural event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HazardType {
    Volcano,
    Earthquake,
}

impl HazardType {
    pub const ALL: [HazardType; 2] = [HazardType::Volcano, HazardType::Earthquake];

    /// Member name as declared (uppercase)
    pub fn name(&self) -> &'static str {
        match self {
            HazardType::Volcano => "VOLCANO",
            HazardType::Earthquake => "EARTHQUAKE",
        }
    }

    /// Case-insensitive parse, e.g. `"Volcano"` or `"EARTHQUAKE"`
    pub fn from_string(s: &str) -> Result<Self> {
        lookup(&Self::ALL, s, Self::name)
            .ok_or_else(|| HazardError::invalid_value(format!("{} is not a valid hazard type", s)))
    }
}

impl std::fmt::Display for HazardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name().to_lowercase())
    }
}

/// Processing stage of a satellite-derived image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ImageType {
    GeoBackscatter,
    GeoCoherence,
    GeoInterferogram,
    OrthoBackscatter,
    OrthoCoherence,
    OrthoInterferogram,
}

impl ImageType {
    pub const ALL: [ImageType; 6] = [
        ImageType::GeoBackscatter,
        ImageType::GeoCoherence,
        ImageType::GeoInterferogram,
        ImageType::OrthoBackscatter,
        ImageType::OrthoCoherence,
        ImageType::OrthoInterferogram,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ImageType::GeoBackscatter => "GEO_BACKSCATTER",
            ImageType::GeoCoherence => "GEO_COHERENCE",
            ImageType::GeoInterferogram => "GEO_INTERFEROGRAM",
            ImageType::OrthoBackscatter => "ORTHO_BACKSCATTER",
            ImageType::OrthoCoherence => "ORTHO_COHERENCE",
            ImageType::OrthoInterferogram => "ORTHO_INTERFEROGRAM",
        }
    }

    pub fn from_string(s: &str) -> Result<Self> {
        lookup(&Self::ALL, s, Self::name)
            .ok_or_else(|| HazardError::invalid_value(format!("{} is not a valid image type", s)))
    }
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name().to_lowercase())
    }
}

/// Satellite mission identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SatelliteEnum {
    /// ERS-1/ERS-2
    Ers,
    /// Envisat
    Env,
    /// Sentinel-1A
    S1a,
    /// Radarsat-1
    Rs1,
    /// Radarsat-2
    Rs2,
    /// COSMO-SkyMed
    Csk,
    /// TerraSAR-X
    Tsx,
    /// JERS-1
    Jers,
    Alos,
    Alos2,
    Nisar,
}

impl SatelliteEnum {
    pub const ALL: [SatelliteEnum; 11] = [
        SatelliteEnum::Ers,
        SatelliteEnum::Env,
        SatelliteEnum::S1a,
        SatelliteEnum::Rs1,
        SatelliteEnum::Rs2,
        SatelliteEnum::Csk,
        SatelliteEnum::Tsx,
        SatelliteEnum::Jers,
        SatelliteEnum::Alos,
        SatelliteEnum::Alos2,
        SatelliteEnum::Nisar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SatelliteEnum::Ers => "ERS",
            SatelliteEnum::Env => "ENV",
            SatelliteEnum::S1a => "S1A",
            SatelliteEnum::Rs1 => "RS1",
            SatelliteEnum::Rs2 => "RS2",
            SatelliteEnum::Csk => "CSK",
            SatelliteEnum::Tsx => "TSX",
            SatelliteEnum::Jers => "JERS",
            SatelliteEnum::Alos => "ALOS",
            SatelliteEnum::Alos2 => "ALOS2",
            SatelliteEnum::Nisar => "NISAR",
        }
    }

    pub fn from_string(s: &str) -> Result<Self> {
        lookup(&Self::ALL, s, Self::name).ok_or_else(|| {
            HazardError::invalid_value(format!("{} is not a valid satellite id", s))
        })
    }
}

impl std::fmt::Display for SatelliteEnum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn lookup<T: Copy>(members: &[T], s: &str, name: fn(&T) -> &'static str) -> Option<T> {
    let upper = s.to_uppercase();
    members.iter().copied().find(|m| name(m) == upper)
}

macro_rules! string_conversions {
    ($($kind:ty),*) => {$(
        impl FromStr for $kind {
            type Err = HazardError;

            fn from_str(s: &str) -> Result<Self> {
                Self::from_string(s)
            }
        }

        impl TryFrom<String> for $kind {
            type Error = HazardError;

            fn try_from(s: String) -> Result<Self> {
                Self::from_string(&s)
            }
        }

        impl From<$kind> for String {
            fn from(kind: $kind) -> String {
                kind.to_string()
            }
        }
    )*};
}

string_conversions!(HazardType, ImageType, SatelliteEnum);
