//! Hazard Monitor Core
//!
//! Validated value types for monitoring volcanoes and earthquakes through
//! satellite imagery:
//! - Closed enumerations with string round-trip ([`HazardType`], [`ImageType`],
//!   [`SatelliteEnum`])
//! - Scalar values validated at construction ([`Date`], [`DateRange`],
//!   [`Location`], [`ImageUrl`])
//! - Composite records ([`Satellite`], [`Hazard`], [`Image`])
//! - A normalized image query ([`HazardInfoFilter`])
//!
//! Every constructor that validates returns [`Result`]; there is no way to
//! obtain a partially-valid value.

pub mod clock;
pub mod date;
pub mod error;
pub mod filter;
pub mod image_url;
pub mod kinds;
pub mod location;
pub mod records;
pub mod satellite;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{Date, DateRange, DaySubtraction};
pub use error::{HazardError, Result};
pub use filter::HazardInfoFilter;
pub use image_url::ImageUrl;
pub use kinds::{HazardType, ImageType, SatelliteEnum};
pub use location::{LatLong, Location};
pub use records::{Hazard, Image};
pub use satellite::Satellite;
