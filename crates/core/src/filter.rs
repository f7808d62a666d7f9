//! Image query filter
//!
//! [`HazardInfoFilter`] normalizes the optional constraints of an image query
//! into one value: a satellite set, an image type set, a single date range and
//! a result cap. A `last_n_days` shortcut is folded into the date range at
//! construction.

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::date::{Date, DateRange, DaySubtraction};
use crate::error::Result;
use crate::kinds::ImageType;
use crate::records::Image;
use crate::satellite::Satellite;

/// Normalized constraints for selecting images of a hazard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HazardInfoFilter {
    satellites: Option<Vec<Satellite>>,
    image_types: Option<Vec<ImageType>>,
    date_range: Option<DateRange>,
    max_num_images: usize,
}

impl HazardInfoFilter {
    /// Build a filter against the system clock with numeral day arithmetic.
    ///
    /// See [`HazardInfoFilter::new_at`].
    pub fn new(
        satellites: Option<Vec<Satellite>>,
        image_types: Option<Vec<ImageType>>,
        date_range: Option<DateRange>,
        max_num_images: usize,
        last_n_days: Option<i64>,
    ) -> Result<Self> {
        Self::new_at(
            satellites,
            image_types,
            date_range,
            max_num_images,
            last_n_days,
            &SystemClock,
            DaySubtraction::Numeral,
        )
    }

    /// Build a filter, combining `date_range` and `last_n_days`.
    ///
    /// A non-zero `last_n_days` replaces the start of the range with
    /// `today - last_n_days` and keeps the explicit range's end, if any.
    /// Otherwise `date_range` is used unchanged.
    ///
    /// # Errors
    /// [`crate::HazardError::InvalidValue`] when today or the computed start
    /// is not a valid date. With [`DaySubtraction::Numeral`] this happens whenever the
    /// subtraction crosses a month boundary.
    pub fn new_at(
        satellites: Option<Vec<Satellite>>,
        image_types: Option<Vec<ImageType>>,
        date_range: Option<DateRange>,
        max_num_images: usize,
        last_n_days: Option<i64>,
        clock: &dyn Clock,
        day_subtraction: DaySubtraction,
    ) -> Result<Self> {
        let date_range = match last_n_days {
            Some(days) if days != 0 => {
                let start = Date::today(clock)?.minus_days(days, day_subtraction)?;
                let end = date_range.and_then(|range| range.end);
                let range = DateRange::new(start, end);
                tracing::debug!(
                    last_n_days = days,
                    date_range = %range,
                    "Applied last_n_days window to image filter"
                );
                Some(range)
            }
            _ => date_range,
        };

        Ok(Self {
            satellites,
            image_types,
            date_range,
            max_num_images,
        })
    }

    pub fn satellites(&self) -> Option<&[Satellite]> {
        self.satellites.as_deref()
    }

    pub fn image_types(&self) -> Option<&[ImageType]> {
        self.image_types.as_deref()
    }

    pub fn date_range(&self) -> Option<&DateRange> {
        self.date_range.as_ref()
    }

    pub fn max_num_images(&self) -> usize {
        self.max_num_images
    }

    /// Whether `image` satisfies every constraint that is set
    pub fn matches(&self, image: &Image) -> bool {
        self.matches_at(image, &SystemClock)
    }

    pub fn matches_at(&self, image: &Image, clock: &dyn Clock) -> bool {
        let satellite_ok = self
            .satellites
            .as_ref()
            .map_or(true, |s| s.contains(&image.satellite));
        let type_ok = self
            .image_types
            .as_ref()
            .map_or(true, |t| t.contains(&image.image_type));
        let date_ok = self
            .date_range
            .as_ref()
            .map_or(true, |r| r.date_in_range_at(&image.image_date, clock));
        satellite_ok && type_ok && date_ok
    }

    /// Matching images in input order, at most `max_num_images` of them
    pub fn select<'a, I>(&self, images: I) -> Vec<&'a Image>
    where
        I: IntoIterator<Item = &'a Image>,
    {
        self.select_at(images, &SystemClock)
    }

    pub fn select_at<'a, I>(&self, images: I, clock: &dyn Clock) -> Vec<&'a Image>
    where
        I: IntoIterator<Item = &'a Image>,
    {
        images
            .into_iter()
            .filter(|image| self.matches_at(image, clock))
            .take(self.max_num_images)
            .collect()
    }
}
