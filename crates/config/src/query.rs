//! Raw image query parameters
//!
//! A [`FilterQuery`] holds request parameters exactly as received. Resolving
//! it validates every token and applies [`FilterConfig`] defaults.

use hazard_monitor_core::{
    Clock, Date, DateRange, HazardError, HazardInfoFilter, ImageType, Result, Satellite,
};
use serde::{Deserialize, Serialize};

use crate::filter_config::FilterConfig;

/// Image query parameters before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// Satellite tokens such as `S1A`, `S1A_ASC` or `CSK_BOTH`
    #[serde(default)]
    pub satellites: Option<Vec<String>>,
    #[serde(default)]
    pub image_types: Option<Vec<String>>,
    /// `YYYYMMDD`
    #[serde(default)]
    pub start_date: Option<String>,
    /// `YYYYMMDD`; requires `start_date`
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub max_num_images: Option<usize>,
    #[serde(default)]
    pub last_n_days: Option<i64>,
}

impl FilterQuery {
    /// Validate the query and build the filter it describes.
    ///
    /// Satellite tokens expand to one or both orbit directions; duplicates are
    /// dropped keeping first-seen order. The configured `last_n_days` applies
    /// only when the query names neither dates nor its own window.
    pub fn resolve(&self, config: &FilterConfig, clock: &dyn Clock) -> Result<HazardInfoFilter> {
        let satellites = self
            .satellites
            .as_deref()
            .map(parse_satellites)
            .transpose()?;

        let image_types = self
            .image_types
            .as_deref()
            .map(parse_image_types)
            .transpose()?;

        let date_range = self.date_range()?;

        let last_n_days = match (self.last_n_days, &date_range) {
            (Some(days), _) => Some(days),
            (None, None) => config.last_n_days,
            (None, Some(_)) => None,
        };

        let max_num_images = config.clamp_max_num_images(self.max_num_images);

        let filter = HazardInfoFilter::new_at(
            satellites,
            image_types,
            date_range,
            max_num_images,
            last_n_days,
            clock,
            config.day_subtraction,
        )?;

        tracing::debug!(
            satellites = filter.satellites().map_or(0, |s| s.len()),
            image_types = filter.image_types().map_or(0, |t| t.len()),
            date_range = ?filter.date_range().map(|r| r.to_string()),
            max_num_images = filter.max_num_images(),
            "Resolved image filter"
        );

        Ok(filter)
    }

    fn date_range(&self) -> Result<Option<DateRange>> {
        let end = self.end_date.as_deref().map(Date::new).transpose()?;
        match (self.start_date.as_deref(), end) {
            (Some(start), end) => Ok(Some(DateRange::new(Date::new(start)?, end))),
            (None, None) => Ok(None),
            (None, Some(end)) => Err(HazardError::invalid_value(format!(
                "end_date {} given without start_date",
                end
            ))),
        }
    }
}

fn parse_satellites(tokens: &[String]) -> Result<Vec<Satellite>> {
    let mut satellites: Vec<Satellite> = Vec::new();
    for token in tokens {
        for satellite in Satellite::from_string(token.trim())? {
            if !satellites.contains(&satellite) {
                satellites.push(satellite);
            }
        }
    }
    Ok(satellites)
}

fn parse_image_types(tokens: &[String]) -> Result<Vec<ImageType>> {
    let mut image_types: Vec<ImageType> = Vec::new();
    for token in tokens {
        let image_type = ImageType::from_string(token.trim())?;
        if !image_types.contains(&image_type) {
            image_types.push(image_type);
        }
    }
    Ok(image_types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazard_monitor_core::{DaySubtraction, FixedClock, SatelliteEnum};

    fn clock() -> FixedClock {
        FixedClock::ymd(2020, 6, 15).unwrap()
    }

    fn strings(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_empty_query_uses_defaults() {
        let filter = FilterQuery::default()
            .resolve(&FilterConfig::default(), &clock())
            .unwrap();
        assert!(filter.satellites().is_none());
        assert!(filter.image_types().is_none());
        assert!(filter.date_range().is_none());
        assert_eq!(filter.max_num_images(), 20);
    }

    #[test]
    fn test_satellites_expand_and_dedupe() {
        let query = FilterQuery {
            satellites: strings(&["S1A", "s1a_asc", "CSK_DESC"]),
            ..Default::default()
        };
        let filter = query.resolve(&FilterConfig::default(), &clock()).unwrap();
        assert_eq!(
            filter.satellites().unwrap(),
            &[
                Satellite::ascending(SatelliteEnum::S1a),
                Satellite::descending(SatelliteEnum::S1a),
                Satellite::descending(SatelliteEnum::Csk),
            ]
        );
    }

    #[test]
    fn test_bad_tokens_propagate() {
        let query = FilterQuery {
            satellites: strings(&["S1A_UP"]),
            ..Default::default()
        };
        let err = query.resolve(&FilterConfig::default(), &clock()).unwrap_err();
        assert!(err.is_ascending_parse());

        let query = FilterQuery {
            image_types: strings(&["geo_coherence", "thermal"]),
            ..Default::default()
        };
        let err = query.resolve(&FilterConfig::default(), &clock()).unwrap_err();
        assert!(err.is_invalid_value());
    }

    #[test]
    fn test_explicit_dates() {
        let query = FilterQuery {
            start_date: Some("20200101".into()),
            end_date: Some("20200301".into()),
            ..Default::default()
        };
        let config = FilterConfig {
            last_n_days: Some(5),
            ..Default::default()
        };
        let filter = query.resolve(&config, &clock()).unwrap();
        assert_eq!(filter.date_range().unwrap().to_string(), "[20200101, 20200301]");
    }

    #[test]
    fn test_end_without_start_rejected() {
        let query = FilterQuery {
            end_date: Some("20200301".into()),
            ..Default::default()
        };
        assert!(query
            .resolve(&FilterConfig::default(), &clock())
            .unwrap_err()
            .is_invalid_value());
    }

    #[test]
    fn test_last_n_days_with_end_date() {
        let query = FilterQuery {
            start_date: Some("20190101".into()),
            end_date: Some("20200612".into()),
            last_n_days: Some(10),
            ..Default::default()
        };
        let filter = query.resolve(&FilterConfig::default(), &clock()).unwrap();
        assert_eq!(filter.date_range().unwrap().to_string(), "[20200605, 20200612]");
    }

    #[test]
    fn test_config_window_and_arithmetic() {
        let config = FilterConfig {
            last_n_days: Some(30),
            day_subtraction: DaySubtraction::Calendar,
            ..Default::default()
        };
        let filter = FilterQuery::default().resolve(&config, &clock()).unwrap();
        assert_eq!(filter.date_range().unwrap().to_string(), "[20200516, None]");
    }

    #[test]
    fn test_extreme_last_n_days_rejected() {
        let query: FilterQuery =
            serde_json::from_str(r#"{"last_n_days": -9223372036854775808}"#).unwrap();
        let err = query.resolve(&FilterConfig::default(), &clock()).unwrap_err();
        assert!(err.is_invalid_value());
    }

    #[test]
    fn test_max_num_images_clamped() {
        let query = FilterQuery {
            max_num_images: Some(10_000),
            ..Default::default()
        };
        let filter = query.resolve(&FilterConfig::default(), &clock()).unwrap();
        assert_eq!(filter.max_num_images(), 200);
    }

    #[test]
    fn test_query_from_json() {
        let query: FilterQuery = serde_json::from_str(
            r#"{"satellites": ["TSX_ASC"], "image_types": ["ORTHO_COHERENCE"], "last_n_days": 3}"#,
        )
        .unwrap();
        let filter = query.resolve(&FilterConfig::default(), &clock()).unwrap();
        assert_eq!(filter.image_types().unwrap(), &[ImageType::OrthoCoherence]);
        assert_eq!(filter.date_range().unwrap().start.as_str(), "20200612");
    }
}
