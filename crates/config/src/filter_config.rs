//! Image Query Defaults
//!
//! Defaults applied when a request omits a constraint, loaded from
//! filters.yaml.

use hazard_monitor_core::DaySubtraction;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Image query defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Result cap when the request does not give one
    #[serde(default = "default_max_num_images")]
    pub max_num_images: usize,
    /// Hard upper bound on any requested result cap
    #[serde(default = "default_max_num_images_limit")]
    pub max_num_images_limit: usize,
    /// Window applied when the request gives neither dates nor last_n_days
    #[serde(default)]
    pub last_n_days: Option<i64>,
    /// Arithmetic used for last_n_days windows
    #[serde(default)]
    pub day_subtraction: DaySubtraction,
}

fn default_max_num_images() -> usize {
    20
}

fn default_max_num_images_limit() -> usize {
    200
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_num_images: default_max_num_images(),
            max_num_images_limit: default_max_num_images_limit(),
            last_n_days: None,
            day_subtraction: DaySubtraction::default(),
        }
    }
}

impl FilterConfig {
    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FilterConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            FilterConfigError::FileNotFound(path.as_ref().display().to_string(), e.to_string())
        })?;

        let config = Self::from_yaml(&content)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            max_num_images = config.max_num_images,
            day_subtraction = ?config.day_subtraction,
            "Loaded filter config"
        );
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, FilterConfigError> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| FilterConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Cap a requested result count to the configured limit
    pub fn clamp_max_num_images(&self, requested: Option<usize>) -> usize {
        let requested = requested.unwrap_or(self.max_num_images);
        if requested > self.max_num_images_limit {
            tracing::warn!(
                requested,
                limit = self.max_num_images_limit,
                "Requested image count exceeds limit, clamping"
            );
            self.max_num_images_limit
        } else {
            requested
        }
    }

    fn validate(&self) -> Result<(), FilterConfigError> {
        if self.max_num_images > self.max_num_images_limit {
            return Err(FilterConfigError::Invalid(format!(
                "max_num_images ({}) exceeds max_num_images_limit ({})",
                self.max_num_images, self.max_num_images_limit
            )));
        }
        Ok(())
    }
}

/// Errors when loading filter configuration
#[derive(Debug)]
pub enum FilterConfigError {
    FileNotFound(String, String),
    ParseError(String),
    Invalid(String),
}

impl std::fmt::Display for FilterConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound(path, err) => {
                write!(f, "Filter config not found at {}: {}", path, err)
            }
            Self::ParseError(err) => write!(f, "Failed to parse filter config: {}", err),
            Self::Invalid(err) => write!(f, "Invalid filter config: {}", err),
        }
    }
}

impl std::error::Error for FilterConfigError {}
