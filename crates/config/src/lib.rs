//! Hazard Monitor Configuration
//!
//! Query defaults loaded from YAML, and resolution of raw request parameters
//! into a [`hazard_monitor_core::HazardInfoFilter`].

mod filter_config;
mod query;

pub use filter_config::{FilterConfig, FilterConfigError};
pub use query::FilterQuery;
