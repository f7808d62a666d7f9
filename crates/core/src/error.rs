//! Error types for value construction

use thiserror::Error;

/// Failure to construct a domain value from raw input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HazardError {
    /// Raw input failed format or range validation
    #[error("{0}")]
    InvalidValue(String),

    /// Satellite token carried a direction other than asc/desc/both
    #[error("cannot parse orbit direction of satellite {0:?}: expected ASC, DESC or BOTH")]
    AscendingParse(String),
}

impl HazardError {
    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue(message.into())
    }

    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue(_))
    }

    pub fn is_ascending_parse(&self) -> bool {
        matches!(self, Self::AscendingParse(_))
    }
}

pub type Result<T> = std::result::Result<T, HazardError>;
