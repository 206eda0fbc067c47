//! Fixture data error model.

use thiserror::Error;

/// Result type used across the data layer.
pub type DataResult<T> = Result<T, DataError>;

/// Failure while loading or validating fixture data.
///
/// Keep this focused on load-time failures. Lookup misses are not errors at
/// this layer; they surface as `None` or an empty collection so callers can
/// branch on absence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataError {
    /// The fixture file does not exist.
    #[error("fixture not found: {0}")]
    NotFound(String),

    /// The fixture file exists but could not be read.
    #[error("fixture io error: {0}")]
    Io(String),

    /// The fixture contents were not valid JSON.
    #[error("fixture parse failed: {0}")]
    Parse(String),

    /// The fixture declared the same product id or name twice.
    #[error("duplicate fixture entry: {0}")]
    Duplicate(String),
}

impl DataError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::Duplicate(msg.into())
    }
}
