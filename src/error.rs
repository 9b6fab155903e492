//! Error types for the tier tally core engine

use thiserror::Error;

/// Main error type for the tier tally core engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TierTallyError {
    #[error("Invalid calibration: good score {good} must be greater than bad score {bad}")]
    InvalidCalibration { good: i32, bad: i32 },

    #[error("Tier index {index} out of range for theme with {len} tiers")]
    TierIndexOutOfRange { index: usize, len: usize },

    #[error("Theme not found: {0}")]
    ThemeNotFound(usize),

    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    #[error("Invalid player count: {0}")]
    InvalidPlayerCount(i32),

    #[error("Game type not found: {0}")]
    GameTypeNotFound(String),

    #[error("Game type already exists: {0}")]
    DuplicateGameType(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<serde_json::Error> for TierTallyError {
    fn from(err: serde_json::Error) -> Self {
        TierTallyError::DeserializationError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<TierTallyError> for pyo3::PyErr {
    fn from(err: TierTallyError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyIndexError, PyKeyError, PyValueError};

        let msg = err.to_string();
        match err {
            TierTallyError::InvalidCalibration { .. }
            | TierTallyError::InvalidTheme(_)
            | TierTallyError::InvalidPlayerCount(_)
            | TierTallyError::DuplicateGameType(_)
            | TierTallyError::DeserializationError(_) => PyValueError::new_err(msg),
            TierTallyError::TierIndexOutOfRange { .. } | TierTallyError::ThemeNotFound(_) => {
                PyIndexError::new_err(msg)
            }
            TierTallyError::GameTypeNotFound(_) => PyKeyError::new_err(msg),
        }
    }
}

/// Result type alias for the tier tally core engine
pub type Result<T> = std::result::Result<T, TierTallyError>;
