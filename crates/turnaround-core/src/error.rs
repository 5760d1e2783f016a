//! Core error types for due-date computation.
//!
//! The three submission-validation variants carry fixed messages that callers
//! may surface to end users unchanged.

use thiserror::Error;

/// Errors produced while computing a due date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DueDateError {
    /// The submission instant falls on a Saturday or Sunday.
    #[error("submit date should not be weekend day")]
    WeekendSubmission,

    /// The submission hour is later than the end of the business day.
    #[error("submit date hour should not be bigger than end hour of day")]
    HourTooLate,

    /// The submission hour is earlier than the start of the business day.
    #[error("submit date hour should not be less than start hour of day")]
    HourTooEarly,

    /// A signed turnaround value was negative.
    #[error("turnaround hours should not be negative, got {0}")]
    NegativeTurnaround(i64),

    /// Date arithmetic left the representable calendar range.
    #[error("due date is out of the supported calendar range")]
    OutOfRange,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Config file not found
    #[error("config file not found at {path}")]
    NotFound {
        /// Path where config was expected
        path: String,
    },

    /// Failed to parse TOML
    #[error("failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to serialize config
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias using `DueDateError`.
pub type Result<T> = std::result::Result<T, DueDateError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            DueDateError::WeekendSubmission.to_string(),
            "submit date should not be weekend day"
        );
        assert_eq!(
            DueDateError::HourTooLate.to_string(),
            "submit date hour should not be bigger than end hour of day"
        );
        assert_eq!(
            DueDateError::HourTooEarly.to_string(),
            "submit date hour should not be less than start hour of day"
        );
    }

    #[test]
    fn test_negative_turnaround_display() {
        let err = DueDateError::NegativeTurnaround(-3);
        assert_eq!(err.to_string(), "turnaround hours should not be negative, got -3");
    }

    #[test]
    fn test_config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
