//! Typed error variants for the siyuan-conf crate.
//!
//! Construction and directory resolution never fail; these errors come from
//! loading or saving a [`ConfDocument`](crate::ConfDocument) and from the
//! validated setters on the configuration sections.

use thiserror::Error;

/// Errors that can occur when loading, saving or mutating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained JSON that could not be parsed.
    #[error("JSON parse error in config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A numeric preference was outside its accepted inclusive range.
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A count field received a negative value other than the `-1` sentinel.
    #[error("{field} accepts -1 or a non-negative count, got {value}")]
    InvalidSentinel { field: &'static str, value: i32 },

    /// An integer did not map to any variant of an integer-encoded setting.
    #[error("{field} has no option {value}")]
    UnknownOption { field: &'static str, value: i32 },
}

/// Convenience type alias for Results with ConfigError
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "conf.json missing");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().contains("conf.json missing"));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::OutOfRange {
            field: "dynamicLoadBlocks",
            value: 10,
            min: 48,
            max: 1024,
        };
        assert_eq!(
            err.to_string(),
            "dynamicLoadBlocks must be within [48, 1024], got 10"
        );

        let err = ConfigError::InvalidSentinel {
            field: "backmentionExpandCount",
            value: -3,
        };
        assert_eq!(
            err.to_string(),
            "backmentionExpandCount accepts -1 or a non-negative count, got -3"
        );
    }
}
