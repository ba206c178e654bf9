//! Configuration error types.

use derive_more::{Display, Error};

/// Why configuration could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ConfigErrorKind {
    /// A source could not be read or deserialized.
    #[display("Failed to load configuration: {}", _0)]
    Load(String),

    /// A value was read but is out of range.
    #[display("Invalid value for {}: {}", field, reason)]
    InvalidValue {
        /// Configuration key
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use audiogram_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::invalid("temperature", "must be between 0.0 and 2.0, got 9");
/// assert!(matches!(
///     err.kind(),
///     ConfigErrorKind::InvalidValue { field: "temperature", .. }
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific error kind.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Out-of-range value for `field`.
    #[track_caller]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::InvalidValue {
            field,
            reason: reason.into(),
        })
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}

impl From<ConfigErrorKind> for ConfigError {
    #[track_caller]
    fn from(kind: ConfigErrorKind) -> Self {
        Self::new(kind)
    }
}
