//! Error types for the audiogram summary tool.
//!
//! Each layer owns an error struct that records where it was raised. The
//! umbrella [`AudiogramError`] wraps any of them for callers that do not care
//! which layer failed.

mod config;
mod inference;
mod model_load;

pub use config::{ConfigError, ConfigErrorKind};
pub use inference::{InferenceError, InferenceErrorKind};
pub use model_load::{ModelLoadError, ModelLoadErrorKind};

/// Specific error conditions across the workspace.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From, derive_more::Display)]
pub enum AudiogramErrorKind {
    /// Configuration could not be loaded or validated.
    #[display("{}", _0)]
    Config(ConfigError),
    /// Model failed to initialize.
    #[display("{}", _0)]
    ModelLoad(ModelLoadError),
    /// Generation failed.
    #[display("{}", _0)]
    Inference(InferenceError),
}

/// Audiogram error with kind discrimination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudiogramError(Box<AudiogramErrorKind>);

impl AudiogramError {
    /// Create a new AudiogramError from a kind.
    pub fn new(kind: AudiogramErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AudiogramErrorKind {
        &self.0
    }
}

impl std::fmt::Display for AudiogramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Audiogram Error: {}", self.0)
    }
}

impl std::error::Error for AudiogramError {}

// Generic From implementation for any type that converts to AudiogramErrorKind
impl<T> From<T> for AudiogramError
where
    T: Into<AudiogramErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_preserved_through_umbrella() {
        let err = InferenceError::new(InferenceErrorKind::NoCandidates);
        let wrapped: AudiogramError = err.clone().into();

        assert_eq!(wrapped.kind(), &AudiogramErrorKind::Inference(err));
    }

    #[test]
    fn test_location_tracks_caller() {
        let err = ModelLoadError::new(ModelLoadErrorKind::InvalidIdentifier(String::new()));

        assert!(err.file.ends_with("lib.rs"));
        assert!(err.to_string().starts_with("Model Load Error: Invalid model identifier"));
    }

    #[test]
    fn test_config_error_names_field() {
        let err = ConfigError::invalid("max_tokens", "must be greater than zero");

        assert!(err.file.ends_with("lib.rs"));
        assert_eq!(
            err.kind(),
            &ConfigErrorKind::InvalidValue {
                field: "max_tokens",
                reason: "must be greater than zero".to_string(),
            }
        );
        assert!(
            err.to_string()
                .starts_with("Configuration Error: Invalid value for max_tokens: must be greater than zero")
        );
    }

    #[test]
    fn test_model_not_served_lists_available() {
        let kind = ModelLoadErrorKind::ModelNotServed {
            model: "mistralai/Pixtral-12B-2409".to_string(),
            available: vec!["llava-hf/llava-1.5-7b-hf".to_string()],
        };

        let text = kind.to_string();
        assert!(text.contains("mistralai/Pixtral-12B-2409"));
        assert!(text.contains("llava-hf/llava-1.5-7b-hf"));
    }
}
