//! Model identification.

use serde::{Deserialize, Serialize};

/// Model served when nothing else is configured.
pub const DEFAULT_MODEL: &str = "mistralai/Pixtral-12B-2409";

/// How the serving engine tokenizes prompts for a model.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TokenizerMode {
    /// Fast tokenizer when available
    Auto,
    /// Always the slow (reference) tokenizer
    Slow,
    /// Mistral's own tokenizer, required by Pixtral
    #[default]
    Mistral,
}

impl TryFrom<String> for TokenizerMode {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Identifies which model to load and how to tokenize for it.
///
/// # Examples
///
/// ```
/// use audiogram_core::{ModelSpec, TokenizerMode};
///
/// let spec = ModelSpec::new("mistralai/Pixtral-12B-2409", TokenizerMode::Mistral);
/// assert_eq!(spec.model(), "mistralai/Pixtral-12B-2409");
/// assert_eq!(spec.tokenizer_mode().to_string(), "mistral");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct ModelSpec {
    /// Model identifier, e.g. a Hugging Face repository id
    model: String,
    /// Tokenization mode
    tokenizer_mode: TokenizerMode,
}

impl ModelSpec {
    /// Creates a model spec.
    pub fn new(model: impl Into<String>, tokenizer_mode: TokenizerMode) -> Self {
        Self {
            model: model.into(),
            tokenizer_mode,
        }
    }

    /// Command line that starts a local server hosting this model.
    pub fn serve_command(&self) -> String {
        format!(
            "vllm serve {} --tokenizer-mode {}",
            self.model, self.tokenizer_mode
        )
    }
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL, TokenizerMode::default())
    }
}
