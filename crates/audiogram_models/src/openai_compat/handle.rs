//! Handle to a model hosted by an OpenAI-compatible server.

use audiogram_core::{ModelSpec, TokenizerMode};
use derive_getters::Getters;

/// A model confirmed to be served and ready for chat requests.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ModelHandle {
    /// Served model identifier
    model: String,
    /// Tokenizer mode the server was launched with
    tokenizer_mode: TokenizerMode,
    /// Context window reported by the server
    max_model_len: Option<u32>,
}

impl ModelHandle {
    /// Creates a handle for `spec`.
    pub fn new(spec: &ModelSpec, max_model_len: Option<u32>) -> Self {
        Self {
            model: spec.model().clone(),
            tokenizer_mode: *spec.tokenizer_mode(),
            max_model_len,
        }
    }
}
