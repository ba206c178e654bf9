//! Generation results returned by an engine.

use serde::{Deserialize, Serialize};

/// One generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CompletionOutput {
    /// Generated text, untrimmed
    text: String,
    /// Why generation stopped, if the engine reported it
    finish_reason: Option<String>,
}

impl CompletionOutput {
    /// Creates a completion output.
    pub fn new(text: impl Into<String>, finish_reason: Option<String>) -> Self {
        Self {
            text: text.into(),
            finish_reason,
        }
    }
}

/// All outputs generated for one request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct Candidate {
    /// Generated outputs, in engine order
    outputs: Vec<CompletionOutput>,
}

impl Candidate {
    /// Creates a candidate from its outputs.
    pub fn new(outputs: Vec<CompletionOutput>) -> Self {
        Self { outputs }
    }

    /// Text of the first output, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.outputs.first().map(|output| output.text.as_str())
    }
}
