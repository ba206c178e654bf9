//! Inference execution error types.

use derive_more::{Display, Error};

/// Specific error conditions raised during generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum InferenceErrorKind {
    /// HTTP/network error, including timeouts.
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Server answered with a non-success status.
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Request could not be expressed in the wire format.
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),

    /// Failed to parse response.
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// Engine returned no candidates.
    #[display("Engine returned no candidates")]
    NoCandidates,

    /// First candidate carried no generated outputs.
    #[display("First candidate has no generated output")]
    EmptyCandidate,

    /// Builder error.
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Inference error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Inference Error: {} at line {} in {}", kind, line, file)]
pub struct InferenceError {
    /// The specific error kind.
    pub kind: InferenceErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl InferenceError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InferenceErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &InferenceErrorKind {
        &self.kind
    }
}

impl From<InferenceErrorKind> for InferenceError {
    #[track_caller]
    fn from(kind: InferenceErrorKind) -> Self {
        Self::new(kind)
    }
}
