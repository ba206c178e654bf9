//! Model initialization error types.

use derive_more::{Display, Error};

/// Specific error conditions raised while bringing a model online.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ModelLoadErrorKind {
    /// Model identifier is empty or malformed.
    #[display("Invalid model identifier: {:?}", _0)]
    InvalidIdentifier(String),

    /// Serving endpoint could not be reached.
    #[display("Inference server unreachable at {}: {}", url, message)]
    ServerUnreachable {
        /// Endpoint that was contacted
        url: String,
        /// Transport failure detail
        message: String,
    },

    /// Serving endpoint does not host the requested model.
    #[display("Model {} is not served (available: {:?})", model, available)]
    ModelNotServed {
        /// Requested model identifier
        model: String,
        /// Identifiers the server reported
        available: Vec<String>,
    },

    /// Server answered with a non-success status.
    #[display("API error (status {}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Model listing could not be decoded.
    #[display("Response parsing failed: {}", _0)]
    ResponseParsing(String),

    /// HTTP client could not be constructed.
    #[display("Client construction failed: {}", _0)]
    Client(String),
}

/// Model initialization error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Model Load Error: {} at line {} in {}", kind, line, file)]
pub struct ModelLoadError {
    /// The specific error kind.
    pub kind: ModelLoadErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl ModelLoadError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelLoadErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ModelLoadErrorKind {
        &self.kind
    }
}

impl From<ModelLoadErrorKind> for ModelLoadError {
    #[track_caller]
    fn from(kind: ModelLoadErrorKind) -> Self {
        Self::new(kind)
    }
}
