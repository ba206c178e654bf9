//! Core data types for the audiogram summary tool.
//!
//! This crate provides the request, sampling and result types shared by the
//! inference adapter and the command-line entry point, plus the logging
//! context every component writes through.

mod input;
mod media;
mod message;
mod model;
mod observability;
mod output;
mod role;
mod sampling;

pub use input::Input;
pub use media::MediaSource;
pub use message::Message;
pub use model::{DEFAULT_MODEL, ModelSpec, TokenizerMode};
pub use observability::{
    DEFAULT_FILTER, LineFormat, LogBuffer, LogContext, TIMESTAMP_FORMAT, env_filter,
};
pub use output::{Candidate, CompletionOutput};
pub use role::Role;
pub use sampling::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, SamplingParams};
