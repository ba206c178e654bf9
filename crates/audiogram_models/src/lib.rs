//! Vision-language model integration for the audiogram summary tool.
//!
//! [`load_model`], [`build_messages`] and [`run_inference`] work with any
//! [`VisionLanguageEngine`](audiogram_interface::VisionLanguageEngine);
//! [`OpenAICompatibleEngine`] is the engine used against a local server.

pub mod openai_compat;
mod pipeline;

pub use openai_compat::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ModelHandle, OpenAICompatibleEngine};
pub use pipeline::{build_messages, load_model, run_inference};
