//! OpenAI-compatible serving engine.
//!
//! Talks to a local server exposing `/v1/models` and `/v1/chat/completions`,
//! such as `vllm serve mistralai/Pixtral-12B-2409 --tokenizer-mode mistral`.

mod client;
mod conversions;
mod dto;
mod handle;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OpenAICompatibleEngine};
pub use dto::{
    ChatChoice, ChatMessage, ChatRequest, ChatRequestBuilder, ChatResponse, ChatUsage,
    ContentPart, ImageUrl, ModelCard, ModelList, ResponseMessage,
};
pub use handle::ModelHandle;
