//! Type conversions between workspace types and the OpenAI format.

use crate::openai_compat::{
    ChatMessage, ChatRequest, ChatResponse, ContentPart, ImageUrl, ModelHandle, ModelList,
};
use audiogram_core::{Candidate, CompletionOutput, Input, MediaSource, Message, ModelSpec, SamplingParams};
use audiogram_error::{InferenceError, InferenceErrorKind, ModelLoadError, ModelLoadErrorKind};

/// Converts messages and sampling parameters to an OpenAI chat request.
pub fn to_chat_request(
    messages: &[Message],
    handle: &ModelHandle,
    sampling: &SamplingParams,
) -> Result<ChatRequest, InferenceError> {
    if messages.is_empty() {
        return Err(InferenceError::new(InferenceErrorKind::InvalidRequest(
            "at least one message is required".to_string(),
        )));
    }

    let messages = messages
        .iter()
        .map(|msg| ChatMessage {
            role: msg.role().to_string(),
            content: msg.content().iter().map(to_content_part).collect(),
        })
        .collect::<Vec<_>>();

    ChatRequest::builder()
        .model(handle.model().clone())
        .messages(messages)
        .max_tokens(Some(*sampling.max_tokens()))
        .temperature(Some(*sampling.temperature()))
        .build()
        .map_err(|e| {
            InferenceError::new(InferenceErrorKind::Builder(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

fn to_content_part(input: &Input) -> ContentPart {
    match input {
        Input::Text(text) => ContentPart::Text { text: text.clone() },
        Input::Image { mime, source } => {
            let url = match source {
                MediaSource::Url(url) => url.clone(),
                MediaSource::Base64(data) => format!(
                    "data:{};base64,{}",
                    mime.as_deref().unwrap_or("image/png"),
                    data
                ),
            };
            ContentPart::ImageUrl {
                image_url: ImageUrl { url },
            }
        }
    }
}

/// Converts an OpenAI chat response into the candidates of one request.
///
/// Every choice becomes an output of a single candidate, in order.
pub fn from_chat_response(response: ChatResponse) -> Vec<Candidate> {
    let outputs = response
        .choices
        .into_iter()
        .map(|choice| {
            CompletionOutput::new(
                choice.message.content.unwrap_or_default(),
                choice.finish_reason,
            )
        })
        .collect();

    vec![Candidate::new(outputs)]
}

/// Finds the requested model in a server listing.
pub fn handle_from_listing(
    spec: &ModelSpec,
    listing: &ModelList,
) -> Result<ModelHandle, ModelLoadError> {
    listing
        .data
        .iter()
        .find(|card| card.id == *spec.model())
        .map(|card| ModelHandle::new(spec, card.max_model_len))
        .ok_or_else(|| {
            ModelLoadError::new(ModelLoadErrorKind::ModelNotServed {
                model: spec.model().clone(),
                available: listing.data.iter().map(|card| card.id.clone()).collect(),
            })
        })
}
