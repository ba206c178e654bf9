//! Blocking client for OpenAI-compatible serving endpoints.

use std::time::Duration;

use crate::openai_compat::{ChatResponse, ModelHandle, ModelList, conversions};
use audiogram_core::{Candidate, Message, ModelSpec, SamplingParams};
use audiogram_error::{InferenceError, InferenceErrorKind, ModelLoadError, ModelLoadErrorKind};
use audiogram_interface::VisionLanguageEngine;
use reqwest::blocking::{Client, RequestBuilder};
use tracing::{debug, error, instrument};

/// Default base URL of a locally started `vllm serve`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout. Generation on a 12B model can take minutes.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Engine backed by a locally hosted OpenAI-compatible server.
///
/// The server owns weights, batching, tokenization and sampling; loading a
/// model here means confirming the server hosts it.
#[derive(Debug, Clone)]
pub struct OpenAICompatibleEngine {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAICompatibleEngine {
    /// Creates a new engine.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Server root, with or without a trailing `/v1`
    /// * `api_key` - Bearer token, if the server was started with one
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    #[instrument(skip_all, fields(url = %base_url))]
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ModelLoadError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            error!(error = ?e, "Failed to build HTTP client");
            ModelLoadError::new(ModelLoadErrorKind::Client(e.to_string()))
        })?;

        let base_url = normalize_base_url(base_url);
        debug!(url = %base_url, timeout_secs = timeout.as_secs(), "Created OpenAI-compatible engine");

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }
}

fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    trimmed.strip_suffix("/v1").unwrap_or(trimmed).to_string()
}

impl VisionLanguageEngine for OpenAICompatibleEngine {
    type Handle = ModelHandle;

    #[instrument(skip_all, fields(model = %spec.model(), tokenizer_mode = %spec.tokenizer_mode()))]
    fn load(&self, spec: &ModelSpec) -> Result<ModelHandle, ModelLoadError> {
        if spec.model().trim().is_empty() {
            return Err(ModelLoadError::new(ModelLoadErrorKind::InvalidIdentifier(
                spec.model().clone(),
            )));
        }

        let url = self.endpoint("models");
        debug!(url = %url, "Querying served models");

        let response = self.authorized(self.client.get(&url)).send().map_err(|e| {
            ModelLoadError::new(ModelLoadErrorKind::ServerUnreachable {
                url: url.clone(),
                message: format!("{}; start the server with `{}`", e, spec.serve_command()),
            })
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(ModelLoadError::new(ModelLoadErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let listing: ModelList = response.json().map_err(|e| {
            ModelLoadError::new(ModelLoadErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(served = listing.data.len(), "Received model listing");
        conversions::handle_from_listing(spec, &listing)
    }

    #[instrument(skip_all, fields(model = %handle.model()))]
    fn chat(
        &self,
        handle: &ModelHandle,
        messages: &[Message],
        sampling: &SamplingParams,
    ) -> Result<Vec<Candidate>, InferenceError> {
        let chat_request = conversions::to_chat_request(messages, handle, sampling)?;

        debug!(
            message_count = chat_request.messages().len(),
            max_tokens = *sampling.max_tokens(),
            temperature = *sampling.temperature(),
            "Sending request"
        );

        let response = self
            .authorized(self.client.post(self.endpoint("chat/completions")))
            .json(&chat_request)
            .send()
            .map_err(|e| InferenceError::new(InferenceErrorKind::Http(format!("Request failed: {}", e))))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(InferenceError::new(InferenceErrorKind::Api {
                status: status.as_u16(),
                message,
            }));
        }

        let chat_response: ChatResponse = response.json().map_err(|e| {
            InferenceError::new(InferenceErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                prompt_tokens = ?usage.prompt_tokens,
                completion_tokens = ?usage.completion_tokens,
                total_tokens = ?usage.total_tokens,
                "Token usage"
            );
        }
        debug!(choices = chat_response.choices.len(), "Received response");

        Ok(conversions::from_chat_response(chat_response))
    }
}
