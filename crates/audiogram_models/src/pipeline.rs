//! Load, build, run: the three steps of a summary request.

use audiogram_core::{Candidate, Input, MediaSource, Message, ModelSpec, Role, SamplingParams};
use audiogram_error::{InferenceError, InferenceErrorKind, ModelLoadError};
use audiogram_interface::VisionLanguageEngine;
use tracing::{error, info, instrument};

/// Loads the model named by `spec`.
///
/// Failures are logged here and returned unchanged.
#[instrument(skip_all, fields(model = %spec.model()))]
pub fn load_model<E: VisionLanguageEngine>(
    engine: &E,
    spec: &ModelSpec,
) -> Result<E::Handle, ModelLoadError> {
    info!("Loading model: {}", spec.model());

    let handle = engine
        .load(spec)
        .inspect_err(|e| error!("Failed to initialize model: {}", e))?;

    info!("Model loaded successfully.");
    Ok(handle)
}

/// Builds the single user turn carrying `prompt` and the image at `image_url`.
///
/// # Examples
///
/// ```
/// use audiogram_core::Role;
/// use audiogram_models::build_messages;
///
/// let messages = build_messages("Summarize.", "https://example.com/audiogram.png");
///
/// assert_eq!(messages.len(), 1);
/// assert_eq!(*messages[0].role(), Role::User);
/// assert_eq!(messages[0].content()[0].as_text(), Some("Summarize."));
/// assert_eq!(
///     messages[0].content()[1].image_url(),
///     Some("https://example.com/audiogram.png")
/// );
/// ```
pub fn build_messages(prompt: &str, image_url: &str) -> Vec<Message> {
    vec![Message::new(
        Role::User,
        vec![
            Input::Text(prompt.to_string()),
            Input::Image {
                mime: None,
                source: MediaSource::Url(image_url.to_string()),
            },
        ],
    )]
}

/// Runs one inference call and returns the trimmed first generated text.
///
/// Failures are logged here and returned unchanged.
#[instrument(skip_all, fields(messages = messages.len()))]
pub fn run_inference<E: VisionLanguageEngine>(
    engine: &E,
    handle: &E::Handle,
    messages: &[Message],
    sampling: &SamplingParams,
) -> Result<String, InferenceError> {
    info!("Running inference...");

    let text = engine
        .chat(handle, messages, sampling)
        .and_then(|candidates| first_text(&candidates))
        .inspect_err(|e| error!("Inference failed: {}", e))?;

    info!("Inference completed successfully.");
    Ok(text)
}

fn first_text(candidates: &[Candidate]) -> Result<String, InferenceError> {
    let candidate = candidates
        .first()
        .ok_or_else(|| InferenceError::new(InferenceErrorKind::NoCandidates))?;

    candidate
        .first_text()
        .map(|text| text.trim().to_string())
        .ok_or_else(|| InferenceError::new(InferenceErrorKind::EmptyCandidate))
}
