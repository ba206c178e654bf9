//! Vision-language engine contract.

use audiogram_core::{Candidate, Message, ModelSpec, SamplingParams};
use audiogram_error::{InferenceError, ModelLoadError};

/// A model-serving engine able to answer multimodal chat requests.
///
/// Implementations own weight loading, batching, tokenization and sampling.
/// Both calls block until the engine answers.
pub trait VisionLanguageEngine {
    /// Ready-to-query reference to a loaded model.
    type Handle;

    /// Brings the model named by `spec` online for vision + text chat.
    ///
    /// # Errors
    ///
    /// Fails if the identifier is invalid, the weights are unavailable or the
    /// runtime lacks resources to host the model.
    fn load(&self, spec: &ModelSpec) -> Result<Self::Handle, ModelLoadError>;

    /// Generates a reply to `messages`.
    ///
    /// Returns one [`Candidate`] per request, each holding the generated
    /// outputs in engine order.
    ///
    /// # Errors
    ///
    /// Fails if the handle is stale, the messages cannot be expressed to the
    /// engine, or generation itself fails (image fetch, timeout, memory).
    fn chat(
        &self,
        handle: &Self::Handle,
        messages: &[Message],
        sampling: &SamplingParams,
    ) -> Result<Vec<Candidate>, InferenceError>;
}

impl<E: VisionLanguageEngine + ?Sized> VisionLanguageEngine for &E {
    type Handle = E::Handle;

    fn load(&self, spec: &ModelSpec) -> Result<Self::Handle, ModelLoadError> {
        (**self).load(spec)
    }

    fn chat(
        &self,
        handle: &Self::Handle,
        messages: &[Message],
        sampling: &SamplingParams,
    ) -> Result<Vec<Candidate>, InferenceError> {
        (**self).chat(handle, messages, sampling)
    }
}
