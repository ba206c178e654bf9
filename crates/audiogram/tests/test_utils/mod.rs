//! Test utilities for entry-point tests.

use std::cell::RefCell;

use audiogram_core::{Candidate, CompletionOutput, Message, ModelSpec, SamplingParams};
use audiogram_error::{InferenceError, InferenceErrorKind, ModelLoadError, ModelLoadErrorKind};
use audiogram_interface::VisionLanguageEngine;

/// Engine whose load or chat can be made to fail, recording what it was sent.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    fail_load: bool,
    fail_chat: bool,
    reply: String,
    sent: RefCell<Vec<Message>>,
}

#[allow(dead_code)]
impl ScriptedEngine {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            ..Self::default()
        }
    }

    pub fn failing_load() -> Self {
        Self {
            fail_load: true,
            ..Self::default()
        }
    }

    pub fn failing_chat() -> Self {
        Self {
            fail_chat: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Message> {
        self.sent.borrow().clone()
    }
}

impl VisionLanguageEngine for ScriptedEngine {
    type Handle = ();

    fn load(&self, spec: &ModelSpec) -> Result<(), ModelLoadError> {
        if self.fail_load {
            return Err(ModelLoadError::new(ModelLoadErrorKind::ModelNotServed {
                model: spec.model().clone(),
                available: Vec::new(),
            }));
        }
        Ok(())
    }

    fn chat(
        &self,
        _handle: &(),
        messages: &[Message],
        _sampling: &SamplingParams,
    ) -> Result<Vec<Candidate>, InferenceError> {
        self.sent.borrow_mut().extend_from_slice(messages);
        if self.fail_chat {
            return Err(InferenceError::new(InferenceErrorKind::Http(
                "operation timed out".to_string(),
            )));
        }
        Ok(vec![Candidate::new(vec![CompletionOutput::new(
            self.reply.clone(),
            Some("stop".to_string()),
        )])])
    }
}
