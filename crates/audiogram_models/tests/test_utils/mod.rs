//! Test utilities for engine-facing tests.
//!
//! This module provides a scripted engine that never touches the network.

use std::cell::RefCell;

use audiogram_core::{Candidate, CompletionOutput, Message, ModelSpec, SamplingParams};
use audiogram_error::{InferenceError, ModelLoadError};
use audiogram_interface::VisionLanguageEngine;

/// What the scripted engine does when called.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockBehavior {
    /// Load succeeds and chat returns these candidates.
    Respond(Vec<Candidate>),
    /// Load fails with this error.
    FailLoad(ModelLoadError),
    /// Load succeeds, chat fails with this error.
    FailChat(InferenceError),
}

/// Engine returning scripted results and recording what it was sent.
#[derive(Debug)]
pub struct MockEngine {
    behavior: MockBehavior,
    loaded: RefCell<Vec<ModelSpec>>,
    chats: RefCell<Vec<(Vec<Message>, SamplingParams)>>,
}

#[allow(dead_code)]
impl MockEngine {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            loaded: RefCell::new(Vec::new()),
            chats: RefCell::new(Vec::new()),
        }
    }

    /// Engine answering with a single candidate holding `text`.
    pub fn replying(text: &str) -> Self {
        Self::new(MockBehavior::Respond(vec![Candidate::new(vec![
            CompletionOutput::new(text, Some("stop".to_string())),
        ])]))
    }

    pub fn loaded(&self) -> Vec<ModelSpec> {
        self.loaded.borrow().clone()
    }

    pub fn chats(&self) -> Vec<(Vec<Message>, SamplingParams)> {
        self.chats.borrow().clone()
    }
}

impl VisionLanguageEngine for MockEngine {
    type Handle = String;

    fn load(&self, spec: &ModelSpec) -> Result<String, ModelLoadError> {
        self.loaded.borrow_mut().push(spec.clone());
        match &self.behavior {
            MockBehavior::FailLoad(err) => Err(err.clone()),
            _ => Ok(spec.model().clone()),
        }
    }

    fn chat(
        &self,
        _handle: &String,
        messages: &[Message],
        sampling: &SamplingParams,
    ) -> Result<Vec<Candidate>, InferenceError> {
        self.chats
            .borrow_mut()
            .push((messages.to_vec(), *sampling));
        match &self.behavior {
            MockBehavior::Respond(candidates) => Ok(candidates.clone()),
            MockBehavior::FailChat(err) => Err(err.clone()),
            MockBehavior::FailLoad(_) => unreachable!("chat after failed load"),
        }
    }
}
