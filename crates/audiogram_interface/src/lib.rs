//! Trait definitions for the audiogram summary tool.
//!
//! The model-serving engine is an external collaborator. This crate pins down
//! the only contract the rest of the workspace relies on.

mod engine;

pub use engine::VisionLanguageEngine;
