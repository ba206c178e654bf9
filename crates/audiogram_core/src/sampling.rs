//! Generation controls.

use serde::{Deserialize, Serialize};

/// Max tokens used when nothing else is configured.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Temperature used when nothing else is configured.
pub const DEFAULT_TEMPERATURE: f32 = 0.6;

/// Parameters controlling generation length and randomness.
///
/// # Examples
///
/// ```
/// use audiogram_core::SamplingParams;
///
/// let params = SamplingParams::default();
/// assert_eq!(*params.max_tokens(), 1024);
/// assert_eq!(*params.temperature(), 0.6);
///
/// let greedy = SamplingParams::new(256, 0.0);
/// assert_eq!(*greedy.max_tokens(), 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SamplingParams {
    /// Maximum number of tokens to generate
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
}

impl SamplingParams {
    /// Creates sampling parameters.
    pub fn new(max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE)
    }
}
