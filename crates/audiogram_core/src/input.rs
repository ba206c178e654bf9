//! Content parts of a chat message.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// One content part of a message.
///
/// # Examples
///
/// ```
/// use audiogram_core::{Input, MediaSource};
///
/// let text = Input::Text("Describe the audiogram.".to_string());
///
/// let image = Input::Image {
///     mime: None,
///     source: MediaSource::Url("https://example.com/audiogram.png".to_string()),
/// };
///
/// assert!(text.as_text().is_some());
/// assert_eq!(image.image_url(), Some("https://example.com/audiogram.png"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),

    /// Image input (PNG, JPEG, WebP, etc.).
    Image {
        /// MIME type, e.g., "image/png" or "image/jpeg"
        mime: Option<String>,
        /// Media source
        source: MediaSource,
    },
}

impl Input {
    /// Returns the text if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Input::Text(text) => Some(text),
            Input::Image { .. } => None,
        }
    }

    /// Returns the image URL if this is an image referenced by URL.
    pub fn image_url(&self) -> Option<&str> {
        match self {
            Input::Image {
                source: MediaSource::Url(url),
                ..
            } => Some(url),
            _ => None,
        }
    }
}
