//! Media source types for multimodal content.

use serde::{Deserialize, Serialize};

/// Where media content is sourced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaSource {
    /// URL the serving engine fetches the content from
    Url(String),
    /// Inline base64 payload, sent as a `data:` URL
    Base64(String),
}
