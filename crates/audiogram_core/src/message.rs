//! Chat turns sent to the engine.

use crate::{Input, Role};
use serde::{Deserialize, Serialize};

/// One conversational turn: who speaks and the ordered content parts.
///
/// Built once per request and consumed by a single inference call.
///
/// # Examples
///
/// ```
/// use audiogram_core::{Input, MediaSource, Message, Role};
///
/// let message = Message::new(
///     Role::User,
///     vec![
///         Input::Text("Summarize this audiogram.".to_string()),
///         Input::Image {
///             mime: None,
///             source: MediaSource::Url("https://example.com/audiogram.png".to_string()),
///         },
///     ],
/// );
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content()[1].image_url(), Some("https://example.com/audiogram.png"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Message {
    /// Author of the turn
    role: Role,
    /// Content parts, text before image
    content: Vec<Input>,
}

impl Message {
    /// Creates a turn from its role and content parts.
    pub fn new(role: Role, content: Vec<Input>) -> Self {
        Self { role, content }
    }
}
