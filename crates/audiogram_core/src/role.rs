//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Who authored a chat turn.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Instructions framing the conversation
    System,
    /// The person asking; every request this tool sends
    User,
    /// The model's replies
    Assistant,
}
