//! Raw Messenger export structures.
//!
//! A conversation directory holds one or more batch files
//! (`message_1.json`, `message_2.json`, ...), each a partial view of the
//! conversation:
//!
//! ```json
//! {
//!   "title": "Weekend Plans",
//!   "messages": [
//!     {"sender_name": "Alice", "timestamp_ms": 1705315800000, "content": "Hi", "type": "Generic"}
//!   ]
//! }
//! ```
//!
//! Only the fields the analytics need are modelled; everything else
//! (`participants`, `photos`, `reactions`, ...) is ignored by serde.

use serde::{Deserialize, Serialize};

/// The `type` value carried by ordinary messages.
///
/// Shares, calls, unsubscribes and other system records use other values
/// and never reach the analytics.
pub const GENERIC_MESSAGE_TYPE: &str = "Generic";

/// One message record as it appears in a batch file.
///
/// Missing fields fall back to defaults so that a single odd record does not
/// reject the whole batch. A record without `type` is never substantive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub sender_name: String,

    #[serde(default)]
    pub timestamp_ms: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(rename = "type", default)]
    pub kind: String,
}

impl RawMessage {
    /// Creates a generic text message.
    pub fn generic(
        sender_name: impl Into<String>,
        content: impl Into<String>,
        timestamp_ms: i64,
    ) -> Self {
        Self {
            sender_name: sender_name.into(),
            timestamp_ms,
            content: Some(content.into()),
            kind: GENERIC_MESSAGE_TYPE.to_string(),
        }
    }

    /// Returns the content if this message carries text worth analyzing.
    ///
    /// A message is substantive when it has a `content` field and its type is
    /// [`GENERIC_MESSAGE_TYPE`].
    pub fn substantive_content(&self) -> Option<&str> {
        if self.kind != GENERIC_MESSAGE_TYPE {
            return None;
        }
        self.content.as_deref()
    }
}

/// One batch file of a conversation.
///
/// Both fields are optional in practice; a batch without them contributes
/// nothing rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchRecord {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub messages: Vec<RawMessage>,
}
