//! The normalized, classified unit of a conversation.
//!
//! The assembler turns every substantive raw message into an [`Event`]:
//! sender and content are encoding-repaired, the content is classified, and
//! the millisecond timestamp is kept as-is. Events are immutable once built;
//! the aggregator only ever reads them.
//!
//! # Examples
//!
//! ```
//! use chatstats::{Category, Event};
//!
//! let event = Event::classified("Alice", "Bo joined the video chat.", 1705315800000);
//! assert_eq!(event.category(), Category::Video);
//! assert!(!event.is_text());
//!
//! let event = Event::classified("Alice", "see you at noon", 1705315800000);
//! assert!(event.is_text());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::classify::{Category, classify};

/// A classified message with its epoch-millisecond timestamp.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `sender` | `String` | Repaired display name of the author |
/// | `content` | `String` | Repaired message text |
/// | `timestamp` | `i64` | Milliseconds since the Unix epoch |
/// | `category` | [`Category`] | Semantic type derived from the content |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub sender: String,
    pub content: String,
    pub timestamp: i64,
    pub category: Category,
}

impl Event {
    /// Creates an event with an explicit category.
    pub fn new(
        sender: impl Into<String>,
        content: impl Into<String>,
        timestamp: i64,
        category: Category,
    ) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            timestamp,
            category,
        }
    }

    /// Creates an event, deriving the category from `content`.
    pub fn classified(sender: impl Into<String>, content: impl Into<String>, timestamp: i64) -> Self {
        let content = content.into();
        let category = classify(&content);
        Self::new(sender, content, timestamp, category)
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the timestamp in epoch milliseconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Returns the category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns the timestamp as a UTC datetime, if it is in range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Returns `true` if this event feeds the word and time analytics.
    pub fn is_text(&self) -> bool {
        self.category == Category::Text
    }

    /// Number of whitespace-separated tokens in the content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }
}
