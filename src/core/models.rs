//! Core data models: the merged archive and the derived statistics.

use serde::{Deserialize, Serialize};

use crate::core::hours::HOURS_PER_DAY;
use crate::parsing::RawMessage;

/// Ordered word → count table, most frequent first.
pub type WordCount = Vec<(String, u64)>;

/// Per-hour message tally, indexed by local hour 0..23.
pub type HourlyCounts = [u64; HOURS_PER_DAY];

/// Per-hour share of a bucket's cross-sender total, in percent.
pub type HourlyPercentage = [f64; HOURS_PER_DAY];

/// All batch records of one conversation merged together.
///
/// Messages are concatenated in batch order and are *not* sorted; the
/// assembler establishes chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatArchive {
    pub title: String,
    pub messages: Vec<RawMessage>,
}

impl ChatArchive {
    pub fn new(title: impl Into<String>, messages: Vec<RawMessage>) -> Self {
        Self {
            title: title.into(),
            messages,
        }
    }

    /// Returns `true` if no batch contributed any message.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Everything computed for one participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantStats {
    pub name: String,
    pub message_count: usize,
    /// Message bodies in chronological order.
    pub messages: Vec<String>,
    pub word_frequency: WordCount,
    /// Mean tokens per message, rounded to 2 decimal places.
    pub average_message_length: f64,
    pub top_words: WordCount,
    pub hourly_counts: HourlyCounts,
    pub hourly_percentage: HourlyPercentage,
}

/// Statistics for a whole conversation.
///
/// `participants` is in presentation order: descending message count, ties
/// in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationStats {
    pub title: String,
    pub participants: Vec<ParticipantStats>,
    /// Events that were not plain text (nickname changes, polls, ...).
    pub discarded: usize,
}

impl ConversationStats {
    /// Looks up a participant by exact name.
    pub fn participant(&self, name: &str) -> Option<&ParticipantStats> {
        self.participants.iter().find(|p| p.name == name)
    }

    /// Participant names in presentation order.
    pub fn participant_names(&self) -> Vec<&str> {
        self.participants.iter().map(|p| p.name.as_str()).collect()
    }

    /// Total number of text messages across participants.
    pub fn total_messages(&self) -> usize {
        self.participants.iter().map(|p| p.message_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
