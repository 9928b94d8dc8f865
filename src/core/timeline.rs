//! Chronological assembly: archive → ordered, classified events.
//!
//! Batches can arrive in any order and Messenger writes each batch newest
//! first, so the assembler always re-sorts. The sort is stable: events with
//! the same millisecond keep their input order.

use tracing::debug;

use crate::Event;
use crate::config::LoaderConfig;
use crate::core::classify::classify;
use crate::core::models::ChatArchive;
use crate::error::ChatstatsError;
use crate::parsing::repair_or_keep;

/// The assembled event stream plus what was dropped or flagged on the way.
#[derive(Debug, Default)]
pub struct Timeline {
    /// Events sorted ascending by timestamp.
    pub events: Vec<Event>,
    /// Raw messages skipped for lacking content or a `Generic` type.
    pub skipped: usize,
    /// Fields that could not be repaired and were kept as-is.
    pub encoding_errors: Vec<ChatstatsError>,
}

impl Timeline {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Builds the ordered event stream for one conversation.
///
/// Only substantive messages become events. Sender and content are repaired
/// independently, so a bad sender name never spoils the content and vice
/// versa.
///
/// # Example
///
/// ```rust
/// use chatstats::config::LoaderConfig;
/// use chatstats::core::models::ChatArchive;
/// use chatstats::core::timeline::assemble;
/// use chatstats::parsing::RawMessage;
///
/// let archive = ChatArchive::new("Chat", vec![
///     RawMessage::generic("Alice", "second", 200),
///     RawMessage::generic("Bob", "first", 100),
/// ]);
/// let timeline = assemble(&archive, &LoaderConfig::default());
/// assert_eq!(timeline.events[0].content, "first");
/// ```
pub fn assemble(archive: &ChatArchive, config: &LoaderConfig) -> Timeline {
    let mut timeline = Timeline::default();

    for raw in &archive.messages {
        let Some(content) = raw.substantive_content() else {
            timeline.skipped += 1;
            continue;
        };

        let (sender, content) = if config.fix_encoding {
            let sender = repair_or_keep(&raw.sender_name, "sender_name");
            let content = repair_or_keep(content, "content");
            timeline
                .encoding_errors
                .extend(sender.failure.into_iter().chain(content.failure));
            (sender.text, content.text)
        } else {
            (raw.sender_name.clone(), content.to_string())
        };

        let category = classify(&content);
        timeline
            .events
            .push(Event::new(sender, content, raw.timestamp_ms, category));
    }

    timeline.events.sort_by_key(|event| event.timestamp);

    debug!(
        title = %archive.title,
        events = timeline.events.len(),
        skipped = timeline.skipped,
        encoding_errors = timeline.encoding_errors.len(),
        "assembled timeline"
    );

    timeline
}
