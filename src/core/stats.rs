//! Per-participant statistics over an ordered event stream.
//!
//! Every derivation here is a pure function of `&[Event]` and can be used on
//! its own; [`analyze`] combines them into a [`ConversationStats`]. Only
//! [`Category::Text`](crate::Category::Text) events count. A sender appears
//! in the results only if they wrote at least one text message, so no
//! per-sender average ever divides by zero.
//!
//! All orderings are deterministic:
//!
//! | Result | Order |
//! |--------|-------|
//! | [`participants`], [`message_bodies`] | first appearance |
//! | [`message_counts`], [`analyze`] | count descending, ties by first appearance |
//! | word tables | count descending, ties by first use |
//!
//! # Example
//!
//! ```rust
//! use chatstats::Event;
//! use chatstats::config::AnalysisConfig;
//! use chatstats::core::stats::analyze;
//!
//! let events = vec![
//!     Event::classified("Alice", "hi there", 1_000),
//!     Event::classified("Alice", "hi", 2_000),
//!     Event::classified("Bob", "hello", 3_000),
//! ];
//! let stats = analyze(&events, "Chat", &AnalysisConfig::default());
//!
//! let alice = stats.participant("Alice").unwrap();
//! assert_eq!(alice.message_count, 2);
//! assert_eq!(alice.average_message_length, 1.5);
//! assert_eq!(alice.word_frequency[0], ("hi".to_string(), 2));
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::Event;
use crate::config::AnalysisConfig;
use crate::core::hours::{HOURS_PER_DAY, local_hour};
use crate::core::models::{
    ConversationStats, HourlyCounts, HourlyPercentage, ParticipantStats, WordCount,
};
use crate::core::stopwords::is_stop_word;

/// Sender → value pairs in a documented order.
pub type PerSender<T> = Vec<(String, T)>;

/// Substrings removed before splitting content into words.
///
/// Includes the Windows-1252 rendering of a right single quotation mark,
/// which shows up when a field escaped repair.
pub const STRIPPED_SEQUENCES: &[&str] = &[",", "â€™", "'"];

/// Text events of one sender, chronological.
struct SenderGroup<'a> {
    name: &'a str,
    events: Vec<&'a Event>,
}

impl SenderGroup<'_> {
    fn contents(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|e| e.content())
    }
}

/// Groups text events by sender in order of first appearance.
fn group_by_sender(events: &[Event]) -> Vec<SenderGroup<'_>> {
    let (groups, _) = events.iter().filter(|e| e.is_text()).fold(
        (Vec::<SenderGroup<'_>>::new(), HashMap::<&str, usize>::new()),
        |(mut groups, mut index), event| {
            match index.entry(event.sender()) {
                Entry::Occupied(slot) => groups[*slot.get()].events.push(event),
                Entry::Vacant(slot) => {
                    slot.insert(groups.len());
                    groups.push(SenderGroup {
                        name: event.sender(),
                        events: vec![event],
                    });
                }
            }
            (groups, index)
        },
    );
    groups
}

// ============================================================================
// Building blocks
// ============================================================================

/// Lower-cases `content`, strips [`STRIPPED_SEQUENCES`] and splits on whitespace.
///
/// Other punctuation stays attached: `"Hi, it's me."` → `["hi", "its", "me."]`.
pub fn tokenize(content: &str) -> Vec<String> {
    let cleaned = STRIPPED_SEQUENCES
        .iter()
        .fold(content.to_lowercase(), |text, seq| text.replace(seq, ""));
    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Tallies the words of `messages`, most frequent first.
///
/// Ties keep the order in which words were first seen.
pub fn count_words<'a>(messages: impl IntoIterator<Item = &'a str>) -> WordCount {
    let mut table: WordCount = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for word in messages.into_iter().flat_map(tokenize) {
        match index.entry(word) {
            Entry::Occupied(slot) => table[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                table.push((slot.key().clone(), 1));
                slot.insert(table.len() - 1);
            }
        }
    }

    // stable: equal counts stay in first-seen order
    table.sort_by(|a, b| b.1.cmp(&a.1));
    table
}

/// Rounds to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean whitespace-token count of `messages`, rounded to 2 decimals.
///
/// Returns `None` for an empty input.
pub fn mean_length<'a>(messages: impl IntoIterator<Item = &'a str>) -> Option<f64> {
    let (tokens, count) = messages
        .into_iter()
        .fold((0usize, 0usize), |(tokens, count), m| {
            (tokens + m.split_whitespace().count(), count + 1)
        });
    if count == 0 {
        return None;
    }
    Some(round2(tokens as f64 / count as f64))
}

/// Takes up to `k` entries of a sorted word table, skipping stop words.
///
/// # Example
///
/// ```rust
/// use chatstats::core::stats::top_words;
///
/// let table = vec![("the".to_string(), 9), ("pizza".to_string(), 4), ("and".to_string(), 3)];
/// assert_eq!(top_words(&table, 10), vec![("pizza".to_string(), 4)]);
/// ```
pub fn top_words(word_frequency: &WordCount, k: usize) -> WordCount {
    word_frequency
        .iter()
        .filter(|(word, _)| !is_stop_word(word))
        .take(k)
        .cloned()
        .collect()
}

/// Hour-of-day histogram of `events` in `tz`.
pub fn histogram<'a>(events: impl IntoIterator<Item = &'a Event>, tz: Tz) -> HourlyCounts {
    events
        .into_iter()
        .fold([0; HOURS_PER_DAY], |mut buckets, event| {
            match local_hour(event.timestamp(), tz) {
                Some(hour) => buckets[hour] += 1,
                None => warn!(timestamp = event.timestamp(), "timestamp out of range, not bucketed"),
            }
            buckets
        })
}

/// Cross-sender total of each hour bucket.
pub fn bucket_totals(counts: &[(String, HourlyCounts)]) -> HourlyCounts {
    counts.iter().fold([0; HOURS_PER_DAY], |mut totals, (_, buckets)| {
        for (total, count) in totals.iter_mut().zip(buckets) {
            *total += count;
        }
        totals
    })
}

// ============================================================================
// Derivations
// ============================================================================

/// Distinct senders of text events, in order of first appearance.
pub fn participants(events: &[Event]) -> Vec<String> {
    group_by_sender(events)
        .into_iter()
        .map(|g| g.name.to_string())
        .collect()
}

/// Text messages per sender, most active first.
pub fn message_counts(events: &[Event]) -> PerSender<usize> {
    let mut counts: PerSender<usize> = group_by_sender(events)
        .into_iter()
        .map(|g| (g.name.to_string(), g.events.len()))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Message bodies per sender, chronological.
pub fn message_bodies(events: &[Event]) -> PerSender<Vec<String>> {
    group_by_sender(events)
        .into_iter()
        .map(|g| {
            let bodies = g.contents().map(str::to_string).collect();
            (g.name.to_string(), bodies)
        })
        .collect()
}

/// Word frequency table per sender.
pub fn word_frequency(events: &[Event]) -> PerSender<WordCount> {
    group_by_sender(events)
        .into_iter()
        .map(|g| (g.name.to_string(), count_words(g.contents())))
        .collect()
}

/// Average tokens per message per sender.
pub fn average_message_length(events: &[Event]) -> PerSender<f64> {
    group_by_sender(events)
        .into_iter()
        .filter_map(|g| mean_length(g.contents()).map(|avg| (g.name.to_string(), avg)))
        .collect()
}

/// Hour-of-day histogram per sender.
pub fn hourly_counts(events: &[Event], tz: Tz) -> PerSender<HourlyCounts> {
    group_by_sender(events)
        .into_iter()
        .map(|g| (g.name.to_string(), histogram(g.events.iter().copied(), tz)))
        .collect()
}

/// Each sender's share of every hour bucket, in percent.
///
/// Buckets nobody posted in stay at `0.0` for everyone.
pub fn hourly_percentage(counts: &[(String, HourlyCounts)]) -> PerSender<HourlyPercentage> {
    let totals = bucket_totals(counts);
    counts
        .iter()
        .map(|(name, buckets)| {
            let mut shares = [0.0; HOURS_PER_DAY];
            for ((share, &count), &total) in shares.iter_mut().zip(buckets).zip(&totals) {
                if total > 0 {
                    *share = count as f64 / total as f64 * 100.0;
                }
            }
            (name.clone(), shares)
        })
        .collect()
}

/// Computes every statistic for one conversation.
pub fn analyze(events: &[Event], title: &str, config: &AnalysisConfig) -> ConversationStats {
    let groups = group_by_sender(events);

    let hourly: PerSender<HourlyCounts> = groups
        .iter()
        .map(|g| (g.name.to_string(), histogram(g.events.iter().copied(), config.timezone)))
        .collect();
    let shares = hourly_percentage(&hourly);

    let mut participants: Vec<ParticipantStats> = groups
        .iter()
        .zip(hourly)
        .zip(shares)
        .map(|((group, (_, hourly_counts)), (_, hourly_percentage))| {
            let word_frequency = count_words(group.contents());
            ParticipantStats {
                name: group.name.to_string(),
                message_count: group.events.len(),
                messages: group.contents().map(str::to_string).collect(),
                top_words: top_words(&word_frequency, config.top_k),
                word_frequency,
                average_message_length: mean_length(group.contents()).unwrap_or_default(),
                hourly_counts,
                hourly_percentage,
            }
        })
        .collect();
    participants.sort_by(|a, b| b.message_count.cmp(&a.message_count));

    let discarded = events.iter().filter(|e| !e.is_text()).count();

    debug!(
        title,
        participants = participants.len(),
        discarded,
        "analyzed conversation"
    );

    ConversationStats {
        title: title.to_string(),
        participants,
        discarded,
    }
}
