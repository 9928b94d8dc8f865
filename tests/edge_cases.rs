//! Edge case tests for chatstats
//!
//! These tests cover boundary conditions of the loader, the encoding repair
//! and the aggregation that unit tests only touch one module at a time.

use chatstats::core::stats::{analyze, average_message_length, message_counts, tokenize};
use chatstats::core::stopwords::is_stop_word;
use chatstats::parsing::{RawMessage, normalize_text};
use chatstats::prelude::*;

fn generic(sender: &str, content: &str, ts: i64) -> RawMessage {
    RawMessage::generic(sender, content, ts)
}

fn events_of(messages: Vec<RawMessage>) -> Vec<Event> {
    assemble(&ChatArchive::new("Edge", messages), &LoaderConfig::default()).events
}

// =========================================================================
// Encoding repair
// =========================================================================

#[test]
fn test_correctly_encoded_field_is_kept_and_flagged() {
    // Already-correct UTF-8 outside ASCII does not survive the round trip.
    let timeline = assemble(
        &ChatArchive::new("Edge", vec![generic("Zoë", "I ❤ pizza", 1)]),
        &LoaderConfig::default(),
    );
    assert_eq!(timeline.events[0].sender, "Zoë");
    assert_eq!(timeline.events[0].content, "I ❤ pizza");
    assert_eq!(timeline.encoding_errors.len(), 2);
    assert!(timeline.encoding_errors.iter().all(ChatstatsError::is_encoding));
}

#[test]
fn test_bad_sender_does_not_spoil_content() {
    let timeline = assemble(
        &ChatArchive::new("Edge", vec![generic("Ren 🙂", "cafÃ©", 1)]),
        &LoaderConfig::default(),
    );
    assert_eq!(timeline.events[0].sender, "Ren 🙂");
    assert_eq!(timeline.events[0].content, "café");
    assert_eq!(timeline.encoding_errors.len(), 1);
}

#[test]
fn test_repair_disabled() {
    let timeline = assemble(
        &ChatArchive::new("Edge", vec![generic("ZoÃ«", "cafÃ©", 1)]),
        &LoaderConfig::new().with_fix_encoding(false),
    );
    assert_eq!(timeline.events[0].sender, "ZoÃ«");
    assert!(timeline.encoding_errors.is_empty());
}

#[test]
fn test_normalize_multibyte_sequences() {
    assert_eq!(normalize_text("donâ\u{80}\u{99}t").unwrap(), "don’t");
    assert_eq!(normalize_text("ð\u{9f}\u{98}\u{80}").unwrap(), "😀");
    assert_eq!(normalize_text("").unwrap(), "");
    // truncated sequence
    assert!(normalize_text("Ã").is_err());
}

#[test]
fn test_unrepaired_apostrophe_is_stripped_from_words() {
    // The Windows-1252 rendering of ’ can survive when repair fails.
    assert_eq!(tokenize("Donâ€™t stop"), vec!["dont", "stop"]);
    assert_eq!(tokenize("it's, fine"), vec!["its", "fine"]);
    assert_eq!(tokenize("end. Start!"), vec!["end.", "start!"]);
}

// =========================================================================
// Loader
// =========================================================================

#[test]
fn test_messages_without_content_or_type() {
    let loaded = ArchiveLoader::new()
        .load_batches([r#"{"messages": [
            {"sender_name": "A", "timestamp_ms": 1, "content": "no type"},
            {"sender_name": "A", "timestamp_ms": 2, "type": "Generic"},
            {"sender_name": "A", "timestamp_ms": 3, "content": "", "type": "Generic"},
            {"sender_name": "A", "timestamp_ms": 4, "content": "call", "type": "Call"}
        ]}"#])
        .unwrap();
    let timeline = assemble(&loaded.archive, &LoaderConfig::default());

    // Empty content is still content.
    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline.events[0].content, "");
    assert_eq!(timeline.skipped, 3);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let loaded = ArchiveLoader::new()
        .load_batches([r#"{
            "participants": [{"name": "A"}],
            "thread_path": "inbox/x",
            "is_still_participant": true,
            "magic_words": [],
            "title": "T",
            "messages": [{"sender_name": "A", "timestamp_ms": 1, "content": "hi", "type": "Generic",
                          "reactions": [{"reaction": "ð\u009f\u0098\u0086", "actor": "B"}], "is_unsent": false}]
        }"#])
        .unwrap();
    assert_eq!(loaded.archive.messages.len(), 1);
    assert!(loaded.report.is_clean());
}

#[test]
fn test_wrong_field_type_rejects_batch() {
    let loaded = ArchiveLoader::new()
        .load_batches([r#"{"messages": [{"sender_name": "A", "timestamp_ms": "soon"}]}"#])
        .unwrap();
    assert!(loaded.archive.is_empty());
    assert!(loaded.report.failures[0].is_malformed());
}

#[test]
fn test_timestamp_ties_keep_input_order() {
    let events = events_of(vec![
        generic("A", "first", 5),
        generic("B", "second", 5),
        generic("C", "third", 5),
        generic("D", "zeroth", 1),
    ]);
    let contents: Vec<_> = events.iter().map(|e| e.content.as_str()).collect();
    assert_eq!(contents, vec!["zeroth", "first", "second", "third"]);
}

// =========================================================================
// Classification inside aggregation
// =========================================================================

#[test]
fn test_system_messages_never_count() {
    let events = events_of(vec![
        generic("Ann", "Ann created a poll: Dinner?", 1),
        generic("Ann", "Ann changed the group photo.", 2),
        generic("Ann", "Ann joined the video chat.", 3),
        generic("Ben", "Ben set your nickname to Benny.", 4),
        generic("Ben", "hello", 5),
    ]);
    let stats = analyze(&events, "Edge", &AnalysisConfig::default());

    assert_eq!(stats.participant_names(), vec!["Ben"]);
    assert_eq!(stats.discarded, 4);
    assert_eq!(message_counts(&events), vec![("Ben".to_string(), 1)]);
    assert!(average_message_length(&events).iter().all(|(name, _)| name == "Ben"));
}

#[test]
fn test_phrase_match_is_case_sensitive() {
    let events = events_of(vec![generic("Ann", "Ann CREATED A POLL: lol", 1)]);
    assert_eq!(events[0].category, Category::Text);
}

// =========================================================================
// Stop words and top words
// =========================================================================

#[test]
fn test_stop_words_case_insensitive() {
    assert!(is_stop_word("the"));
    assert!(is_stop_word("The"));
    assert!(!is_stop_word("pizza"));
    assert!(!is_stop_word(""));
}

#[test]
fn test_only_stop_words_gives_empty_top_words() {
    let events = events_of(vec![generic("Ann", "the and of the you", 1)]);
    let stats = analyze(&events, "Edge", &AnalysisConfig::default());
    let ann = stats.participant("Ann").unwrap();
    assert!(ann.top_words.is_empty());
    assert_eq!(ann.word_frequency[0], ("the".to_string(), 2));
}

#[test]
fn test_whitespace_only_message_has_zero_length() {
    let events = events_of(vec![generic("Ann", "   ", 1), generic("Ann", "two words", 2)]);
    let stats = analyze(&events, "Edge", &AnalysisConfig::default());
    assert_eq!(stats.participant("Ann").unwrap().average_message_length, 1.0);
}

#[test]
fn test_average_is_rounded() {
    let events = events_of(vec![
        generic("Ann", "a", 1),
        generic("Ann", "a b", 2),
        generic("Ann", "a b", 3),
    ]);
    assert_eq!(average_message_length(&events), vec![("Ann".to_string(), 1.67)]);
}
