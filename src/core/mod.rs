//! Core processing logic for chatstats.
//!
//! This module contains:
//! - [`classify`] - Message categories and the phrase table
//! - [`timeline`] - Chronological assembly of events
//! - [`stats`] - Per-participant statistics
//! - [`hours`] - Hour labels and timezone conversion
//! - [`stopwords`] - Words excluded from top-word lists
//! - [`models`] - Archive and statistics data structures
//! - [`output`] - CSV and text exporters
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::config::{AnalysisConfig, LoaderConfig};
//! use chatstats::core::{ChatArchive, analyze, assemble};
//! use chatstats::parsing::RawMessage;
//!
//! let archive = ChatArchive::new("Chat", vec![RawMessage::generic("Alice", "Hello!", 1)]);
//! let timeline = assemble(&archive, &LoaderConfig::default());
//! let stats = analyze(&timeline.events, &archive.title, &AnalysisConfig::default());
//! assert_eq!(stats.participant_names(), vec!["Alice"]);
//! ```

pub mod classify;
pub mod hours;
pub mod models;
pub mod output;
pub mod stats;
pub mod stopwords;
pub mod timeline;

// Re-export main types for convenience
pub use classify::{Category, classify};
pub use models::{ChatArchive, ConversationStats, ParticipantStats, WordCount};
pub use output::{ExportSummary, Exporter, export_conversation};
pub use stats::analyze;
pub use timeline::{Timeline, assemble};

// Re-export Event from the crate root
pub use crate::Event;
