//! # Chatstats
//!
//! A Rust library for turning Messenger chat-history exports into
//! per-participant statistics.
//!
//! ## Overview
//!
//! A Messenger export stores each conversation as a directory of JSON batch
//! files whose strings are mis-encoded (UTF-8 bytes written as Latin-1
//! characters). Chatstats:
//!
//! 1. **Loads** every batch of a conversation and merges them
//! 2. **Repairs** the encoding of titles, sender names and contents
//! 3. **Assembles** a chronologically sorted, classified event stream
//! 4. **Aggregates** per-participant statistics: message counts, average
//!    message length, word frequencies, top words and hour-of-day histograms
//! 5. **Exports** the results as CSV tables and plain-text message dumps
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let config = PipelineConfig::default();
//!     let report = analyze_conversation("inbox/weekendplans_a1b2c3".as_ref(), &config)?;
//!
//!     for p in &report.stats.participants {
//!         println!("{}: {} messages, {:.2} words each", p.name, p.message_count, p.average_message_length);
//!     }
//!
//!     export_conversation(&report.stats, "out".as_ref())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`loader`] — [`ArchiveLoader`](loader::ArchiveLoader), conversation discovery
//! - [`parsing`] — raw batch structures and the encoding repair
//! - [`core`] — classification, timeline assembly, statistics, exporters
//! - [`pipeline`] — one conversation end to end
//! - [`config`] — [`LoaderConfig`](config::LoaderConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`error`] — [`ChatstatsError`], [`Result`]
//! - [`cli`] — command-line arguments (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod message;
pub mod parsing;
pub mod pipeline;

// Re-export the main types at the crate root for convenience
pub use crate::core::classify::Category;
pub use error::{ChatstatsError, Result};
pub use message::Event;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Category, Event};

    pub use crate::error::{ChatstatsError, Result};

    pub use crate::config::{AnalysisConfig, ExportConfig, LoaderConfig, PipelineConfig};

    pub use crate::core::models::{ChatArchive, ConversationStats, ParticipantStats, WordCount};

    pub use crate::core::{analyze, assemble, classify};

    pub use crate::core::output::{ExportSummary, Exporter, export_conversation};

    pub use crate::loader::{ArchiveLoader, LoadedArchive, discover_conversations};

    pub use crate::pipeline::{
        ConversationReport, analyze_by_title, analyze_conversation, run_conversation,
    };
}
