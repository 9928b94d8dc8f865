//! Exporters for conversation statistics.
//!
//! [`export_conversation`] writes one set of files per conversation into an
//! output directory. With `{chat}` the conversation stem and `{name}` the
//! participant stem (see [`conversation_stem`], [`participant_stem`]):
//!
//! | File | Shape |
//! |------|-------|
//! | `{chat}_messages_sent.csv` | singular, participant → message count |
//! | `{chat}_average_message_length.csv` | singular, participant → average tokens |
//! | `{chat}_hourly_counts.csv` | hourly, raw counts |
//! | `{chat}_hourly_percentage.csv` | hourly, share of each bucket |
//! | `{chat}--{name}_word_count.csv` | singular, word → count |
//! | `{chat}--{name}_top_freq_words.csv` | singular, top words |
//! | `{chat}--{name}_messages.txt` | message bodies, space separated |
//!
//! A conversation with no participants still gets its four header-only
//! conversation tables and no per-participant files.
//!
//! Titles are not unique in a Messenger archive. When several conversations
//! share one output directory, [`Exporter`] hands out a distinct `{chat}` stem
//! per conversation: the title stem first, then the title stem suffixed with
//! the conversation directory name, then a numeric suffix.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatstats::core::models::ConversationStats;
//! use chatstats::core::output::export_conversation;
//!
//! # fn main() -> chatstats::Result<()> {
//! let stats = ConversationStats::default();
//! let summary = export_conversation(&stats, "out".as_ref())?;
//! println!("wrote {} files", summary.files.len());
//! # Ok(())
//! # }
//! ```

mod csv_writer;
mod text_writer;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

pub use csv_writer::{
    Cells, HourlyRows, format_float, to_hourly_csv, to_singular_csv, write_hourly_csv,
    write_singular_csv,
};
pub use text_writer::{to_message_text, write_message_text};

use crate::config::ExportConfig;
use crate::core::models::{ConversationStats, WordCount};
use crate::error::Result;

/// Stem used when a conversation has no title.
pub const UNTITLED_STEM: &str = "untitled";

/// Paths written by one export.
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Conversation stem the file names start with.
    pub stem: String,
    pub files: Vec<PathBuf>,
}

impl ExportSummary {
    fn push(&mut self, path: PathBuf) {
        debug!(path = %path.display(), "wrote");
        self.files.push(path);
    }
}

fn join_words(text: &str, separator: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(separator)
        .replace(['/', '\\'], "_")
}

/// File stem for a conversation: whitespace runs become `-`.
///
/// ```rust
/// use chatstats::core::output::conversation_stem;
///
/// assert_eq!(conversation_stem("Weekend  Plans 2024"), "Weekend-Plans-2024");
/// assert_eq!(conversation_stem(""), "untitled");
/// ```
pub fn conversation_stem(title: &str) -> String {
    let stem = join_words(title, "-");
    if stem.is_empty() {
        UNTITLED_STEM.to_string()
    } else {
        stem
    }
}

/// File stem for a participant: whitespace runs become `_`.
pub fn participant_stem(name: &str) -> String {
    join_words(name, "_")
}

fn word_cells(table: &WordCount) -> Cells {
    table
        .iter()
        .map(|(word, count)| (word.clone(), count.to_string()))
        .collect()
}

/// Writes every table and text file for `stats` into `out_dir`.
///
/// The directory is created if missing. File names start with the
/// conversation stem of the title; use an [`Exporter`] when several
/// conversations go into the same directory.
pub fn export_conversation(stats: &ConversationStats, out_dir: &Path) -> Result<ExportSummary> {
    export_with_stem(stats, out_dir, &conversation_stem(&stats.title))
}

fn export_with_stem(stats: &ConversationStats, out_dir: &Path, chat: &str) -> Result<ExportSummary> {
    fs::create_dir_all(out_dir)?;

    let mut summary = ExportSummary {
        stem: chat.to_string(),
        files: Vec::new(),
    };

    let counts: Cells = stats
        .participants
        .iter()
        .map(|p| (p.name.clone(), p.message_count.to_string()))
        .collect();
    let path = out_dir.join(format!("{chat}_messages_sent.csv"));
    write_singular_csv(&path, &stats.title, &counts)?;
    summary.push(path);

    let averages: Cells = stats
        .participants
        .iter()
        .map(|p| (p.name.clone(), format_float(p.average_message_length)))
        .collect();
    let path = out_dir.join(format!("{chat}_average_message_length.csv"));
    write_singular_csv(&path, &stats.title, &averages)?;
    summary.push(path);

    let hourly: HourlyRows = stats
        .participants
        .iter()
        .map(|p| (p.name.clone(), p.hourly_counts.map(|c| c.to_string())))
        .collect();
    let path = out_dir.join(format!("{chat}_hourly_counts.csv"));
    write_hourly_csv(&path, &hourly)?;
    summary.push(path);

    let shares: HourlyRows = stats
        .participants
        .iter()
        .map(|p| (p.name.clone(), p.hourly_percentage.map(format_float)))
        .collect();
    let path = out_dir.join(format!("{chat}_hourly_percentage.csv"));
    write_hourly_csv(&path, &shares)?;
    summary.push(path);

    for participant in &stats.participants {
        let prefix = format!("{chat}--{}", participant_stem(&participant.name));

        let path = out_dir.join(format!("{prefix}_top_freq_words.csv"));
        write_singular_csv(&path, &participant.name, &word_cells(&participant.top_words))?;
        summary.push(path);

        let path = out_dir.join(format!("{prefix}_word_count.csv"));
        write_singular_csv(
            &path,
            &participant.name,
            &word_cells(&participant.word_frequency),
        )?;
        summary.push(path);

        let path = out_dir.join(format!("{prefix}_messages.txt"));
        write_message_text(&path, &participant.messages)?;
        summary.push(path);
    }

    Ok(summary)
}

/// Exports many conversations into one directory without name clashes.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use chatstats::config::ExportConfig;
/// use chatstats::core::models::ConversationStats;
/// use chatstats::core::output::Exporter;
///
/// # fn main() -> chatstats::Result<()> {
/// let mut exporter = Exporter::new(ExportConfig::new().with_output_dir("out"));
/// let stats = ConversationStats::default();
/// let first = exporter.export(&stats, Some(Path::new("inbox/chat_1")))?;
/// let second = exporter.export(&stats, Some(Path::new("inbox/chat_2")))?;
/// assert_eq!(first.stem, "untitled");
/// assert_eq!(second.stem, "untitled_chat_2");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct Exporter {
    config: ExportConfig,
    used_stems: HashSet<String>,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            used_stems: HashSet::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Reserves a conversation stem not yet used by this exporter.
    ///
    /// `source` is the conversation directory; its name disambiguates
    /// repeated titles.
    pub fn claim_stem(&mut self, title: &str, source: Option<&Path>) -> String {
        let base = conversation_stem(title);
        let by_dir = source
            .and_then(Path::file_name)
            .map(|name| format!("{base}_{}", participant_stem(&name.to_string_lossy())));

        let stem = std::iter::once(base.clone())
            .chain(by_dir)
            .chain((2..).map(|n| format!("{base}_{n}")))
            .find(|stem| !self.used_stems.contains(stem))
            .unwrap_or_else(|| base.clone());

        if stem != base {
            warn!(title, %stem, "conversation title already exported, using a distinct file stem");
        }
        self.used_stems.insert(stem.clone());
        stem
    }

    /// Writes the files for one conversation under a freshly claimed stem.
    pub fn export(&mut self, stats: &ConversationStats, source: Option<&Path>) -> Result<ExportSummary> {
        let stem = self.claim_stem(&stats.title, source);
        export_with_stem(stats, &self.config.output_dir, &stem)
    }
}
