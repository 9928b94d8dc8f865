//! Archive loading: batch records → [`ChatArchive`].
//!
//! A Messenger export lays conversations out as
//!
//! ```text
//! messages/
//!   inbox/
//!     weekendplans_a1b2c3/
//!       message_1.json
//!       message_2.json
//!       photos/...
//! ```
//!
//! [`ArchiveLoader`] merges the batch files of one conversation directory.
//! [`discover_conversations`] lists the conversation directories below an
//! archive root.
//!
//! # Example
//!
//! ```rust
//! use chatstats::loader::ArchiveLoader;
//!
//! let loader = ArchiveLoader::new();
//! let loaded = loader.load_batches([
//!     r#"{"title": "Chat", "messages": [{"sender_name": "A", "content": "hi", "type": "Generic", "timestamp_ms": 2}]}"#,
//!     r#"{"title": "Chat", "messages": [{"sender_name": "B", "content": "yo", "type": "Generic", "timestamp_ms": 1}]}"#,
//! ])?;
//! assert_eq!(loaded.archive.title, "Chat");
//! assert_eq!(loaded.archive.messages.len(), 2);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::LoaderConfig;
use crate::core::models::ChatArchive;
use crate::error::{ChatstatsError, Result};
use crate::parsing::{BatchRecord, repair_or_keep};

/// Subdirectory of an archive root that holds conversations, when present.
pub const INBOX_DIR: &str = "inbox";

/// What happened while loading one conversation.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Batch records successfully parsed.
    pub batches_read: usize,
    /// Batch records that could not be read or parsed, and were skipped.
    pub failures: Vec<ChatstatsError>,
    /// Title fields kept unrepaired.
    pub encoding_errors: Vec<ChatstatsError>,
}

impl LoadReport {
    /// Returns `true` if nothing was skipped or flagged.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.encoding_errors.is_empty()
    }
}

/// A merged archive with its load report.
#[derive(Debug, Default)]
pub struct LoadedArchive {
    pub archive: ChatArchive,
    pub report: LoadReport,
}

/// Loader for Messenger conversation directories.
#[derive(Debug, Clone, Default)]
pub struct ArchiveLoader {
    config: LoaderConfig,
}

impl ArchiveLoader {
    /// Creates a loader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    fn parse_batch(content: &[u8], path: Option<&Path>) -> Result<BatchRecord> {
        serde_json::from_slice(content)
            .map_err(|e| ChatstatsError::malformed(e, path.map(Path::to_path_buf)))
    }

    /// Records a failed batch, or returns it as an error when not skipping.
    fn skip_or_fail(&self, report: &mut LoadReport, err: ChatstatsError) -> Result<()> {
        if !self.config.skip_invalid {
            return Err(err);
        }
        warn!(error = %err, "skipping batch record");
        report.failures.push(err);
        Ok(())
    }

    /// Merges parsed batches: last defined title wins, messages concatenate.
    fn merge(&self, batches: Vec<BatchRecord>, mut report: LoadReport) -> LoadedArchive {
        let mut title: Option<String> = None;
        let mut messages = Vec::new();

        for batch in batches {
            if batch.title.is_some() {
                title = batch.title;
            }
            messages.extend(batch.messages);
        }

        let title = match title {
            Some(raw) if self.config.fix_encoding => {
                let repaired = repair_or_keep(&raw, "title");
                report.encoding_errors.extend(repaired.failure);
                repaired.text
            }
            Some(raw) => raw,
            None => String::new(),
        };

        LoadedArchive {
            archive: ChatArchive::new(title, messages),
            report,
        }
    }

    /// Loads a conversation from in-memory batch records, in the given order.
    pub fn load_batches<'a, I>(&self, batches: I) -> Result<LoadedArchive>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut report = LoadReport::default();
        let mut parsed = Vec::new();

        for content in batches {
            match Self::parse_batch(content.as_bytes(), None) {
                Ok(batch) => parsed.push(batch),
                Err(err) => self.skip_or_fail(&mut report, err)?,
            }
        }

        report.batches_read = parsed.len();
        Ok(self.merge(parsed, report))
    }

    /// Loads every batch file directly inside `dir`.
    ///
    /// Files are read in file-name order; subdirectories (`photos/`,
    /// `files/`, ...) are ignored. A directory with no files yields an empty
    /// archive.
    pub fn load_dir(&self, dir: &Path) -> Result<LoadedArchive> {
        let mut report = LoadReport::default();
        let mut parsed = Vec::new();

        for path in batch_files(dir)? {
            let batch = fs::read(&path)
                .map_err(ChatstatsError::from)
                .and_then(|bytes| Self::parse_batch(&bytes, Some(&path)));
            match batch {
                Ok(batch) => {
                    debug!(path = %path.display(), messages = batch.messages.len(), "read batch");
                    parsed.push(batch);
                }
                Err(err) => self.skip_or_fail(&mut report, err)?,
            }
        }

        report.batches_read = parsed.len();
        Ok(self.merge(parsed, report))
    }

    /// Finds the conversation below `root` whose title equals `title`.
    ///
    /// Conversations are tried in directory order; the first match wins.
    /// Unreadable conversation directories are skipped with a warning unless
    /// the loader is strict.
    pub fn find_conversation(&self, root: &Path, title: &str) -> Result<(PathBuf, LoadedArchive)> {
        self.find_among(discover_conversations(root)?, title)
    }

    fn find_among(
        &self,
        dirs: impl IntoIterator<Item = PathBuf>,
        title: &str,
    ) -> Result<(PathBuf, LoadedArchive)> {
        for dir in dirs {
            let loaded = match self.load_dir(&dir) {
                Ok(loaded) => loaded,
                Err(err) if err.is_io() && self.config.skip_invalid => {
                    warn!(dir = %dir.display(), error = %err, "skipping conversation");
                    continue;
                }
                Err(err) => return Err(err),
            };
            if loaded.archive.title == title {
                return Ok((dir, loaded));
            }
        }
        Err(ChatstatsError::not_found(title))
    }
}

/// Regular files directly inside `dir`, sorted by file name.
fn batch_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Lists conversation directories below an archive root, sorted by name.
///
/// If `root` contains an `inbox/` directory, that is searched; otherwise
/// `root` itself is treated as the inbox.
pub fn discover_conversations(root: &Path) -> Result<Vec<PathBuf>> {
    let inbox = root.join(INBOX_DIR);
    let container = if inbox.is_dir() { inbox } else { root.to_path_buf() };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(&container)? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    debug!(container = %container.display(), conversations = dirs.len(), "discovered conversations");
    Ok(dirs)
}
