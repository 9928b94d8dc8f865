//! One conversation from disk to statistics and export files.
//!
//! Loader → assembler → aggregator → exporter, carrying the diagnostics of
//! each stage so callers can report skipped records and unrepaired fields
//! without failing the run.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::PipelineConfig;
use crate::core::models::ConversationStats;
use crate::core::output::{ExportSummary, export_conversation};
use crate::core::stats::analyze;
use crate::core::timeline::assemble;
use crate::error::{ChatstatsError, Result};
use crate::loader::{ArchiveLoader, LoadReport, LoadedArchive};

/// Statistics for one conversation plus everything that went wrong on the way.
#[derive(Debug)]
pub struct ConversationReport {
    /// Directory the conversation was loaded from, if any.
    pub source: Option<PathBuf>,
    pub stats: ConversationStats,
    pub load: LoadReport,
    /// Events in the assembled timeline.
    pub events: usize,
    /// Raw messages without content or of a non-generic type.
    pub skipped_messages: usize,
    /// Sender and content fields kept unrepaired.
    pub encoding_errors: Vec<ChatstatsError>,
}

impl ConversationReport {
    /// Total number of flagged problems (skipped batches and unrepaired fields).
    pub fn warning_count(&self) -> usize {
        self.load.failures.len() + self.load.encoding_errors.len() + self.encoding_errors.len()
    }
}

/// Runs assembly and aggregation on an already loaded archive.
pub fn analyze_loaded(loaded: LoadedArchive, config: &PipelineConfig) -> ConversationReport {
    let LoadedArchive { archive, report } = loaded;
    let timeline = assemble(&archive, &config.loader);
    let stats = analyze(&timeline.events, &archive.title, &config.analysis);

    ConversationReport {
        source: None,
        stats,
        load: report,
        events: timeline.events.len(),
        skipped_messages: timeline.skipped,
        encoding_errors: timeline.encoding_errors,
    }
}

/// Loads and analyzes the conversation stored in `dir`.
pub fn analyze_conversation(dir: &Path, config: &PipelineConfig) -> Result<ConversationReport> {
    config.analysis.validate()?;
    let loaded = ArchiveLoader::with_config(config.loader.clone()).load_dir(dir)?;
    let mut report = analyze_loaded(loaded, config);
    report.source = Some(dir.to_path_buf());
    log_report(&report);
    Ok(report)
}

/// Finds the conversation titled `title` below `root` and analyzes it.
pub fn analyze_by_title(
    root: &Path,
    title: &str,
    config: &PipelineConfig,
) -> Result<ConversationReport> {
    config.analysis.validate()?;
    let loader = ArchiveLoader::with_config(config.loader.clone());
    let (dir, loaded) = loader.find_conversation(root, title)?;
    let mut report = analyze_loaded(loaded, config);
    report.source = Some(dir);
    log_report(&report);
    Ok(report)
}

/// Analyzes `dir` and writes the export files into `out_dir`.
pub fn run_conversation(
    dir: &Path,
    out_dir: &Path,
    config: &PipelineConfig,
) -> Result<(ConversationReport, ExportSummary)> {
    let report = analyze_conversation(dir, config)?;
    let summary = export_conversation(&report.stats, out_dir)?;
    Ok((report, summary))
}

fn log_report(report: &ConversationReport) {
    let source = report
        .source
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    info!(
        title = %report.stats.title,
        %source,
        participants = report.stats.participants.len(),
        events = report.events,
        "conversation analyzed"
    );
    if report.warning_count() > 0 {
        warn!(
            title = %report.stats.title,
            skipped_batches = report.load.failures.len(),
            unrepaired_fields = report.load.encoding_errors.len() + report.encoding_errors.len(),
            "conversation analyzed with warnings"
        );
    }
}
