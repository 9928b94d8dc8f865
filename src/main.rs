//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use chatstats::cli::Args;
use chatstats::config::PipelineConfig;
use chatstats::core::output::Exporter;
use chatstats::loader::{ArchiveLoader, discover_conversations};
use chatstats::pipeline::{ConversationReport, analyze_by_title, analyze_conversation};
use chatstats::ChatstatsError;

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatstatsError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let config = args.pipeline_config()?;

    if args.list {
        return list_conversations(&args.archive, &config);
    }

    println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Archive:  {}", args.archive.display());
    println!("💾 Output:   {}", args.output.display());
    println!("🕐 Timezone: {}", config.analysis.timezone.name());
    if let Some(ref title) = args.title {
        println!("💬 Title:    {}", title);
    }
    println!();

    let reports = match args.title {
        Some(ref title) => vec![analyze_by_title(&args.archive, title, &config)?],
        None => analyze_all(&args.archive, &config)?,
    };

    let mut exporter = Exporter::new(args.export_config());
    let mut files = 0;
    for report in &reports {
        print_report(report);
        let summary = exporter.export(&report.stats, report.source.as_deref())?;
        files += summary.files.len();
    }

    println!();
    println!(
        "✅ Done! {} conversation(s), {} file(s) written to {} ({:.2}s)",
        reports.len(),
        files,
        args.output.display(),
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Analyzes every conversation, skipping ones whose directory cannot be read
/// unless the loader is strict.
fn analyze_all(root: &Path, config: &PipelineConfig) -> Result<Vec<ConversationReport>, ChatstatsError> {
    let dirs: Vec<PathBuf> = discover_conversations(root)?;
    println!("⏳ Analyzing {} conversation(s)...", dirs.len());

    let mut reports = Vec::with_capacity(dirs.len());
    for dir in dirs {
        match analyze_conversation(&dir, config) {
            Ok(report) => reports.push(report),
            Err(e) if e.is_io() && config.loader.skip_invalid => {
                warn!(dir = %dir.display(), error = %e, "skipping conversation");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(reports)
}

fn list_conversations(root: &Path, config: &PipelineConfig) -> Result<(), ChatstatsError> {
    let loader = ArchiveLoader::with_config(config.loader.clone());
    for dir in discover_conversations(root)? {
        let loaded = loader.load_dir(&dir)?;
        println!(
            "{}\t{} messages\t{}",
            loaded.archive.title,
            loaded.archive.messages.len(),
            dir.display()
        );
    }
    Ok(())
}

fn print_report(report: &ConversationReport) {
    let stats = &report.stats;
    println!(
        "💬 {}: {} participant(s), {} text message(s)",
        if stats.title.is_empty() { "(untitled)" } else { &stats.title },
        stats.participants.len(),
        stats.total_messages()
    );
    for p in &stats.participants {
        println!(
            "   {:<24} {:>6} msgs  {:>6.2} words/msg",
            p.name, p.message_count, p.average_message_length
        );
    }
    if report.warning_count() > 0 {
        println!("   ⚠️  {} warning(s), see log output", report.warning_count());
    }
}
