//! Command-line interface definition using clap.
//!
//! [`Args`] is the argument structure of the `chatstats` binary. It converts
//! into a [`PipelineConfig`] so the binary holds no configuration logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AnalysisConfig, DEFAULT_TOP_K, ExportConfig, LoaderConfig, PipelineConfig};
use crate::error::Result;

/// Analyze Messenger chat exports: message counts, word frequencies,
/// top words and time-of-day activity per participant.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats ~/facebook/messages
    chatstats ~/facebook/messages --title \"Weekend Plans\" -o stats/
    chatstats ~/facebook/messages --list
    chatstats ~/facebook/messages --timezone Europe/Berlin --top-k 20")]
pub struct Args {
    /// Archive root (the directory containing `inbox/`, or the inbox itself)
    pub archive: PathBuf,

    /// Only analyze the conversation with this title
    #[arg(short, long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Directory for the exported files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Number of entries in each top-words list
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,

    /// Timezone for the hour-of-day tables (IANA name)
    #[arg(long, value_name = "TZ", default_value = "America/Los_Angeles")]
    pub timezone: String,

    /// Do not repair the Latin-1 encoding of string fields
    #[arg(long)]
    pub no_fix_encoding: bool,

    /// Stop at the first unreadable batch file instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// List conversation titles and exit
    #[arg(long)]
    pub list: bool,
}

impl Args {
    /// Builds the pipeline configuration from the parsed arguments.
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let analysis = AnalysisConfig::new()
            .with_top_k(self.top_k)
            .with_timezone_name(&self.timezone)?;
        analysis.validate()?;

        let loader = LoaderConfig::new()
            .with_fix_encoding(!self.no_fix_encoding)
            .with_skip_invalid(!self.strict);

        Ok(PipelineConfig::new()
            .with_loader(loader)
            .with_analysis(analysis))
    }

    /// Builds the export configuration from the parsed arguments.
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig::new().with_output_dir(self.output.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("chatstats").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["messages"]);
        assert_eq!(args.archive, PathBuf::from("messages"));
        assert!(args.title.is_none());
        assert_eq!(args.output, PathBuf::from("."));
        assert_eq!(args.top_k, 10);
        assert!(!args.list);

        let config = args.pipeline_config().unwrap();
        assert!(config.loader.fix_encoding);
        assert!(config.loader.skip_invalid);
        assert_eq!(config.analysis.timezone, chrono_tz::America::Los_Angeles);
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&[
            "messages",
            "-t",
            "Weekend Plans",
            "-o",
            "out",
            "--top-k",
            "3",
            "--timezone",
            "UTC",
            "--no-fix-encoding",
            "--strict",
        ]);
        assert_eq!(args.title.as_deref(), Some("Weekend Plans"));
        let config = args.pipeline_config().unwrap();
        assert_eq!(config.analysis.top_k, 3);
        assert_eq!(config.analysis.timezone, chrono_tz::Tz::UTC);
        assert!(!config.loader.fix_encoding);
        assert!(!config.loader.skip_invalid);
        assert_eq!(args.export_config().output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_bad_timezone() {
        let args = parse(&["messages", "--timezone", "Moon/Base"]);
        assert!(args.pipeline_config().is_err());
    }

    #[test]
    fn test_zero_top_k() {
        let args = parse(&["messages", "--top-k", "0"]);
        assert!(args.pipeline_config().is_err());
    }

    #[test]
    fn test_missing_archive_is_error() {
        assert!(Args::try_parse_from(["chatstats"]).is_err());
    }
}
