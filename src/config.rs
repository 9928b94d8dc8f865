//! Configuration types for loading and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`LoaderConfig`] - how batch files are read and repaired
//! - [`AnalysisConfig`] - top-word list size and reference timezone
//! - [`PipelineConfig`] - both of the above, for one conversation run
//! - [`ExportConfig`] - where exported files go
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{AnalysisConfig, LoaderConfig, PipelineConfig};
//!
//! let config = PipelineConfig::new()
//!     .with_loader(LoaderConfig::new().with_skip_invalid(false))
//!     .with_analysis(AnalysisConfig::new().with_top_k(5));
//!
//! assert_eq!(config.analysis.top_k, 5);
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{ChatstatsError, Result};

/// Default number of entries in a top-word list.
pub const DEFAULT_TOP_K: usize = 10;

/// Default reference timezone for hour-of-day histograms.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

/// Configuration for reading a conversation directory.
///
/// # Example
///
/// ```rust
/// use chatstats::config::LoaderConfig;
///
/// let config = LoaderConfig::new().with_fix_encoding(false);
/// assert!(!config.fix_encoding);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Repair Meta's Latin-1 mojibake in string fields (default: true)
    pub fix_encoding: bool,

    /// Skip batch files that fail to parse instead of returning errors (default: true)
    pub skip_invalid: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            fix_encoding: true,
            skip_invalid: true,
        }
    }
}

impl LoaderConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the encoding repair.
    #[must_use]
    pub fn with_fix_encoding(mut self, enabled: bool) -> Self {
        self.fix_encoding = enabled;
        self
    }

    /// Sets whether to skip malformed batch files.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}

/// Configuration for the aggregator.
///
/// # Example
///
/// ```rust
/// use chatstats::config::AnalysisConfig;
///
/// # fn main() -> chatstats::Result<()> {
/// let config = AnalysisConfig::new().with_timezone_name("Europe/Berlin")?;
/// assert_eq!(config.timezone.name(), "Europe/Berlin");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum number of entries in each top-word list (default: 10)
    pub top_k: usize,

    /// Timezone used to bucket messages by hour (default: America/Los_Angeles)
    pub timezone: Tz,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the top-word list size.
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Sets the histogram timezone.
    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Sets the histogram timezone from an IANA name.
    pub fn with_timezone_name(self, name: &str) -> Result<Self> {
        let tz = Tz::from_str(name).map_err(|_| ChatstatsError::invalid_timezone(name))?;
        Ok(self.with_timezone(tz))
    }

    /// Checks that the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(ChatstatsError::invalid_config("top_k must be at least 1"));
        }
        Ok(())
    }
}

/// Everything needed to take one conversation from disk to statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub loader: LoaderConfig,
    pub analysis: AnalysisConfig,
}

impl PipelineConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_loader(mut self, loader: LoaderConfig) -> Self {
        self.loader = loader;
        self
    }

    #[must_use]
    pub fn with_analysis(mut self, analysis: AnalysisConfig) -> Self {
        self.analysis = analysis;
        self
    }
}

/// Configuration for writing export files.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ExportConfig;
///
/// let config = ExportConfig::new().with_output_dir("stats");
/// assert_eq!(config.output_dir.to_str(), Some("stats"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory receiving every exported file (default: current directory)
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl ExportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
