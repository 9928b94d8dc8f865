//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers all error
//! cases in the library, plus [`EncodingError`] for the text repair step.
//!
//! # Error Handling Philosophy
//!
//! Most errors are *recoverable* inside the pipeline:
//!
//! - A malformed batch file is skipped and reported, the rest of the
//!   conversation is still analyzed
//! - A field that cannot be repaired by the encoding fix is passed through
//!   unchanged and flagged
//!
//! Only I/O failures on the output side, invalid configuration and an
//! unknown conversation title stop a run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::Event;
///
/// fn my_function() -> Result<Vec<Event>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The archive directory doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A batch record could not be parsed as a Messenger export.
    ///
    /// The loader recovers from this by skipping the record.
    #[error("Malformed batch record{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    MalformedRecord {
        /// The file path, if the record came from disk
        path: Option<PathBuf>,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A string field could not be repaired by the encoding fix.
    #[error("Encoding error in {field}: {source}")]
    Encoding {
        /// Which field failed (e.g. "content", "sender_name", "title")
        field: &'static str,
        /// The underlying encoding error
        #[source]
        source: EncodingError,
    },

    /// No conversation in the archive has the requested title.
    #[error("Conversation '{title}' not found")]
    ConversationNotFound {
        /// The title that was requested
        title: String,
    },

    /// The configured timezone name is not in the tz database.
    #[error("Invalid timezone '{input}'. Expected an IANA name such as America/Los_Angeles")]
    InvalidTimezone {
        /// The timezone string that was provided
        input: String,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// UTF-8 error when converting rendered output to a string.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Reasons the Latin-1 → UTF-8 repair can fail for a single field.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The string holds a code point above U+00FF, so it was never
    /// Latin-1 mojibake in the first place.
    #[error("character {ch:?} at index {index} is outside the single-byte range")]
    Unmappable {
        /// The offending character
        ch: char,
        /// Char index within the field
        index: usize,
    },

    /// The recovered bytes are not valid UTF-8.
    #[error("recovered bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

impl From<std::string::FromUtf8Error> for ChatstatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates a malformed-record error.
    pub fn malformed(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        ChatstatsError::MalformedRecord { path, source }
    }

    /// Creates an encoding error for the given field.
    pub fn encoding(field: &'static str, source: EncodingError) -> Self {
        ChatstatsError::Encoding { field, source }
    }

    /// Creates a conversation-not-found error.
    pub fn not_found(title: impl Into<String>) -> Self {
        ChatstatsError::ConversationNotFound {
            title: title.into(),
        }
    }

    /// Creates an invalid timezone error.
    pub fn invalid_timezone(input: impl Into<String>) -> Self {
        ChatstatsError::InvalidTimezone {
            input: input.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ChatstatsError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this is a malformed-record error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ChatstatsError::MalformedRecord { .. })
    }

    /// Returns `true` if this is an encoding error.
    pub fn is_encoding(&self) -> bool {
        matches!(self, ChatstatsError::Encoding { .. })
    }

    /// Returns `true` if the requested conversation was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ChatstatsError::ConversationNotFound { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
