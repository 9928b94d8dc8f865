//! Shared parsing utilities for Messenger exports.
//!
//! - [`encoding`] repairs the Latin-1 mojibake Meta writes into every string field
//! - [`messenger`] holds the serde shapes of batch records

pub mod encoding;
pub mod messenger;

// Re-export commonly used items
pub use encoding::{Repaired, normalize_text, repair_or_keep};
pub use messenger::{BatchRecord, GENERIC_MESSAGE_TYPE, RawMessage};
