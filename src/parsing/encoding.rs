//! Repair for Meta's broken string encoding (Mojibake).
//!
//! Meta exports UTF-8 text encoded as if it were ISO-8859-1: every UTF-8 byte
//! is stored as a separate Unicode code point. `"café"` arrives as
//! `"cafÃ©"`, a curly apostrophe as `"â\u{80}\u{99}"`.
//!
//! The fix reverses the process:
//! 1. Take each char as its byte value (code points 0–255 only)
//! 2. Decode the resulting bytes as UTF-8

use tracing::warn;

use crate::error::{ChatstatsError, EncodingError};

/// Re-encodes `text` as Latin-1 bytes and decodes them as UTF-8.
///
/// Fails if a char is above U+00FF or the bytes are not valid UTF-8. Both
/// mean the field was not mis-encoded to begin with.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::normalize_text;
///
/// assert_eq!(normalize_text("Hello").unwrap(), "Hello");
/// assert_eq!(normalize_text("caf\u{c3}\u{a9}").unwrap(), "café");
/// assert!(normalize_text("café €5").is_err());
/// ```
pub fn normalize_text(text: &str) -> Result<String, EncodingError> {
    if text.is_ascii() {
        return Ok(text.to_string());
    }

    let mut bytes = Vec::with_capacity(text.len());
    for (index, ch) in text.chars().enumerate() {
        let byte = u8::try_from(u32::from(ch)).map_err(|_| EncodingError::Unmappable { ch, index })?;
        bytes.push(byte);
    }

    Ok(String::from_utf8(bytes)?)
}

/// Outcome of repairing one field.
///
/// `text` is always usable: the repaired string on success, the untouched
/// input otherwise.
#[derive(Debug)]
pub struct Repaired {
    pub text: String,
    pub failure: Option<ChatstatsError>,
}

impl Repaired {
    /// Returns `true` if the repair succeeded (or was not needed).
    pub fn is_clean(&self) -> bool {
        self.failure.is_none()
    }
}

/// Repairs `text`, keeping the original and flagging it when repair fails.
///
/// A failure is logged at `warn` level and never propagates; the other
/// fields of the same message are unaffected.
pub fn repair_or_keep(text: &str, field: &'static str) -> Repaired {
    match normalize_text(text) {
        Ok(fixed) => Repaired {
            text: fixed,
            failure: None,
        },
        Err(source) => {
            warn!(field, error = %source, "could not repair encoding, keeping original text");
            Repaired {
                text: text.to_string(),
                failure: Some(ChatstatsError::encoding(field, source)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Produces what Meta would write for `s`: one char per UTF-8 byte.
    fn mojibake(s: &str) -> String {
        s.bytes().map(char::from).collect()
    }

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(normalize_text("Hello").unwrap(), "Hello");
        assert_eq!(normalize_text("").unwrap(), "");
    }

    #[test]
    fn test_repairs_accents_quotes_and_emoji() {
        for original in ["café", "it’s fine", "Привет", "🔥🎉", "naïve — “quoted”"] {
            assert_eq!(normalize_text(&mojibake(original)).unwrap(), original);
        }
    }

    #[test]
    fn test_right_single_quote_bytes() {
        assert_eq!(normalize_text("don\u{e2}\u{80}\u{99}t").unwrap(), "don’t");
    }

    #[test]
    fn test_rejects_code_point_above_latin1() {
        let err = normalize_text("price: €5").unwrap_err();
        assert!(matches!(err, EncodingError::Unmappable { ch: '€', index: 7 }));
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        // A lone 0xC3 lead byte with no continuation.
        let err = normalize_text("\u{c3}").unwrap_err();
        assert!(matches!(err, EncodingError::InvalidUtf8(_)));
    }

    #[test]
    fn test_repair_or_keep_success() {
        let repaired = repair_or_keep(&mojibake("über"), "content");
        assert!(repaired.is_clean());
        assert_eq!(repaired.text, "über");
    }

    #[test]
    fn test_repair_or_keep_passthrough() {
        let repaired = repair_or_keep("already fine ✓", "content");
        assert!(!repaired.is_clean());
        assert_eq!(repaired.text, "already fine ✓");
        assert!(repaired.failure.unwrap().is_encoding());
    }
}
