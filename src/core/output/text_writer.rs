//! Plain-text dump of a participant's messages.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Concatenates `messages`, each followed by a single space.
pub fn to_message_text<S: AsRef<str>>(messages: &[S]) -> String {
    messages.iter().fold(String::new(), |mut out, message| {
        out.push_str(message.as_ref());
        out.push(' ');
        out
    })
}

/// Writes `messages` to `path` as produced by [`to_message_text`].
pub fn write_message_text<S: AsRef<str>>(path: &Path, messages: &[S]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for message in messages {
        writer.write_all(message.as_ref().as_bytes())?;
        writer.write_all(b" ")?;
    }
    writer.flush()?;
    Ok(())
}
