//! Message classification by literal phrase lookup.
//!
//! Messenger records nickname changes, polls, video calls and group photo
//! updates as ordinary `Generic` messages whose text is generated by the
//! platform. They are recognised by fixed phrases and kept out of the word
//! and time analytics.
//!
//! Matching is plain, case-sensitive substring search. Leading and trailing
//! spaces in the phrases are significant.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic type of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Anything written by a person.
    #[default]
    Text,
    Nickname,
    Poll,
    Video,
    GroupPhoto,
}

impl Category {
    /// Returns the lower-case name used in exports and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Text => "text",
            Category::Nickname => "nickname",
            Category::Poll => "poll",
            Category::Video => "video",
            Category::GroupPhoto => "group_photo",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered phrase table. The first category with a matching phrase wins.
pub const PHRASE_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Nickname,
        &[
            " set your nickname ",
            " set the nickname for ",
            " cleared the nickname ",
        ],
    ),
    (
        Category::Poll,
        &[
            " created a poll: ",
            " in the poll.",
            "This poll is no longer available.",
            " poll has multiple updates.",
        ],
    ),
    (Category::Video, &[" joined the video chat."]),
    (Category::GroupPhoto, &[" changed the group photo."]),
];

/// Maps normalized message content to exactly one [`Category`].
///
/// # Example
///
/// ```rust
/// use chatstats::core::classify::{Category, classify};
///
/// assert_eq!(classify("Alex set your nickname to Al"), Category::Nickname);
/// assert_eq!(classify("Bo joined the video chat."), Category::Video);
/// assert_eq!(classify("just a normal message"), Category::Text);
/// ```
pub fn classify(content: &str) -> Category {
    PHRASE_TABLE
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|phrase| content.contains(phrase)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Text)
}
