//! Embeddable player URLs for song sources.

use regex::Regex;
use std::sync::LazyLock;

/// Shown in place of the player when no video id can be extracted.
pub const INVALID_SOURCE_MESSAGE: &str = "Invalid or unsupported YouTube URL.";

static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([A-Za-z0-9_-]+)").expect("static regex")
});

/// Extract a YouTube video id from a `youtube.com/watch?v=` or `youtu.be/` URL.
pub fn video_id(source: &str) -> Option<&str> {
    VIDEO_ID
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Embed URL for a song source, or `None` when the source is not a known video link.
pub fn embed_url(source: &str) -> Option<String> {
    video_id(source).map(|id| format!("https://www.youtube.com/embed/{id}"))
}

/// What the song detail page shows in the player slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Player {
    /// Embed this URL
    Embed(String),
    /// Show [`INVALID_SOURCE_MESSAGE`]
    InvalidSource,
}

impl Player {
    pub fn for_source(source: &str) -> Self {
        embed_url(source).map_or(Self::InvalidSource, Self::Embed)
    }
}
