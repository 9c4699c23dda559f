/// Song and comment types as served by the playlist API
use crate::types::de::null_as_default;
use crate::types::SongId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A song record.
///
/// Field names follow the server's JSON (`uuid`, `comment_text`,
/// `createdAt`). Missing or `null` fields other than the id decode to
/// their empty value so a partially populated record still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    #[serde(rename = "uuid")]
    pub id: SongId,

    /// Song title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Performing artist
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist: String,

    /// Free-form description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// External media URL (usually a YouTube link)
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,

    /// Thumbnail file name, served under `/thumbnail/{file}`
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail: String,

    /// Like count
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: u64,

    /// Comments, oldest first as returned by the server
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
}

impl Song {
    /// Create a song with just the fields needed for listing.
    pub fn new(id: SongId, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            description: String::new(),
            source: String::new(),
            thumbnail: String::new(),
            likes: 0,
            comments: Vec::new(),
        }
    }

    /// Set the media source URL
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// A read-only comment attached to a song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment body
    #[serde(rename = "comment_text")]
    pub text: String,

    /// Display name of the author
    pub creator: String,

    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_song() {
        let json = serde_json::json!({
            "uuid": "s-1",
            "title": "Cats Eye",
            "artist": "Anri",
            "description": "city pop",
            "source": "https://youtu.be/abc123",
            "thumbnail": "cats.png",
            "likes": 12,
            "comments": [
                {
                    "comment_text": "classic",
                    "creator": "rin",
                    "createdAt": "2024-05-01T10:00:00.000Z"
                }
            ]
        });

        let song: Song = serde_json::from_value(json).unwrap();
        assert_eq!(song.id.as_str(), "s-1");
        assert_eq!(song.likes, 12);
        assert_eq!(song.comments.len(), 1);
        assert_eq!(song.comments[0].text, "classic");
        assert_eq!(
            song.comments[0].created_at.to_rfc3339(),
            "2024-05-01T10:00:00+00:00"
        );
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let json = serde_json::json!({
            "uuid": "1",
            "title": "A",
            "artist": null,
            "description": null,
            "source": null,
            "thumbnail": null,
            "likes": null,
            "comments": null
        });
        let song: Song = serde_json::from_value(json).unwrap();

        assert_eq!(song.title, "A");
        assert!(song.artist.is_empty());
        assert!(song.description.is_empty());
        assert_eq!(song.likes, 0);
        assert!(song.comments.is_empty());
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = serde_json::json!({ "uuid": "s-2", "title": "Dogs", "artist": "Pink Floyd" });
        let song: Song = serde_json::from_value(json).unwrap();

        assert!(song.description.is_empty());
        assert_eq!(song.likes, 0);
        assert!(song.comments.is_empty());
    }
}
