/// Playlist domain types
use crate::types::de::null_as_default;
use crate::types::{PlaylistId, Song};
use serde::{Deserialize, Serialize};

/// Playlist as listed by `GET /playlists`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    /// Unique playlist identifier
    #[serde(rename = "uuid")]
    pub id: PlaylistId,

    /// Playlist name
    #[serde(rename = "playlist_name")]
    pub name: String,

    /// Number of songs in the playlist
    #[serde(default, deserialize_with = "null_as_default")]
    pub song_count: u32,
}

/// A playlist with its songs, as shown on the playlist detail page.
///
/// The song-list endpoint only returns songs, so `name` is `None` unless a
/// caller fills it from another source.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistDetail {
    /// Playlist identifier (taken from the route)
    pub id: PlaylistId,

    /// Playlist name, when known
    pub name: Option<String>,

    /// Songs in server order
    pub songs: Vec<Song>,
}

impl PlaylistDetail {
    /// Create a detail record for songs fetched by playlist id
    pub fn new(id: PlaylistId, songs: Vec<Song>) -> Self {
        Self {
            id,
            name: None,
            songs,
        }
    }

    /// Heading for the page: the real name if known, else `Playlist {id}`.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Playlist {}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_server_field_names() {
        let json = serde_json::json!({
            "uuid": "p-1",
            "playlist_name": "Road trip",
            "song_count": 4
        });
        let summary: PlaylistSummary = serde_json::from_value(json).unwrap();

        assert_eq!(summary.id, PlaylistId::new("p-1"));
        assert_eq!(summary.name, "Road trip");
        assert_eq!(summary.song_count, 4);
    }

    #[test]
    fn null_song_count_is_zero() {
        let json = serde_json::json!({ "uuid": "p-2", "playlist_name": "Empty", "song_count": null });
        let summary: PlaylistSummary = serde_json::from_value(json).unwrap();
        assert_eq!(summary.song_count, 0);
    }

    #[test]
    fn display_name_falls_back_to_placeholder() {
        let mut detail = PlaylistDetail::new(PlaylistId::new("p-9"), vec![]);
        assert_eq!(detail.display_name(), "Playlist p-9");

        detail.name = Some("Focus".into());
        assert_eq!(detail.display_name(), "Focus");
    }
}
