//! Playlist and song read operations.

use crate::error::{Result, ServerClientError};
use crate::http::HttpApi;
use crate::types::Envelope;
use songbook_core::{PlaylistId, PlaylistSummary, Song, SongId};
use tracing::debug;

/// Read-only client for playlists and songs.
pub struct PlaylistClient<'a> {
    http: &'a HttpApi,
    access_token: Option<&'a str>,
}

impl<'a> PlaylistClient<'a> {
    pub(crate) fn new(http: &'a HttpApi, access_token: Option<&'a str>) -> Self {
        Self { http, access_token }
    }

    /// `GET /playlists` → `{ data: Playlist[] }`
    pub async fn list(&self) -> Result<Envelope<Vec<PlaylistSummary>>> {
        let envelope: Envelope<Vec<PlaylistSummary>> =
            self.http.get("/playlists", self.access_token).await?;

        debug!(
            playlists = envelope.data.as_ref().map_or(0, Vec::len),
            "Fetched playlists"
        );
        Ok(envelope)
    }

    /// `GET /playlists/song-list/{id}` → `{ success, data: Song[] }`
    ///
    /// A body that is not an object carrying `success`, or whose songs do
    /// not decode, is an `InvalidResponse`.
    pub async fn songs(&self, playlist_id: &PlaylistId) -> Result<Envelope<Vec<Song>>> {
        let url = format!("/playlists/song-list/{playlist_id}");
        debug!(playlist_id = %playlist_id, "Fetching playlist songs");

        let body: serde_json::Value = self.http.get(&url, self.access_token).await?;
        if !body.as_object().is_some_and(|o| o.contains_key("success")) {
            return Err(ServerClientError::InvalidResponse(
                "expected an object with a `success` field".into(),
            ));
        }

        serde_json::from_value(body).map_err(|e| ServerClientError::InvalidResponse(e.to_string()))
    }

    /// `GET /playlists/song/{id}` → `{ success, data: Song }`
    pub async fn song(&self, song_id: &SongId) -> Result<Envelope<Song>> {
        let url = format!("/playlists/song/{song_id}");
        debug!(song_id = %song_id, "Fetching song");

        self.http.get(&url, self.access_token).await
    }
}
