/// Core traits for Songbook
use crate::error::Result;
use crate::types::{PlaylistId, PlaylistSummary, Session, Song, SongId};
use crate::validation::{Credentials, SongSubmission};
use async_trait::async_trait;

/// Remote operations the pages depend on.
///
/// Implemented over HTTP by `songbook_client::SongbookClient`. Each call
/// issues one request; failures are returned, never retried.
#[async_trait]
pub trait SongbookApi: Send + Sync {
    /// Log in against the auth host.
    ///
    /// # Errors
    /// `InvalidCredentials` for a non-success status, `Network` on transport failure.
    async fn login(&self, credentials: &Credentials) -> Result<Session>;

    /// `GET /playlists`
    async fn list_playlists(&self) -> Result<Vec<PlaylistSummary>>;

    /// `GET /playlists/song-list/{id}`
    ///
    /// # Errors
    /// `InvalidResponse` when the body lacks a `success` flag,
    /// `Application` when the flag is false.
    async fn playlist_songs(&self, id: &PlaylistId) -> Result<Vec<Song>>;

    /// `GET /playlists/song/{id}`
    async fn song(&self, id: &SongId) -> Result<Song>;

    /// `POST /playlists/song` as multipart.
    ///
    /// # Errors
    /// `Application` carrying the server message (or a default) when the
    /// server reports failure.
    async fn create_song(&self, submission: &SongSubmission) -> Result<()>;
}
