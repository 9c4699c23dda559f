//! Main Songbook API client.

use crate::auth::AuthClient;
use crate::error::{Result, ServerClientError};
use crate::http::HttpApi;
use crate::playlists::PlaylistClient;
use crate::thumbnails::ThumbnailClient;
use crate::types::ClientConfig;
use crate::upload::UploadClient;
use async_trait::async_trait;
use reqwest::Client;
use songbook_core::{
    Credentials, PlaylistId, PlaylistSummary, Session, Song, SongId, SongSubmission,
    SongbookApi, SongbookError,
};
use std::time::Duration;
use tracing::debug;

const SONGS_FAILED: &str = "Failed to fetch songs";
const SONG_FAILED: &str = "Failed to fetch song";
const PLAYLISTS_FAILED: &str = "Failed to fetch playlists";
const CREATE_FAILED: &str = "Failed to create song.";

/// Client for the playlist API and its login host.
///
/// # Example
///
/// ```ignore
/// use songbook_client::{ClientConfig, SongbookClient};
/// use songbook_core::SongbookApi;
///
/// let client = SongbookClient::new(ClientConfig::default())?;
/// for playlist in client.list_playlists().await? {
///     println!("{} ({} songs)", playlist.name, playlist.song_count);
/// }
/// ```
pub struct SongbookClient {
    api: HttpApi,
    auth: HttpApi,
    access_token: Option<String>,
}

impl SongbookClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Songbook/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ServerClientError::Network)?;

        let api = HttpApi::new(http.clone(), &config.url)?;
        let auth = HttpApi::new(http, &config.auth_url)?;
        debug!(api = %api.base_url(), auth = %auth.base_url(), "Client configured");

        Ok(Self {
            api,
            auth,
            access_token: config.access_token.filter(|t| !t.is_empty()),
        })
    }

    /// The playlist API base URL.
    pub fn url(&self) -> &str {
        self.api.base_url()
    }

    /// Whether a bearer token is attached to API requests.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Raw access layer for the playlist API.
    pub fn http(&self) -> &HttpApi {
        &self.api
    }

    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(&self.auth)
    }

    pub fn playlists(&self) -> PlaylistClient<'_> {
        PlaylistClient::new(&self.api, self.access_token.as_deref())
    }

    pub fn upload(&self) -> UploadClient<'_> {
        UploadClient::new(&self.api, self.access_token.as_deref())
    }

    pub fn thumbnails(&self) -> ThumbnailClient<'_> {
        ThumbnailClient::new(&self.api)
    }
}

#[async_trait]
impl SongbookApi for SongbookClient {
    async fn login(&self, credentials: &Credentials) -> songbook_core::Result<Session> {
        match self
            .auth()
            .login(&credentials.username, &credentials.password)
            .await
        {
            Ok(session) => Ok(session),
            Err(ServerClientError::ServerError { .. }) => Err(SongbookError::InvalidCredentials),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_playlists(&self) -> songbook_core::Result<Vec<PlaylistSummary>> {
        let envelope = self.playlists().list().await?;

        if envelope.has_success_flag() && !envelope.is_success() {
            return Err(SongbookError::application(envelope.message, PLAYLISTS_FAILED));
        }
        envelope.data.ok_or(SongbookError::InvalidResponse)
    }

    async fn playlist_songs(&self, id: &PlaylistId) -> songbook_core::Result<Vec<Song>> {
        let envelope = self.playlists().songs(id).await?;

        if !envelope.is_success() {
            return Err(SongbookError::application(envelope.message, SONGS_FAILED));
        }
        Ok(envelope.data.unwrap_or_default())
    }

    async fn song(&self, id: &SongId) -> songbook_core::Result<Song> {
        let envelope = self.playlists().song(id).await?;

        if !envelope.is_success() {
            return Err(SongbookError::application(envelope.message, SONG_FAILED));
        }
        envelope.data.ok_or(SongbookError::InvalidResponse)
    }

    async fn create_song(&self, submission: &SongSubmission) -> songbook_core::Result<()> {
        match self.upload().create_song(submission).await {
            Ok(envelope) if envelope.is_success() => Ok(()),
            Ok(envelope) => Err(SongbookError::application(envelope.message, CREATE_FAILED)),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_validation() {
        assert!(SongbookClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(SongbookClient::new(ClientConfig::new("http://localhost:8080")).is_ok());

        assert!(SongbookClient::new(ClientConfig::new("")).is_err());
        assert!(SongbookClient::new(ClientConfig::new("not-a-url")).is_err());
        assert!(
            SongbookClient::new(ClientConfig::new("https://example.com").with_auth_url("ftp://x"))
                .is_err()
        );
    }

    #[test]
    fn test_url_normalization() {
        let client = SongbookClient::new(ClientConfig::new("https://example.com/")).expect("valid url");
        assert_eq!(client.url(), "https://example.com");
    }

    #[test]
    fn empty_token_is_no_token() {
        let client =
            SongbookClient::new(ClientConfig::new("https://example.com").with_token("")).unwrap();
        assert!(!client.is_authenticated());

        let client =
            SongbookClient::new(ClientConfig::new("https://example.com").with_token("abc")).unwrap();
        assert!(client.is_authenticated());
    }

    #[test]
    fn thumbnail_urls() {
        let client = SongbookClient::new(ClientConfig::new("https://h.example/ukl2")).unwrap();
        assert_eq!(
            client.thumbnails().url("cover.png"),
            "https://h.example/ukl2/thumbnail/cover.png"
        );
    }
}
