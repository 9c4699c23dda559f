//! Songbook Client
//!
//! HTTP client library for the Songbook playlist API.
//!
//! # Features
//!
//! - **Access layer**: `get`/`post`/`put`/`del` against a fixed base URL with
//!   an optional bearer token, one request per call, a single `Result` contract
//! - **Authentication**: login against a separate auth host
//! - **Playlists**: playlist list, songs of a playlist, song detail
//! - **Upload**: create a song with a multipart thumbnail upload
//! - **Thumbnails**: asset URLs and downloads
//!
//! `SongbookClient` implements [`songbook_core::SongbookApi`], translating
//! response envelopes into `SongbookError`s.
//!
//! # Example
//!
//! ```ignore
//! use songbook_client::{ClientConfig, SongbookClient};
//! use songbook_core::{PlaylistId, SongbookApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SongbookClient::new(ClientConfig::default())?;
//!
//!     let songs = client.playlist_songs(&PlaylistId::new("1")).await?;
//!     println!("Found {} songs", songs.len());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod http;
mod playlists;
mod thumbnails;
mod types;
mod upload;

// Re-export main types
pub use client::SongbookClient;
pub use error::{ErrorBody, Result, ServerClientError};
pub use http::{Body, HttpApi};
pub use types::{ClientConfig, Envelope, DEFAULT_API_URL, DEFAULT_AUTH_URL};
pub use upload::thumbnail_from_path;

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use playlists::PlaylistClient;
pub use thumbnails::ThumbnailClient;
pub use upload::UploadClient;
