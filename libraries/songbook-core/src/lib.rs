//! Songbook Core
//!
//! Platform-agnostic types, rules and the remote API contract for the
//! Songbook playlist client.
//!
//! # Architecture
//!
//! - **Domain Types**: `PlaylistSummary`, `PlaylistDetail`, `Song`, `Comment`
//! - **Rules**: new-song validation, search filtering, video embed derivation
//! - **Navigation**: the `Route` surface of the client
//! - **Contract**: the `SongbookApi` trait implemented by the HTTP client
//! - **Error Handling**: unified `SongbookError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use songbook_core::{embed_url, filter_songs, Song, SongId};
//!
//! let songs = vec![
//!     Song::new(SongId::new("1"), "Cats Eye", "Anri"),
//!     Song::new(SongId::new("2"), "Dogs", "Pink Floyd"),
//! ];
//! assert_eq!(filter_songs(&songs, "cat").len(), 1);
//!
//! assert_eq!(
//!     embed_url("https://youtu.be/abc123").as_deref(),
//!     Some("https://www.youtube.com/embed/abc123"),
//! );
//! ```

#![forbid(unsafe_code)]

pub mod embed;
pub mod error;
pub mod filter;
pub mod route;
pub mod traits;
pub mod types;
pub mod validation;

pub use embed::{embed_url, Player, INVALID_SOURCE_MESSAGE};
pub use error::{Result, SongbookError, ValidationError, NETWORK_ERROR_MESSAGE};
pub use filter::filter_songs;
pub use route::{Route, UnknownRoute};
pub use traits::SongbookApi;
pub use types::{
    Comment, PlaylistDetail, PlaylistId, PlaylistSummary, Session, Song, SongId, Thumbnail,
};
pub use validation::{
    Credentials, NewSong, SongSubmission, ALLOWED_THUMBNAIL_TYPES, MAX_THUMBNAIL_BYTES,
};
