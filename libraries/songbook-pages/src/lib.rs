//! Songbook Pages
//!
//! View controllers for the Songbook client. Each page owns its state
//! exclusively and talks to the remote service only through
//! [`songbook_core::SongbookApi`], so any implementation (HTTP, mock) can
//! drive it.
//!
//! Fetching pages split a request into `open`/`begin` (hands out a
//! [`FetchTicket`]) and `complete`, so a response for a superseded or
//! unmounted fetch is dropped instead of overwriting newer state.

#![forbid(unsafe_code)]

pub mod add_song;
pub mod login;
pub mod playlist_songs;
pub mod playlists;
pub mod song;
pub mod state;

pub use add_song::{AddSongPage, FormPhase, Notice, NoticeKind, CREATED_MESSAGE};
pub use login::LoginPage;
pub use playlist_songs::PlaylistSongsPage;
pub use playlists::PlaylistsPage;
pub use song::SongPage;
pub use state::{FetchGuard, FetchTicket, LoadState};
