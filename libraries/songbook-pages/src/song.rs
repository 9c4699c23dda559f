//! Song detail page.

use crate::state::{FetchGuard, FetchTicket, LoadState};
use songbook_core::{Player, Song, SongId, SongbookApi};
use tracing::debug;

const GENERIC_ERROR: &str = "Something went wrong";

#[derive(Debug, Default)]
pub struct SongPage {
    song_id: Option<SongId>,
    state: LoadState<Song>,
    guard: FetchGuard,
}

impl SongPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<Song> {
        &self.state
    }

    pub fn song_id(&self) -> Option<&SongId> {
        self.song_id.as_ref()
    }

    /// Route parameter changed; `None` if this song is already shown.
    pub fn open(&mut self, song_id: SongId) -> Option<FetchTicket> {
        if self.guard.is_mounted() && self.song_id.as_ref() == Some(&song_id) {
            return None;
        }
        self.song_id = Some(song_id);
        self.state = LoadState::Loading;
        Some(self.guard.issue())
    }

    pub fn complete(&mut self, ticket: FetchTicket, result: songbook_core::Result<Song>) {
        if !self.guard.accepts(ticket) {
            return;
        }
        self.state = match result {
            Ok(song) => LoadState::Loaded(song),
            Err(e) => {
                debug!(error = %e, "Song fetch failed");
                LoadState::Error(GENERIC_ERROR.to_string())
            }
        };
    }

    pub async fn load<A>(&mut self, api: &A, song_id: SongId)
    where
        A: SongbookApi + ?Sized,
    {
        let Some(ticket) = self.open(song_id.clone()) else {
            return;
        };
        let result = api.song(&song_id).await;
        self.complete(ticket, result);
    }

    pub fn unmount(&mut self) {
        self.guard.unmount();
    }

    /// Player slot for the loaded song.
    pub fn player(&self) -> Option<Player> {
        self.state.value().map(|song| Player::for_source(&song.source))
    }
}
