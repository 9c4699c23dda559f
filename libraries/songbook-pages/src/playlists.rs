//! Playlist list page.

use crate::state::{FetchGuard, FetchTicket, LoadState};
use songbook_core::{PlaylistSummary, Route, SongbookApi, SongbookError, NETWORK_ERROR_MESSAGE};

const LIST_FAILED: &str = "Failed to load playlists";

/// All playlists, fetched once on mount.
#[derive(Debug, Default)]
pub struct PlaylistsPage {
    state: LoadState<Vec<PlaylistSummary>>,
    guard: FetchGuard,
}

impl PlaylistsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<Vec<PlaylistSummary>> {
        &self.state
    }

    pub fn begin(&mut self) -> FetchTicket {
        self.state = LoadState::Loading;
        self.guard.issue()
    }

    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: songbook_core::Result<Vec<PlaylistSummary>>,
    ) {
        if !self.guard.accepts(ticket) {
            return;
        }
        self.state = match result {
            Ok(playlists) => LoadState::Loaded(playlists),
            Err(SongbookError::Network) => LoadState::Error(NETWORK_ERROR_MESSAGE.to_string()),
            Err(_) => LoadState::Error(LIST_FAILED.to_string()),
        };
    }

    pub async fn load<A>(&mut self, api: &A)
    where
        A: SongbookApi + ?Sized,
    {
        let ticket = self.begin();
        let result = api.list_playlists().await;
        self.complete(ticket, result);
    }

    pub fn unmount(&mut self) {
        self.guard.unmount();
    }

    /// Where clicking a playlist leads.
    pub fn route_for(playlist: &PlaylistSummary) -> Route {
        Route::PlaylistSongs(playlist.id.clone())
    }
}
