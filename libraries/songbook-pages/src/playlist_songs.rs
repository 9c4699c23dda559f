//! Playlist detail page: songs of one playlist with a live search box.

use crate::state::{FetchGuard, FetchTicket, LoadState};
use songbook_core::{
    filter_songs, PlaylistDetail, PlaylistId, Route, Song, SongbookApi, SongbookError,
    NETWORK_ERROR_MESSAGE,
};

const GENERIC_ERROR: &str = "Something went wrong";

/// Songs of the playlist named by the route, plus the search term.
///
/// The filtered list is computed from `(songs, search)` on every call and
/// never stored.
#[derive(Debug, Default)]
pub struct PlaylistSongsPage {
    playlist_id: Option<PlaylistId>,
    state: LoadState<PlaylistDetail>,
    search: String,
    guard: FetchGuard,
}

impl PlaylistSongsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn playlist_id(&self) -> Option<&PlaylistId> {
        self.playlist_id.as_ref()
    }

    pub fn state(&self) -> &LoadState<PlaylistDetail> {
        &self.state
    }

    /// Route parameter changed. Returns a ticket when a fetch must start,
    /// `None` when the id is the one already shown.
    pub fn open(&mut self, playlist_id: PlaylistId) -> Option<FetchTicket> {
        if self.guard.is_mounted() && self.playlist_id.as_ref() == Some(&playlist_id) {
            return None;
        }
        self.playlist_id = Some(playlist_id);
        self.state = LoadState::Loading;
        Some(self.guard.issue())
    }

    pub fn complete(&mut self, ticket: FetchTicket, result: songbook_core::Result<Vec<Song>>) {
        if !self.guard.accepts(ticket) {
            return;
        }
        let Some(id) = self.playlist_id.clone() else {
            return;
        };

        self.state = match result {
            Ok(songs) => LoadState::Loaded(PlaylistDetail::new(id, songs)),
            Err(e) => LoadState::Error(error_message(&e)),
        };
    }

    /// Open `playlist_id` and fetch its songs unless already shown.
    pub async fn load<A>(&mut self, api: &A, playlist_id: PlaylistId)
    where
        A: SongbookApi + ?Sized,
    {
        let Some(ticket) = self.open(playlist_id.clone()) else {
            return;
        };
        let result = api.playlist_songs(&playlist_id).await;
        self.complete(ticket, result);
    }

    pub fn unmount(&mut self) {
        self.guard.unmount();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Songs matching the current search term.
    pub fn filtered(&self) -> Vec<&Song> {
        match &self.state {
            LoadState::Loaded(detail) => filter_songs(&detail.songs, &self.search),
            _ => Vec::new(),
        }
    }

    /// Page heading: the playlist label once loaded.
    pub fn heading(&self) -> String {
        match &self.state {
            LoadState::Loaded(detail) => format!("Playlist: {}", detail.display_name()),
            _ => "Playlist: Loading...".to_string(),
        }
    }

    /// Loaded without error but nothing to show ("No songs found.").
    pub fn is_empty(&self) -> bool {
        matches!(self.state, LoadState::Loaded(_)) && self.filtered().is_empty()
    }

    /// Where clicking a song leads.
    pub fn route_for(song: &Song) -> Route {
        Route::Song(song.id.clone())
    }
}

fn error_message(err: &SongbookError) -> String {
    match err {
        SongbookError::Application(message) => message.clone(),
        SongbookError::InvalidResponse => err.to_string(),
        SongbookError::Network => NETWORK_ERROR_MESSAGE.to_string(),
        _ => GENERIC_ERROR.to_string(),
    }
}
