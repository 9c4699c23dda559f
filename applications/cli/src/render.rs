//! Plain-text rendering of page state.

use songbook_client::ThumbnailClient;
use songbook_core::{Player, INVALID_SOURCE_MESSAGE};
use songbook_pages::{AddSongPage, LoadState, NoticeKind, PlaylistSongsPage, PlaylistsPage, SongPage};
use std::fmt::Write;

pub fn playlists(page: &PlaylistsPage) -> String {
    match page.state() {
        LoadState::Loading => "Loading...\n".to_string(),
        LoadState::Error(message) => format!("{message}\n"),
        LoadState::Loaded(playlists) if playlists.is_empty() => "No playlists.\n".to_string(),
        LoadState::Loaded(playlists) => {
            let mut out = String::from("Playlists\n");
            for playlist in playlists {
                let _ = writeln!(
                    out,
                    "  {}  ({} songs)  -> {}",
                    playlist.name,
                    playlist.song_count,
                    PlaylistsPage::route_for(playlist)
                );
            }
            out
        }
    }
}

pub fn playlist_songs(page: &PlaylistSongsPage, thumbnails: &ThumbnailClient<'_>) -> String {
    let mut out = format!("{}\n", page.heading());
    if !page.search().is_empty() {
        let _ = writeln!(out, "Search: {}", page.search());
    }

    match page.state() {
        LoadState::Loading => out.push_str("Loading songs...\n"),
        LoadState::Error(message) => {
            let _ = writeln!(out, "{message}");
        }
        LoadState::Loaded(_) if page.is_empty() => out.push_str("No songs found.\n"),
        LoadState::Loaded(_) => {
            for song in page.filtered() {
                let _ = writeln!(out, "  {}", song.title);
                let _ = writeln!(out, "    By {}", song.artist);
                let _ = writeln!(out, "    {} likes", song.likes);
                let _ = writeln!(out, "    thumbnail: {}", thumbnails.url(&song.thumbnail));
                let _ = writeln!(out, "    -> {}", PlaylistSongsPage::route_for(song));
            }
        }
    }
    out
}

pub fn song(page: &SongPage) -> String {
    let song = match page.state() {
        LoadState::Loading => return "Loading...\n".to_string(),
        LoadState::Error(message) => return format!("{message}\n"),
        LoadState::Loaded(song) => song,
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", song.title);
    let _ = writeln!(out, "Artist: {}", song.artist);
    let _ = writeln!(out, "{}", song.description);
    match page.player() {
        Some(Player::Embed(url)) => {
            let _ = writeln!(out, "Video: {url}");
        }
        _ => {
            let _ = writeln!(out, "{INVALID_SOURCE_MESSAGE}");
        }
    }
    let _ = writeln!(out, "{} likes", song.likes);

    out.push_str("\nComments\n");
    if song.comments.is_empty() {
        out.push_str("  No comments yet.\n");
    }
    for comment in &song.comments {
        let _ = writeln!(
            out,
            "  {} ({}): {}",
            comment.creator,
            comment.created_at.format("%Y-%m-%d %H:%M"),
            comment.text
        );
    }
    out
}

pub fn add_song(page: &AddSongPage) -> String {
    match page.notice() {
        Some(notice) if notice.kind == NoticeKind::Success => format!("{}\n", notice.text),
        Some(notice) => format!("error: {}\n", notice.text),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use songbook_core::{Comment, PlaylistId, Song, SongId};

    #[test]
    fn song_without_embed_shows_invalid_source() {
        let mut page = SongPage::new();
        let ticket = page.open(SongId::new("s-1")).unwrap();
        let mut record = Song::new(SongId::new("s-1"), "Cats Eye", "Anri")
            .with_source("https://example.com/x");
        record.comments.push(Comment {
            text: "classic".into(),
            creator: "rin".into(),
            created_at: chrono::Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        });
        page.complete(ticket, Ok(record));

        let text = song(&page);
        assert!(text.contains("Invalid or unsupported YouTube URL."));
        assert!(text.contains("rin (2024-05-01 10:00): classic"));
    }

    #[test]
    fn empty_playlist_message() {
        let client = songbook_client::SongbookClient::new(songbook_client::ClientConfig::new(
            "https://h.example",
        ))
        .unwrap();
        let mut page = PlaylistSongsPage::new();
        let ticket = page.open(PlaylistId::new("p-1")).unwrap();
        page.complete(ticket, Ok(vec![]));

        let text = playlist_songs(&page, &client.thumbnails());
        assert!(text.starts_with("Playlist: Playlist p-1"));
        assert!(text.contains("No songs found."));
    }
}
