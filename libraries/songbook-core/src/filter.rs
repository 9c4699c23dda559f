//! Search filtering for song lists.

use crate::types::Song;

/// Songs whose title or artist contains `term`, ignoring case.
///
/// Borrows from `songs`; the base list is never modified. An empty term
/// matches everything.
pub fn filter_songs<'a>(songs: &'a [Song], term: &str) -> Vec<&'a Song> {
    let needle = term.to_lowercase();
    songs
        .iter()
        .filter(|song| matches(song, &needle))
        .collect()
}

fn matches(song: &Song, needle: &str) -> bool {
    song.title.to_lowercase().contains(needle) || song.artist.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SongId;

    fn songs() -> Vec<Song> {
        vec![
            Song::new(SongId::new("1"), "Cats Eye", "Anri"),
            Song::new(SongId::new("2"), "Dogs", "Pink Floyd"),
            Song::new(SongId::new("3"), "Echoes", "PINK FLOYD"),
        ]
    }

    #[test]
    fn matches_title_case_insensitively() {
        let base = songs();
        let hits = filter_songs(&base, "cat");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Cats Eye");
    }

    #[test]
    fn matches_artist() {
        let base = songs();
        let titles: Vec<_> = filter_songs(&base, "floyd").iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Dogs", "Echoes"]);
    }

    #[test]
    fn empty_term_returns_all_and_base_is_untouched() {
        let base = songs();
        assert_eq!(filter_songs(&base, "").len(), 3);
        assert!(filter_songs(&base, "zzz").is_empty());
        assert_eq!(base.len(), 3);
    }
}
