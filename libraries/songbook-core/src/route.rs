//! Client-side navigation targets.

use crate::types::{PlaylistId, SongId};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A page of the client, addressable by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/login`
    Login,
    /// `/playlists`
    Playlists,
    /// `/songPlaylists/{id}`
    PlaylistSongs(PlaylistId),
    /// `/song/{id}`
    Song(SongId),
    /// `/addSong`
    AddSong,
}

/// Path that does not name any page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown route: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.trim_start_matches('/').split('/').collect();

        match segments.as_slice() {
            ["login"] => Ok(Self::Login),
            ["playlists"] => Ok(Self::Playlists),
            ["addSong"] => Ok(Self::AddSong),
            ["songPlaylists", id] if !id.is_empty() => Ok(Self::PlaylistSongs(PlaylistId::new(*id))),
            ["song", id] if !id.is_empty() => Ok(Self::Song(SongId::new(*id))),
            _ => Err(UnknownRoute(path.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "/login"),
            Self::Playlists => write!(f, "/playlists"),
            Self::PlaylistSongs(id) => write!(f, "/songPlaylists/{id}"),
            Self::Song(id) => write!(f, "/song/{id}"),
            Self::AddSong => write!(f, "/addSong"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_page() {
        assert_eq!("/login".parse::<Route>(), Ok(Route::Login));
        assert_eq!("/playlists/".parse::<Route>(), Ok(Route::Playlists));
        assert_eq!("/addSong".parse::<Route>(), Ok(Route::AddSong));
        assert_eq!(
            "/songPlaylists/p-1".parse::<Route>(),
            Ok(Route::PlaylistSongs(PlaylistId::new("p-1")))
        );
        assert_eq!("/song/s-1".parse::<Route>(), Ok(Route::Song(SongId::new("s-1"))));
    }

    #[test]
    fn rejects_unknown_paths() {
        for path in ["/", "/song", "/song/", "/songs/1", "/song/1/extra", "/admin"] {
            assert!(path.parse::<Route>().is_err(), "{path}");
        }
    }

    #[test]
    fn display_is_inverse_of_parse() {
        let route = Route::PlaylistSongs(PlaylistId::new("abc"));
        assert_eq!(route.to_string(), "/songPlaylists/abc");
        assert_eq!(route.to_string().parse::<Route>().unwrap(), route);
    }
}
