/// Domain types for Songbook
mod de;
mod ids;
mod playlist;
mod session;
mod song;
mod thumbnail;

pub use ids::{PlaylistId, SongId};
pub use playlist::{PlaylistDetail, PlaylistSummary};
pub use session::Session;
pub use song::{Comment, Song};
pub use thumbnail::Thumbnail;
