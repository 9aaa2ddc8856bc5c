mod album;
mod ids;
mod song;

pub use album::{Album, AlbumPayload, AlbumWithSongs};
pub use ids::{AlbumId, SongId, ID_LENGTH};
pub use song::{Song, SongPayload, SongQuery, SongSummary};
