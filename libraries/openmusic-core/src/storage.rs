//! Storage port for the catalog

use crate::error::Result;
use crate::mapping::{AlbumSongRow, SongRow, SongSummaryRow};
use crate::types::{Album, AlbumId, AlbumPayload, Song, SongId, SongPayload, SongQuery};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage backend used by the catalog services
///
/// Implementations execute exactly one statement per call and report raw
/// outcomes (rows, affected counts, returned ids). Deciding what an empty
/// result means is left to the caller.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    // ========================================================================
    // Albums
    // ========================================================================

    /// Insert an album, returning the id the store reports back
    async fn insert_album(&self, album: &Album) -> Result<Option<AlbumId>>;

    /// Rows of the album joined with its songs (empty if the album is absent)
    async fn album_rows(&self, id: &AlbumId) -> Result<Vec<AlbumSongRow>>;

    /// Overwrite name/year and refresh `updated_at`, returning rows affected
    async fn update_album(
        &self,
        id: &AlbumId,
        payload: &AlbumPayload,
        updated_at: DateTime<Utc>,
    ) -> Result<u64>;

    /// Delete an album, returning rows affected
    async fn delete_album(&self, id: &AlbumId) -> Result<u64>;

    // ========================================================================
    // Songs
    // ========================================================================

    /// Insert a song, returning the id the store reports back
    async fn insert_song(&self, song: &Song) -> Result<Option<SongId>>;

    /// Case-insensitive substring search on title AND performer
    async fn search_songs(&self, query: &SongQuery) -> Result<Vec<SongSummaryRow>>;

    /// Fetch a single song row
    async fn song_row(&self, id: &SongId) -> Result<Option<SongRow>>;

    /// Overwrite every mutable field and refresh `updated_at`, returning rows affected
    async fn update_song(
        &self,
        id: &SongId,
        payload: &SongPayload,
        updated_at: DateTime<Utc>,
    ) -> Result<u64>;

    /// Delete a song, returning rows affected
    async fn delete_song(&self, id: &SongId) -> Result<u64>;
}
