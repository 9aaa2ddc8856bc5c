use crate::{albums, songs};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use openmusic_core::{
    error::Result,
    mapping::{AlbumSongRow, SongRow, SongSummaryRow},
    storage::CatalogStore,
    types::*,
};
use sqlx::SqlitePool;

/// Catalog store backed by a `SQLite` pool
#[derive(Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalog {
    // Albums
    async fn insert_album(&self, album: &Album) -> Result<Option<AlbumId>> {
        Ok(albums::insert(&self.pool, album).await?)
    }

    async fn album_rows(&self, id: &AlbumId) -> Result<Vec<AlbumSongRow>> {
        Ok(albums::get_with_songs(&self.pool, id).await?)
    }

    async fn update_album(
        &self,
        id: &AlbumId,
        payload: &AlbumPayload,
        updated_at: DateTime<Utc>,
    ) -> Result<u64> {
        Ok(albums::update(&self.pool, id, payload, updated_at).await?)
    }

    async fn delete_album(&self, id: &AlbumId) -> Result<u64> {
        Ok(albums::delete(&self.pool, id).await?)
    }

    // Songs
    async fn insert_song(&self, song: &Song) -> Result<Option<SongId>> {
        Ok(songs::insert(&self.pool, song).await?)
    }

    async fn search_songs(&self, query: &SongQuery) -> Result<Vec<SongSummaryRow>> {
        Ok(songs::search(&self.pool, query).await?)
    }

    async fn song_row(&self, id: &SongId) -> Result<Option<SongRow>> {
        Ok(songs::get_by_id(&self.pool, id).await?)
    }

    async fn update_song(
        &self,
        id: &SongId,
        payload: &SongPayload,
        updated_at: DateTime<Utc>,
    ) -> Result<u64> {
        Ok(songs::update(&self.pool, id, payload, updated_at).await?)
    }

    async fn delete_song(&self, id: &SongId) -> Result<u64> {
        Ok(songs::delete(&self.pool, id).await?)
    }
}
