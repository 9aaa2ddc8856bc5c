/// Song service - CRUD and search over the catalog store
use chrono::Utc;
use openmusic_core::{
    CatalogError, CatalogStore, Result, Song, SongId, SongPayload, SongQuery, SongSummary,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct SongService {
    store: Arc<dyn CatalogStore>,
}

impl SongService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Persist a new song and return its id
    pub async fn create(&self, payload: SongPayload) -> Result<SongId> {
        let song = Song::new(payload, Utc::now());

        let id = self
            .store
            .insert_song(&song)
            .await?
            .ok_or_else(|| CatalogError::invariant("Failed to add song."))?;

        tracing::debug!("Created song {}", id);
        Ok(id)
    }

    /// Songs whose title and performer both contain the given filters.
    ///
    /// An empty result is reported as not found.
    pub async fn search(&self, query: &SongQuery) -> Result<Vec<SongSummary>> {
        let rows = self.store.search_songs(query).await?;

        if rows.is_empty() {
            return Err(CatalogError::not_found("Song not found."));
        }

        Ok(rows.into_iter().map(SongSummary::from).collect())
    }

    pub async fn get_by_id(&self, id: &SongId) -> Result<Song> {
        let row = self
            .store
            .song_row(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Song not found."))?;

        Song::try_from(row)
    }

    /// Replace every mutable field of a song
    pub async fn edit_by_id(&self, id: &SongId, payload: SongPayload) -> Result<()> {
        let affected = self.store.update_song(id, &payload, Utc::now()).await?;

        if affected == 0 {
            return Err(CatalogError::not_found(
                "Failed to update song. Id not found.",
            ));
        }

        tracing::debug!("Updated song {}", id);
        Ok(())
    }

    pub async fn delete_by_id(&self, id: &SongId) -> Result<()> {
        let affected = self.store.delete_song(id).await?;

        if affected == 0 {
            return Err(CatalogError::not_found(
                "Failed to delete song. Id not found.",
            ));
        }

        tracing::debug!("Deleted song {}", id);
        Ok(())
    }
}
