/// Album service - CRUD over the catalog store
use chrono::Utc;
use openmusic_core::{
    mapping, Album, AlbumId, AlbumPayload, AlbumWithSongs, CatalogError, CatalogStore, Result,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AlbumService {
    store: Arc<dyn CatalogStore>,
}

impl AlbumService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Persist a new album and return its id
    pub async fn create(&self, payload: AlbumPayload) -> Result<AlbumId> {
        let album = Album::new(payload, Utc::now());

        let id = self
            .store
            .insert_album(&album)
            .await?
            .ok_or_else(|| CatalogError::invariant("Failed to add album."))?;

        tracing::debug!("Created album {}", id);
        Ok(id)
    }

    /// Fetch an album together with its songs
    pub async fn get_by_id(&self, id: &AlbumId) -> Result<AlbumWithSongs> {
        let rows = self.store.album_rows(id).await?;

        mapping::album_with_songs(rows)?
            .ok_or_else(|| CatalogError::not_found("Album not found."))
    }

    pub async fn edit_by_id(&self, id: &AlbumId, payload: AlbumPayload) -> Result<()> {
        let affected = self.store.update_album(id, &payload, Utc::now()).await?;

        if affected == 0 {
            return Err(CatalogError::not_found(
                "Failed to update album. Id not found.",
            ));
        }

        tracing::debug!("Updated album {}", id);
        Ok(())
    }

    pub async fn delete_by_id(&self, id: &AlbumId) -> Result<()> {
        let affected = self.store.delete_album(id).await?;

        if affected == 0 {
            return Err(CatalogError::not_found(
                "Failed to delete album. Id not found.",
            ));
        }

        tracing::debug!("Deleted album {}", id);
        Ok(())
    }
}
