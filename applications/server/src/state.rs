/// Shared application state
use crate::services::{AlbumService, SongService};
use openmusic_core::CatalogStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub albums: AlbumService,
    pub songs: SongService,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            albums: AlbumService::new(Arc::clone(&store)),
            songs: SongService::new(store),
        }
    }
}
