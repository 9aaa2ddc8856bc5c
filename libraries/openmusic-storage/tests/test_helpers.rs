//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations and constraints.

#![allow(dead_code)]

use chrono::Utc;
use openmusic_core::types::*;
use openmusic_storage::SqliteCatalog;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = openmusic_storage::create_pool(&db_url, 5)
            .await
            .expect("Failed to create pool");

        openmusic_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Catalog store over this database
    pub fn catalog(&self) -> SqliteCatalog {
        SqliteCatalog::new(self.pool.clone())
    }
}

/// Test fixture: Insert an album
pub async fn create_test_album(pool: &SqlitePool, name: &str, year: i32) -> AlbumId {
    let album = Album::new(
        AlbumPayload {
            name: name.to_string(),
            year,
        },
        Utc::now(),
    );

    openmusic_storage::albums::insert(pool, &album)
        .await
        .expect("Failed to create test album")
        .expect("Insert returned no id")
}

/// Test fixture: Insert a song, optionally attached to an album
pub async fn create_test_song(
    pool: &SqlitePool,
    title: &str,
    performer: &str,
    album_id: Option<&AlbumId>,
) -> SongId {
    let song = Song::new(
        SongPayload {
            title: title.to_string(),
            year: 2020,
            genre: "Pop".to_string(),
            performer: performer.to_string(),
            duration: 180,
            album_id: album_id.map(|id| id.to_string()).unwrap_or_default(),
        },
        Utc::now(),
    );

    openmusic_storage::songs::insert(pool, &song)
        .await
        .expect("Failed to create test song")
        .expect("Insert returned no id")
}
