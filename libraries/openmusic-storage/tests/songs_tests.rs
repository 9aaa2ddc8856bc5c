//! Integration tests for the songs vertical slice
//!
//! Covers:
//! - Insert and fetch round trips, including the unattached album case
//! - Title/performer search semantics (case-insensitive, ANDed, literal)
//! - Foreign key enforcement for album references
//! - Update and delete by id

mod test_helpers;

use chrono::Utc;
use openmusic_core::{types::*, CatalogError, ErrorKind};
use openmusic_storage::StorageError;
use test_helpers::*;

fn believe() -> SongPayload {
    SongPayload {
        title: "Believe".to_string(),
        year: 2020,
        genre: "Pop".to_string(),
        performer: "Cher".to_string(),
        duration: 0,
        album_id: String::new(),
    }
}

fn query(title: &str, performer: &str) -> SongQuery {
    SongQuery {
        title: title.to_string(),
        performer: performer.to_string(),
    }
}

#[tokio::test]
async fn test_insert_and_get_song() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let song = Song::new(believe(), Utc::now());
    let id = openmusic_storage::songs::insert(pool, &song)
        .await
        .expect("Failed to insert song")
        .expect("Insert returned no id");

    let row = openmusic_storage::songs::get_by_id(pool, &id)
        .await
        .unwrap()
        .expect("Song not found");

    assert_eq!(row.title, "Believe");
    assert_eq!(row.year, 2020);
    assert_eq!(row.genre, "Pop");
    assert_eq!(row.performer, "Cher");
    assert_eq!(row.duration, 0);
    assert_eq!(row.album_id, None);

    let mapped = Song::try_from(row).unwrap();
    assert_eq!(mapped, song);
}

#[tokio::test]
async fn test_get_missing_song_returns_none() {
    let test_db = TestDb::new().await;

    let row = openmusic_storage::songs::get_by_id(test_db.pool(), &SongId::new("missing"))
        .await
        .unwrap();

    assert!(row.is_none());
}

#[tokio::test]
async fn test_insert_with_unknown_album_violates_foreign_key() {
    let test_db = TestDb::new().await;

    let mut payload = believe();
    payload.album_id = "no-such-album".to_string();
    let song = Song::new(payload, Utc::now());

    let err = openmusic_storage::songs::insert(test_db.pool(), &song)
        .await
        .expect_err("Insert should fail");
    assert!(err.is_foreign_key_violation());

    let err: CatalogError = err.into();
    assert_eq!(err.kind(), ErrorKind::Invariant);
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_song(pool, "Crazy in Love", "Beyonce", None).await;
    create_test_song(pool, "LOVE Story", "Taylor Swift", None).await;
    create_test_song(pool, "Halo", "Beyonce", None).await;

    let rows = openmusic_storage::songs::search(pool, &query("love", ""))
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert!(rows
        .iter()
        .all(|row| row.title.to_lowercase().contains("love")));
}

#[tokio::test]
async fn test_search_filters_are_anded() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_song(pool, "Crazy in Love", "Beyonce", None).await;
    create_test_song(pool, "LOVE Story", "Taylor Swift", None).await;
    create_test_song(pool, "Halo", "Beyonce", None).await;

    let rows = openmusic_storage::songs::search(pool, &query("love", "BEY"))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Crazy in Love");
    assert_eq!(rows[0].performer, "Beyonce");
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_song(pool, "ÉTÉ INDIEN", "Joe Dassin", None).await;
    create_test_song(pool, "Über Alles", "BEYONCÉ", None).await;

    for title in ["ÉTÉ", "été", "Été Indien"] {
        let rows = openmusic_storage::songs::search(pool, &query(title, ""))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1, "title filter {title:?}");
        assert_eq!(rows[0].title, "ÉTÉ INDIEN");
    }

    let rows = openmusic_storage::songs::search(pool, &query("über", "beyoncé"))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Über Alles");
}

#[tokio::test]
async fn test_search_matches_updated_title() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let id = create_test_song(pool, "Believe", "Cher", None).await;

    let mut payload = believe();
    payload.title = "Ölmühle".to_string();
    openmusic_storage::songs::update(pool, &id, &payload, Utc::now())
        .await
        .unwrap();

    let rows = openmusic_storage::songs::search(pool, &query("ÖLMÜHLE", ""))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id.as_str());

    assert!(openmusic_storage::songs::search(pool, &query("believe", ""))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_empty_search_returns_all_songs() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    assert!(openmusic_storage::songs::search(pool, &SongQuery::default())
        .await
        .unwrap()
        .is_empty());

    create_test_song(pool, "Yellow", "Coldplay", None).await;
    create_test_song(pool, "Clocks", "Coldplay", None).await;

    let rows = openmusic_storage::songs::search(pool, &SongQuery::default())
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    create_test_song(pool, "100% Pure Love", "Crystal Waters", None).await;
    create_test_song(pool, "100 Years", "Five for Fighting", None).await;

    let rows = openmusic_storage::songs::search(pool, &query("100%", ""))
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "100% Pure Love");
}

#[tokio::test]
async fn test_update_song_attaches_album() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let album_id = create_test_album(pool, "Believe", 1998).await;
    let song_id = create_test_song(pool, "Believe", "Cher", None).await;

    let mut payload = believe();
    payload.duration = 239;
    payload.album_id = album_id.to_string();

    let affected = openmusic_storage::songs::update(pool, &song_id, &payload, Utc::now())
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let row = openmusic_storage::songs::get_by_id(pool, &song_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.duration, 239);
    assert_eq!(row.album_id.as_deref(), Some(album_id.as_str()));
}

#[tokio::test]
async fn test_delete_song() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let song_id = create_test_song(pool, "Yellow", "Coldplay", None).await;

    assert_eq!(openmusic_storage::songs::delete(pool, &song_id).await.unwrap(), 1);
    assert_eq!(openmusic_storage::songs::delete(pool, &song_id).await.unwrap(), 0);
    assert!(openmusic_storage::songs::get_by_id(pool, &song_id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_non_constraint_errors_are_internal() {
    let test_db = TestDb::new().await;
    test_db.pool().close().await;

    let err = openmusic_storage::songs::get_by_id(test_db.pool(), &SongId::new("x"))
        .await
        .expect_err("Closed pool should fail");
    assert!(matches!(err, StorageError::Database(_)));

    let err: CatalogError = err.into();
    assert!(!err.is_client_caused());
}
