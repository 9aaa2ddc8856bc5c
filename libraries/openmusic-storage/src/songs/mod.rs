use crate::error::Result;
use chrono::{DateTime, Utc};
use openmusic_core::{
    mapping::{format_timestamp, SongRow, SongSummaryRow},
    types::{Song, SongId, SongPayload, SongQuery},
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

pub async fn insert(pool: &SqlitePool, song: &Song) -> Result<Option<SongId>> {
    let row = sqlx::query(
        "INSERT INTO songs (id, title, title_lower, year, genre, performer, performer_lower, duration, album_id, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
    )
    .bind(song.id.as_str())
    .bind(&song.title)
    .bind(song.title.to_lowercase())
    .bind(song.year)
    .bind(&song.genre)
    .bind(&song.performer)
    .bind(song.performer.to_lowercase())
    .bind(song.duration)
    .bind(song.album())
    .bind(format_timestamp(song.created_at))
    .bind(format_timestamp(song.updated_at))
    .fetch_optional(pool)
    .await?;

    Ok(row
        .map(|row| row.try_get::<String, _>("id"))
        .transpose()?
        .map(SongId::new))
}

/// Turn a filter into a `LIKE` pattern matching it as a literal substring
fn like_pattern(filter: &str) -> String {
    let escaped = filter
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// Search songs by title AND performer (case-insensitive substring match)
///
/// Matches against the `*_lower` columns, which are lowercased with the same
/// function as the filters.
pub async fn search(pool: &SqlitePool, query: &SongQuery) -> Result<Vec<SongSummaryRow>> {
    let rows = sqlx::query(
        "SELECT id, title, performer
         FROM songs
         WHERE title_lower LIKE ? ESCAPE '\\'
           AND performer_lower LIKE ? ESCAPE '\\'
         ORDER BY title, id",
    )
    .bind(like_pattern(&query.title))
    .bind(like_pattern(&query.performer))
    .fetch_all(pool)
    .await?;

    let rows = rows
        .into_iter()
        .map(|row| {
            Ok(SongSummaryRow {
                id: row.try_get("id")?,
                title: row.try_get("title")?,
                performer: row.try_get("performer")?,
            })
        })
        .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?;

    Ok(rows)
}

fn song_row(row: &SqliteRow) -> std::result::Result<SongRow, sqlx::Error> {
    Ok(SongRow {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        year: row.try_get("year")?,
        genre: row.try_get("genre")?,
        performer: row.try_get("performer")?,
        duration: row.try_get("duration")?,
        album_id: row.try_get("album_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub async fn get_by_id(pool: &SqlitePool, id: &SongId) -> Result<Option<SongRow>> {
    let row = sqlx::query(
        "SELECT id, title, year, genre, performer, duration, album_id, created_at, updated_at
         FROM songs WHERE id = ?",
    )
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(song_row).transpose()?)
}

pub async fn update(
    pool: &SqlitePool,
    id: &SongId,
    song: &SongPayload,
    updated_at: DateTime<Utc>,
) -> Result<u64> {
    let result = sqlx::query(
        "UPDATE songs
         SET title = ?, title_lower = ?, year = ?, genre = ?, performer = ?, performer_lower = ?,
             duration = ?, album_id = ?, updated_at = ?
         WHERE id = ?",
    )
    .bind(&song.title)
    .bind(song.title.to_lowercase())
    .bind(song.year)
    .bind(&song.genre)
    .bind(&song.performer)
    .bind(song.performer.to_lowercase())
    .bind(song.duration)
    .bind(song.album())
    .bind(format_timestamp(updated_at))
    .bind(id.as_str())
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete(pool: &SqlitePool, id: &SongId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id.as_str())
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
