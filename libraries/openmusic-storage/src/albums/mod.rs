use crate::error::Result;
use chrono::{DateTime, Utc};
use openmusic_core::{
    mapping::{format_timestamp, AlbumSongRow},
    types::{Album, AlbumId, AlbumPayload},
};
use sqlx::{Row, SqlitePool};

pub async fn insert(pool: &SqlitePool, album: &Album) -> Result<Option<AlbumId>> {
    let row = sqlx::query(
        "INSERT INTO albums (id, name, year, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id",
    )
    .bind(album.id.as_str())
    .bind(&album.name)
    .bind(album.year)
    .bind(format_timestamp(album.created_at))
    .bind(format_timestamp(album.updated_at))
    .fetch_optional(pool)
    .await?;

    Ok(row
        .map(|row| row.try_get::<String, _>("id"))
        .transpose()?
        .map(AlbumId::new))
}

/// Album joined with its songs, one row per song
pub async fn get_with_songs(pool: &SqlitePool, id: &AlbumId) -> Result<Vec<AlbumSongRow>> {
    let rows = sqlx::query(
        "SELECT a.id, a.name, a.year, a.created_at, a.updated_at,
                s.id AS song_id, s.title AS song_title, s.performer AS song_performer
         FROM albums a
         LEFT JOIN songs s ON s.album_id = a.id
         WHERE a.id = ?
         ORDER BY s.created_at, s.id",
    )
    .bind(id.as_str())
    .fetch_all(pool)
    .await?;

    let rows = rows
        .into_iter()
        .map(|row| {
            Ok(AlbumSongRow {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                year: row.try_get("year")?,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
                song_id: row.try_get("song_id")?,
                song_title: row.try_get("song_title")?,
                song_performer: row.try_get("song_performer")?,
            })
        })
        .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?;

    Ok(rows)
}

pub async fn update(
    pool: &SqlitePool,
    id: &AlbumId,
    album: &AlbumPayload,
    updated_at: DateTime<Utc>,
) -> Result<u64> {
    let result = sqlx::query("UPDATE albums SET name = ?, year = ?, updated_at = ? WHERE id = ?")
        .bind(&album.name)
        .bind(album.year)
        .bind(format_timestamp(updated_at))
        .bind(id.as_str())
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn delete(pool: &SqlitePool, id: &AlbumId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM albums WHERE id = ?")
        .bind(id.as_str())
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
