//! Flat storage rows and their conversion into domain shapes
//!
//! Storage implementations return these rows untouched; the services turn them
//! into `Album`, `AlbumWithSongs`, `Song` and `SongSummary` values.

use crate::error::{CatalogError, Result};
use crate::types::{Album, AlbumId, AlbumWithSongs, Song, SongId, SongSummary};
use chrono::{DateTime, SecondsFormat, Utc};

/// One row of `albums LEFT JOIN songs`.
///
/// The `song_*` columns are `None` when the album has no songs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumSongRow {
    pub id: String,
    pub name: String,
    pub year: i64,
    pub created_at: String,
    pub updated_at: String,
    pub song_id: Option<String>,
    pub song_title: Option<String>,
    pub song_performer: Option<String>,
}

/// One row of the `songs` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRow {
    pub id: String,
    pub title: String,
    pub year: i64,
    pub genre: String,
    pub performer: String,
    pub duration: i64,
    pub album_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Projection of a song row used by searches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongSummaryRow {
    pub id: String,
    pub title: String,
    pub performer: String,
}

/// Format a timestamp the way it is stored
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a stored timestamp
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| CatalogError::mapping(format!("invalid timestamp {raw:?}: {e}")))
}

fn narrow(field: &str, value: i64) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| CatalogError::mapping(format!("{field} out of range: {value}")))
}

/// Merge the rows of an album/songs join into a single album.
///
/// Returns `None` when there are no rows, i.e. the album does not exist.
pub fn album_with_songs(rows: Vec<AlbumSongRow>) -> Result<Option<AlbumWithSongs>> {
    let mut rows = rows.into_iter();
    let Some(first) = rows.next() else {
        return Ok(None);
    };

    let album = Album {
        id: AlbumId::new(first.id.clone()),
        name: first.name.clone(),
        year: narrow("year", first.year)?,
        created_at: parse_timestamp(&first.created_at)?,
        updated_at: parse_timestamp(&first.updated_at)?,
    };

    let songs = std::iter::once(first)
        .chain(rows)
        .filter_map(|row| {
            let id = row.song_id?;
            Some(SongSummary {
                id: SongId::new(id),
                title: row.song_title.unwrap_or_default(),
                performer: row.song_performer.unwrap_or_default(),
            })
        })
        .collect();

    Ok(Some(AlbumWithSongs { album, songs }))
}

impl TryFrom<SongRow> for Song {
    type Error = CatalogError;

    fn try_from(row: SongRow) -> Result<Self> {
        Ok(Song {
            id: SongId::new(row.id),
            title: row.title,
            year: narrow("year", row.year)?,
            genre: row.genre,
            performer: row.performer,
            duration: narrow("duration", row.duration)?,
            album_id: row.album_id.unwrap_or_default(),
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

impl From<SongSummaryRow> for SongSummary {
    fn from(row: SongSummaryRow) -> Self {
        SongSummary {
            id: SongId::new(row.id),
            title: row.title,
            performer: row.performer,
        }
    }
}
