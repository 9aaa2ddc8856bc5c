//! Song types

use super::SongId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A song
///
/// `album_id` is empty when the song is not attached to an album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    pub duration: i32,
    pub album_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Song {
    /// Build a new song with a fresh id, stamped with `now`.
    pub fn new(payload: SongPayload, now: DateTime<Utc>) -> Self {
        Self {
            id: SongId::generate(),
            title: payload.title,
            year: payload.year,
            genre: payload.genre,
            performer: payload.performer,
            duration: payload.duration,
            album_id: payload.album_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// The album this song belongs to, if any
    pub fn album(&self) -> Option<&str> {
        (!self.album_id.is_empty()).then_some(self.album_id.as_str())
    }
}

/// Lightweight song view used by search results and album listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongSummary {
    pub id: SongId,
    pub title: String,
    pub performer: String,
}

/// Mutable song fields, as accepted by create and edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongPayload {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    #[serde(default)]
    pub duration: i32,
    #[serde(default)]
    pub album_id: String,
}

impl SongPayload {
    /// Album reference to persist; an empty id means "unattached"
    pub fn album(&self) -> Option<&str> {
        (!self.album_id.is_empty()).then_some(self.album_id.as_str())
    }
}

/// Song search filters. Empty filters match every song.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongQuery {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub performer: String,
}
