//! Album types

use super::{AlbumId, SongSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Album {
    /// Build a new album with a fresh id, stamped with `now`.
    pub fn new(payload: AlbumPayload, now: DateTime<Utc>) -> Self {
        Self {
            id: AlbumId::generate(),
            name: payload.name,
            year: payload.year,
            created_at: now,
            updated_at: now,
        }
    }
}

/// An album together with the songs attached to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumWithSongs {
    #[serde(flatten)]
    pub album: Album,
    pub songs: Vec<SongSummary>,
}

/// Mutable album fields, as accepted by create and edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumPayload {
    pub name: String,
    pub year: i32,
}
