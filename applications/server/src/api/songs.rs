/// Songs API routes
use crate::{error::Result, extract::Payload, response::ApiResponse, state::AppState};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
};
use openmusic_core::{SongId, SongPayload, SongQuery};
use serde_json::{json, Value};

/// POST /songs
pub async fn create_song(
    State(app_state): State<AppState>,
    Payload(payload): Payload<SongPayload>,
) -> Result<(StatusCode, ApiResponse<Value>)> {
    let song_id = app_state.songs.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::data(json!({ "songId": song_id })),
    ))
}

/// GET /songs?title=&performer=
pub async fn list_songs(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<SongQuery>, QueryRejection>,
) -> Result<ApiResponse<Value>> {
    let Query(query) = query?;
    let songs = app_state.songs.search(&query).await?;
    Ok(ApiResponse::data(json!({ "songs": songs })))
}

/// GET /songs/:id
pub async fn get_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<ApiResponse<Value>> {
    let song = app_state.songs.get_by_id(&SongId::new(id)).await?;
    Ok(ApiResponse::data(json!({ "song": song })))
}

/// PUT /songs/:id
/// Replaces every field of the song
pub async fn update_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Payload(payload): Payload<SongPayload>,
) -> Result<ApiResponse> {
    app_state.songs.edit_by_id(&SongId::new(id), payload).await?;
    Ok(ApiResponse::message("Song updated successfully."))
}

/// DELETE /songs/:id
pub async fn delete_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<ApiResponse> {
    app_state.songs.delete_by_id(&SongId::new(id)).await?;
    Ok(ApiResponse::message("Song deleted successfully."))
}
