/// Albums API routes
use crate::{error::Result, extract::Payload, response::ApiResponse, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use openmusic_core::{AlbumId, AlbumPayload};
use serde_json::{json, Value};

/// POST /albums
pub async fn create_album(
    State(app_state): State<AppState>,
    Payload(payload): Payload<AlbumPayload>,
) -> Result<(StatusCode, ApiResponse<Value>)> {
    let album_id = app_state.albums.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        ApiResponse::data(json!({ "albumId": album_id })),
    ))
}

/// GET /albums/:id
/// Album details with its songs
pub async fn get_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<ApiResponse<Value>> {
    let album = app_state.albums.get_by_id(&AlbumId::new(id)).await?;
    Ok(ApiResponse::data(json!({ "album": album })))
}

/// PUT /albums/:id
pub async fn update_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Payload(payload): Payload<AlbumPayload>,
) -> Result<ApiResponse> {
    app_state
        .albums
        .edit_by_id(&AlbumId::new(id), payload)
        .await?;
    Ok(ApiResponse::message("Album updated successfully."))
}

/// DELETE /albums/:id
pub async fn delete_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<ApiResponse> {
    app_state.albums.delete_by_id(&AlbumId::new(id)).await?;
    Ok(ApiResponse::message("Album deleted successfully."))
}
