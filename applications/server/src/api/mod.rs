/// API route modules
pub mod albums;
pub mod health;
pub mod songs;

use crate::{error::ServerError, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use openmusic_core::CatalogError;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router with every route and response layer
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        // Albums
        .route("/albums", post(albums::create_album))
        .route(
            "/albums/:id",
            get(albums::get_album)
                .put(albums::update_album)
                .delete(albums::delete_album),
        )
        // Songs
        .route(
            "/songs",
            get(songs::list_songs).post(songs::create_song),
        )
        .route(
            "/songs/:id",
            get(songs::get_song)
                .put(songs::update_song)
                .delete(songs::delete_song),
        )
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn route_not_found() -> ServerError {
    CatalogError::not_found("Route not found.").into()
}
