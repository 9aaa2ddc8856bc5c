//! Common test utilities and fixtures
//!
//! The app is backed by a REAL SQLite file in a temp dir so migrations and
//! foreign keys behave as in production.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use openmusic_server::{api, state::AppState};
use openmusic_storage::SqliteCatalog;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router over a fresh database; keep the `TempDir` alive for the test
pub async fn create_test_app() -> (Router, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let pool = openmusic_storage::create_pool(&db_url, 5).await.unwrap();
    openmusic_storage::run_migrations(&pool).await.unwrap();

    let app_state = AppState::new(Arc::new(SqliteCatalog::new(pool)));
    (api::create_router(app_state), temp_dir)
}

/// Send a request and return status plus parsed JSON body
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (u16, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    read_json(response).await
}

/// Send a raw, possibly malformed, JSON body
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> (u16, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    read_json(response).await
}

pub async fn read_json(response: Response<Body>) -> (u16, Value) {
    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Test fixtures
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn album(name: &str, year: i64) -> Value {
        json!({ "name": name, "year": year })
    }

    pub fn song(title: &str, performer: &str) -> Value {
        json!({
            "title": title,
            "year": 2020,
            "genre": "Pop",
            "performer": performer
        })
    }
}
