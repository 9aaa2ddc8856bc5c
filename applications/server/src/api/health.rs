/// Health check API routes
use crate::response::ApiResponse;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub version: String,
}

/// GET /health - Health check endpoint
pub async fn health() -> ApiResponse<HealthResponse> {
    ApiResponse::data(HealthResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
