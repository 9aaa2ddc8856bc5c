/// Server error types
use crate::response::ApiResponse;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use openmusic_core::{CatalogError, ErrorKind};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Message sent in place of any server-caused failure
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServerError::Catalog(err) => err.kind(),
            ServerError::Config(_) => ErrorKind::Internal,
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        CatalogError::validation(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        CatalogError::validation(rejection.body_text()).into()
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let kind = self.kind();

        if kind.is_client_caused() {
            let status =
                StatusCode::from_u16(kind.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
            return (status, ApiResponse::fail(self.to_string())).into_response();
        }

        tracing::error!("Internal error: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiResponse::error(INTERNAL_ERROR_MESSAGE),
        )
            .into_response()
    }
}
