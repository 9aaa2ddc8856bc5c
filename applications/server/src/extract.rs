/// Request extractors
use crate::{
    error::ServerError,
    validation::{self, PayloadSchema},
};
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

/// JSON body that passed its schema validator
///
/// Malformed JSON and schema violations both reject with a validation error,
/// so handlers only ever see well-formed payloads.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: PayloadSchema,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        Ok(Payload(validation::parse(value)?))
    }
}
