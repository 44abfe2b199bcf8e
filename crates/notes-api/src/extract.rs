//! Strict JSON body extraction

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::response::INVALID_REQUEST_BODY;

/// Like `axum::Json`, but independent of `Content-Type` and every failure
/// (bad syntax, wrong shape, unknown field) is the same 400 envelope.
pub struct ValidJson<T>(pub T);

impl<T: DeserializeOwned> ValidJson<T> {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(bytes).map(ValidJson).map_err(|e| {
            debug!("Rejected request body: {}", e);
            ApiError::bad_request(INVALID_REQUEST_BODY)
        })
    }
}

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            debug!("Failed to read request body: {}", e);
            ApiError::bad_request(INVALID_REQUEST_BODY)
        })?;
        Self::from_bytes(&bytes)
    }
}
