use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use notes_core::DomainError;
use thiserror::Error;

use crate::response::{self, ErrorResponse};

/// HTTP-facing error. The `String` payloads of server-side variants are log
/// detail only; clients always receive a fixed message.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Session creation failed: {0}")]
    SessionCreationFailed(String),

    #[error("Session deletion failed: {0}")]
    SessionDeletionFailed(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn bad_request(message: &str) -> Self {
        ApiError::BadRequest(message.to_string())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::CredentialMissing
            | DomainError::SessionNotFound
            | DomainError::UserNotFound => ApiError::Unauthorized,
            DomainError::InvalidCredentials => ApiError::InvalidCredentials,
            DomainError::MessageNotFound => ApiError::NotFound(response::MESSAGE_NOT_FOUND.to_string()),
            DomainError::ValidationError(msg) => ApiError::BadRequest(msg),
            DomainError::SessionCreationFailed(detail) => ApiError::SessionCreationFailed(detail),
            DomainError::SessionDeletionFailed(detail) => ApiError::SessionDeletionFailed(detail),
            other @ (DomainError::RandomSourceError(_)
            | DomainError::PasswordHashError(_)
            | DomainError::DatabaseError(_)) => ApiError::InternalError(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized => {
                tracing::debug!("Unauthorized request");
                (StatusCode::UNAUTHORIZED, response::UNAUTHORIZED.to_string())
            },
            ApiError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, response::INVALID_CREDENTIALS.to_string())
            },
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            },
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            },
            ApiError::SessionCreationFailed(detail) => {
                tracing::error!("Session creation failed: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, response::FAILED_TO_CREATE_SESSION.to_string())
            },
            ApiError::SessionDeletionFailed(detail) => {
                tracing::error!("Session deletion failed: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, response::FAILED_TO_DELETE_SESSION.to_string())
            },
            ApiError::InternalError(detail) => {
                tracing::error!("Internal error: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, response::INTERNAL_SERVER_ERROR.to_string())
            },
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
