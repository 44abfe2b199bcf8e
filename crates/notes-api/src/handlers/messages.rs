//! Message handlers. Every operation is scoped to the authenticated caller.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::debug;

use notes_core::domain::MessageId;

use crate::dto::{MessageDto, MessageListResponse, MessageRequest};
use crate::error::ApiError;
use crate::extract::ValidJson;
use crate::middleware::CurrentUser;
use crate::response::{INVALID_MESSAGE_ID, INVALID_REQUEST_BODY};
use crate::state::AppState;

/// GET /api/messages
pub async fn list_messages(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<MessageListResponse>, ApiError> {
    let messages = state.message_service.list(current.user_id).await?;
    Ok(Json(MessageListResponse {
        messages: messages.into_iter().map(MessageDto::from).collect(),
    }))
}

/// POST /api/messages
pub async fn create_message(
    State(state): State<AppState>,
    current: CurrentUser,
    ValidJson(payload): ValidJson<MessageRequest>,
) -> Result<(StatusCode, Json<MessageDto>), ApiError> {
    let message = state
        .message_service
        .create(current.user_id, payload.body)
        .await?;
    Ok((StatusCode::CREATED, Json(MessageDto::from(message))))
}

/// PUT /api/messages/{id}
///
/// The id is checked before the body is decoded. Extractor rejections are
/// mapped here so they use the JSON error envelope.
pub async fn update_message(
    State(state): State<AppState>,
    current: CurrentUser,
    id: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<MessageDto>, ApiError> {
    let id: MessageId = id
        .ok()
        .and_then(|Path(raw)| raw.parse().ok())
        .ok_or_else(|| ApiError::bad_request(INVALID_MESSAGE_ID))?;
    let body = body.map_err(|e| {
        debug!("Failed to read request body: {}", e);
        ApiError::bad_request(INVALID_REQUEST_BODY)
    })?;
    let ValidJson(payload) = ValidJson::<MessageRequest>::from_bytes(&body)?;

    let message = state
        .message_service
        .update(id, current.user_id, payload.body)
        .await?;
    Ok(Json(MessageDto::from(message)))
}
