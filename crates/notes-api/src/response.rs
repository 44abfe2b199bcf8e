//! Error envelope and the fixed client-facing messages

use serde::{Deserialize, Serialize};

pub const UNAUTHORIZED: &str = "unauthorized";
pub const INVALID_CREDENTIALS: &str = "invalid username or password";
pub const INVALID_REQUEST_BODY: &str = "invalid request body";
pub const INVALID_MESSAGE_ID: &str = "invalid message id";
pub const MESSAGE_NOT_FOUND: &str = "message not found";
pub const INTERNAL_SERVER_ERROR: &str = "internal server error";
pub const FAILED_TO_CREATE_SESSION: &str = "failed to create session";
pub const FAILED_TO_DELETE_SESSION: &str = "failed to delete session";

/// Every error response has exactly this shape.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
