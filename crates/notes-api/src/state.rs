use std::sync::Arc;

use notes_core::repositories::{
    HealthRepository, MessageRepository, SessionRepository, UserRepository,
};
use notes_core::services::{AuthService, MessageService, SessionManager};
use notes_security::SessionCookie;

/// Application state shared across handlers. Store access is threaded in
/// through the repository ports; there is no global handle.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub session_manager: Arc<SessionManager>,
    pub message_service: Arc<MessageService>,
    pub health: Arc<dyn HealthRepository>,
    pub session_cookie: Arc<SessionCookie>,
}

impl AppState {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        session_repo: Arc<dyn SessionRepository>,
        message_repo: Arc<dyn MessageRepository>,
        health: Arc<dyn HealthRepository>,
        session_cookie: SessionCookie,
        session_ttl_seconds: i64,
    ) -> Self {
        let session_manager = Arc::new(SessionManager::new(session_repo, session_ttl_seconds));
        Self {
            auth_service: Arc::new(AuthService::new(user_repo, session_manager.clone())),
            session_manager,
            message_service: Arc::new(MessageService::new(message_repo)),
            health,
            session_cookie: Arc::new(session_cookie),
        }
    }
}
