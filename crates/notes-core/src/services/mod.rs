//! Domain services (business logic)

pub mod session_service;
pub mod auth_service;
pub mod message_service;

pub use session_service::SessionManager;
pub use auth_service::{AuthService, LoginResult};
pub use message_service::MessageService;
