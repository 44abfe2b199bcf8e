//! Repository traits (ports)

pub mod user_repository;
pub mod session_repository;
pub mod message_repository;
pub mod health_repository;

pub use user_repository::UserRepository;
pub use session_repository::SessionRepository;
pub use message_repository::MessageRepository;
pub use health_repository::HealthRepository;

#[cfg(any(test, feature = "mock"))]
pub use user_repository::MockUserRepository;
#[cfg(any(test, feature = "mock"))]
pub use session_repository::MockSessionRepository;
#[cfg(any(test, feature = "mock"))]
pub use message_repository::MockMessageRepository;
#[cfg(any(test, feature = "mock"))]
pub use health_repository::MockHealthRepository;
