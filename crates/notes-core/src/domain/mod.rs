//! # Notes Core - Domain Module
//! 
//! Domain entities for the notes service.

pub mod user;
pub mod session;
pub mod message;

pub use user::{User, UserInfo};
pub use session::{IssuedSession, Session};
pub use message::{Message, MessageId, NewMessage};
