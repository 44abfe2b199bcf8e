//! # Notes Security
//! 
//! Security utilities: password hashing, session token generation, session cookie policy.

pub mod password;
pub mod token;
pub mod cookie;

pub use cookie::{SameSite, SessionCookie};
pub use password::PasswordService;
pub use token::{generate_session_token, TokenError};
