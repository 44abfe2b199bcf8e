//! Application-wide constants

pub const SESSION_COOKIE_NAME: &str = "session_token";
/// 30 days.
pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 60 * 60 * 24 * 30;
/// Random bytes per session token (hex encoded to twice this length).
pub const SESSION_TOKEN_BYTES: usize = 32;
pub const PRODUCTION_ENV: &str = "production";
