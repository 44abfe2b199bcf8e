//! Password hashing with bcrypt

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Hash error: {0}")]
    HashError(String),
}

pub struct PasswordService;

impl PasswordService {
    pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

    pub fn hash_with_cost(password: &str, cost: u32) -> Result<String, PasswordError> {
        bcrypt::hash(password, cost).map_err(|e| PasswordError::HashError(e.to_string()))
    }

    /// Salted, constant-time comparison. A stored hash that cannot be parsed
    /// is reported as an error so callers can log it, but must be treated as
    /// a mismatch.
    pub fn verify(password: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, hash).map_err(|e| PasswordError::HashError(e.to_string()))
    }
}
