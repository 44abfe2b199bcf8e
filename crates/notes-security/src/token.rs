//! Session token generation

use notes_shared::constants::SESSION_TOKEN_BYTES;
use rand::{rngs::OsRng, TryRngCore};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}

/// 256 bits from the operating system CSPRNG, hex encoded (64 chars).
pub fn generate_session_token() -> Result<String, TokenError> {
    let mut buf = [0u8; SESSION_TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut buf)
        .map_err(|e| TokenError::EntropyUnavailable(e.to_string()))?;
    Ok(hex::encode(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_fixed_length_lowercase_hex() {
        let token = generate_session_token().unwrap();
        assert_eq!(token.len(), SESSION_TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn tokens_do_not_repeat() {
        let a = generate_session_token().unwrap();
        let b = generate_session_token().unwrap();
        assert_ne!(a, b);
    }
}
