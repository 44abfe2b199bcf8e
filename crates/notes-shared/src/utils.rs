//! Utility functions

/// Shortens a bearer secret so it can appear in logs without being replayable.
pub fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(6).collect();
    if prefix.is_empty() {
        "***".to_string()
    } else {
        format!("{}***", prefix)
    }
}
