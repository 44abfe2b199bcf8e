//! User domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored account. Created out-of-band by the seed tool and never mutated here.
#[derive(Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

impl User {
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Minimal user representation that may leave the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_never_contains_the_hash() {
        let user = User::new("alice".into(), "$2b$12$secret-hash".into());
        let rendered = format!("{:?}", user);
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("secret-hash"));
    }

    #[test]
    fn user_info_drops_the_hash() {
        let user = User::new("alice".into(), "hash".into());
        let info = UserInfo::from(&user);
        assert_eq!(info.id, user.id);
        assert_eq!(info.username, "alice");
    }
}
