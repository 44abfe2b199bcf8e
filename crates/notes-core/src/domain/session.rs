//! Session domain entity

use chrono::{DateTime, Duration, Utc};
use notes_shared::utils::mask_token;
use uuid::Uuid;

/// Persisted login state. The token is both the row identifier and the bearer
/// secret. Expiry is fixed at creation and never extended.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, user_id: Uuid, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            token,
            user_id,
            expires_at: issued_at + ttl,
        }
    }

    /// Valid only while `now < expires_at`.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &mask_token(&self.token))
            .field("user_id", &self.user_id)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// What the caller needs to hand the token to the client.
#[derive(Clone, PartialEq, Eq)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl std::fmt::Debug for IssuedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuedSession")
            .field("token", &mask_token(&self.token))
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl From<&Session> for IssuedSession {
    fn from(session: &Session) -> Self {
        Self {
            token: session.token.clone(),
            expires_at: session.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_boundary_is_exclusive() {
        let now = Utc::now();
        let session = Session::new("t".repeat(64), Uuid::new_v4(), now, Duration::seconds(60));

        assert_eq!(session.expires_at, now + Duration::seconds(60));
        assert!(session.is_active_at(now));
        assert!(session.is_active_at(now + Duration::seconds(59)));
        assert!(!session.is_active_at(now + Duration::seconds(60)));
        assert!(!session.is_active_at(now + Duration::seconds(61)));
    }

    #[test]
    fn debug_masks_the_token() {
        let token = "abcdef0123456789".repeat(4);
        let session = Session::new(token.clone(), Uuid::new_v4(), Utc::now(), Duration::seconds(1));
        assert!(!format!("{:?}", session).contains(&token));
        assert!(!format!("{:?}", IssuedSession::from(&session)).contains(&token));
    }
}
