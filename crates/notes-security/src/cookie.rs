//! Session cookie transport policy
//!
//! The bearer token travels in an HTTP-only cookie. Its cross-site policy
//! depends on deployment topology: `Strict` when the frontend is served from
//! the same origin, `None` when a cross-origin frontend is configured. A
//! cookie usable cross-site is always `Secure`.

use chrono::{DateTime, Utc};

const EXPIRED_DATE: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::None => "None",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    max_age_seconds: i64,
    secure: bool,
    same_site: SameSite,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, max_age_seconds: i64, production: bool, cross_origin: bool) -> Self {
        let same_site = if cross_origin { SameSite::None } else { SameSite::Strict };
        Self {
            name: name.into(),
            max_age_seconds,
            secure: production || cross_origin,
            same_site,
        }
    }

    pub fn secure(&self) -> bool {
        self.secure
    }

    pub fn same_site(&self) -> SameSite {
        self.same_site
    }

    /// `Set-Cookie` value carrying a freshly issued token.
    pub fn issue(&self, token: &str, expires_at: DateTime<Utc>) -> String {
        self.render(
            token,
            self.max_age_seconds,
            &expires_at.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
        )
    }

    /// `Set-Cookie` value that makes the client drop the credential.
    pub fn clear(&self) -> String {
        self.render("", 0, EXPIRED_DATE)
    }

    /// Extracts the token from one `Cookie` request header. Returns `None`
    /// when the cookie is absent or blank after trimming.
    pub fn token_from_header(&self, header: &str) -> Option<String> {
        header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.name)
            .map(|(_, value)| value.trim().trim_matches('"').trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn render(&self, value: &str, max_age: i64, expires: &str) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; Max-Age={}; Expires={}; HttpOnly; SameSite={}",
            self.name,
            value,
            max_age,
            expires,
            self.same_site.as_str()
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}
