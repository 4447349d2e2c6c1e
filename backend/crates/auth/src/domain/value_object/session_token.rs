//! Session Token Value Object
//!
//! 32 random bytes, base64 URL-safe without padding (43 characters).

use std::fmt;

use platform::crypto::{from_base64_url, random_url_token};

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generate a fresh random token
    pub fn generate(bytes: usize) -> Self {
        Self(random_url_token(bytes))
    }

    /// Accept a token presented by a client
    ///
    /// Returns `None` for anything that could never have been issued:
    /// empty input or characters outside the URL-safe alphabet.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() || from_base64_url(raw).is_err() {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    /// Create from database value
    pub fn from_db(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}
