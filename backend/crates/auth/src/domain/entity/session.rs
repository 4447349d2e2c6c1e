//! Session Entity
//!
//! A bearer token issued at login. Stored server side; the token is the
//! only thing the client holds.

use chrono::{DateTime, Duration, Utc};
use kernel::id::{SessionId, UserId};

use crate::domain::value_object::session_token::SessionToken;

/// Lifecycle state of a session at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Expired,
}

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    /// Owning user
    pub user_id: UserId,
    pub token: SessionToken,
    pub created_at: DateTime<Utc>,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
}

impl Session {
    /// Valid only while `now < expires_at`
    pub fn state(&self, now_ms: i64) -> SessionState {
        if now_ms < self.expires_at_ms {
            SessionState::Active
        } else {
            SessionState::Expired
        }
    }
}

/// Session not yet persisted
#[derive(Debug, Clone)]
pub struct NewSession {
    pub user_id: UserId,
    pub token: SessionToken,
    pub created_at: DateTime<Utc>,
    pub expires_at_ms: i64,
}

impl NewSession {
    /// Issue a fresh token for `user_id`
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn issue(user_id: UserId, now: DateTime<Utc>, ttl: Duration, token_bytes: usize) -> Self {
        Self {
            user_id,
            token: SessionToken::generate(token_bytes),
            created_at: now,
            expires_at_ms: now.timestamp_millis().saturating_add(ttl.num_milliseconds()),
        }
    }

    pub fn into_session(self, id: SessionId) -> Session {
        Session {
            id,
            user_id: self.user_id,
            token: self.token,
            created_at: self.created_at,
            expires_at_ms: self.expires_at_ms,
        }
    }
}
