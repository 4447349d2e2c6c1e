//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session lifetime (1 week)
    pub session_ttl: Duration,
    /// Random bytes per session token (32 = 256 bits)
    pub token_bytes: usize,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl: Duration::from_secs(7 * 24 * 3600), // 1 week
            token_bytes: 32,
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Session TTL as a chrono duration
    ///
    /// Saturates instead of failing for absurdly large configured values.
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or(chrono::Duration::MAX)
    }

    /// Get session TTL in milliseconds
    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl().num_milliseconds()
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
