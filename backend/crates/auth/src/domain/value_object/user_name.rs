//! User Name Value Object
//!
//! The login handle. Compared exactly (case-sensitive) after trimming
//! surrounding whitespace.

use derive_more::Display;

use crate::error::{AuthError, AuthResult};

/// Minimum length for user name (in characters, after trim)
pub const USER_NAME_MIN_LENGTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct UserName(String);

impl UserName {
    /// Validate a user name submitted at registration
    pub fn new(raw: impl AsRef<str>) -> AuthResult<Self> {
        let trimmed = raw.as_ref().trim();

        if trimmed.chars().count() < USER_NAME_MIN_LENGTH {
            return Err(AuthError::Validation(format!(
                "Username must be at least {USER_NAME_MIN_LENGTH} characters"
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Create from database value (assumed already validated)
    #[inline]
    pub fn from_db(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
