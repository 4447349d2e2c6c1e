//! Email Value Object
//!
//! Basic validation only: the address must contain `@`.

use derive_more::Display;

use crate::error::{AuthError, AuthResult};

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(raw: impl AsRef<str>) -> AuthResult<Self> {
        let email = raw.as_ref().trim();

        if !email.contains('@') {
            return Err(AuthError::Validation("Invalid email address".to_string()));
        }

        Ok(Self(email.to_string()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
