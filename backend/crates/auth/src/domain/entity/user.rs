//! User Entity
//!
//! A registered account and its stored credential.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_name::UserName};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Row id assigned by storage
    pub id: UserId,
    /// Unique, case-sensitive login name
    pub username: UserName,
    /// Unique email address
    pub email: Email,
    /// Argon2id digest and its salt
    pub password: HashedPassword,
    pub created_at: DateTime<Utc>,
}

/// User not yet persisted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: UserName,
    pub email: Email,
    pub password: HashedPassword,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        username: UserName,
        email: Email,
        password: HashedPassword,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            username,
            email,
            password,
            created_at: now,
        }
    }

    /// Attach the id storage assigned
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            password: self.password,
            created_at: self.created_at,
        }
    }
}
