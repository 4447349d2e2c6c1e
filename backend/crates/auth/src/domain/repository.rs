//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::{
    session::{NewSession, Session},
    user::{NewUser, User},
};
use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    ///
    /// A username or email that is already taken yields
    /// `AuthError::DuplicateIdentity`.
    async fn create(&self, user: NewUser) -> AuthResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;

    /// Find user by exact (case-sensitive) user name
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: NewSession) -> AuthResult<Session>;

    /// Find session by its exact token, regardless of expiry
    async fn find_by_token(&self, token: &SessionToken) -> AuthResult<Option<Session>>;

    /// Delete sessions whose expiry is at or before `now_ms`
    async fn cleanup_expired(&self, now_ms: i64) -> AuthResult<u64>;
}

/// Everything the HTTP layer needs from auth storage
pub trait AuthRepository:
    UserRepository + SessionRepository + Clone + Send + Sync + 'static
{
}

impl<T> AuthRepository for T where
    T: UserRepository + SessionRepository + Clone + Send + Sync + 'static
{
}
