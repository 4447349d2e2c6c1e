//! Session Manager
//!
//! Issues bearer tokens and turns presented tokens back into identities.
//! Every lookup fails closed: anything other than an active session owned
//! by an existing user resolves to "no identity".

use std::sync::Arc;

use kernel::clock::Clock;
use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::{NewSession, SessionState};
use crate::domain::entity::user::User;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::session_token::SessionToken;
use crate::error::AuthResult;

pub struct SessionManager<R>
where
    R: UserRepository + SessionRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    clock: Arc<dyn Clock>,
}

impl<R> SessionManager<R>
where
    R: UserRepository + SessionRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            config,
            clock,
        }
    }

    /// Issue a new session for `user_id` and return its token
    pub async fn create_session(&self, user_id: UserId) -> AuthResult<SessionToken> {
        let new_session = NewSession::issue(
            user_id,
            self.clock.now(),
            self.config.session_ttl(),
            self.config.token_bytes,
        );

        let session = SessionRepository::create(self.repo.as_ref(), new_session).await?;

        tracing::debug!(
            user_id = %user_id,
            session_id = %session.id,
            expires_at_ms = session.expires_at_ms,
            "Session created"
        );

        Ok(session.token)
    }

    /// Identity behind a token, if the session is currently valid
    pub async fn resolve_session(&self, raw_token: &str) -> Option<UserId> {
        self.check_session(raw_token).await.map(|user| user.id)
    }

    /// Resolve a token and load its user
    ///
    /// Storage failures are logged and treated as "not signed in".
    pub async fn check_session(&self, raw_token: &str) -> Option<User> {
        match self.lookup(raw_token).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "Session lookup failed");
                None
            }
        }
    }

    /// Delete every session that has already expired
    pub async fn cleanup_expired(&self) -> AuthResult<u64> {
        let deleted = self.repo.cleanup_expired(self.clock.now_ms()).await?;

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }

    async fn lookup(&self, raw_token: &str) -> AuthResult<Option<User>> {
        let Some(token) = SessionToken::parse(raw_token) else {
            return Ok(None);
        };

        let Some(session) = self.repo.find_by_token(&token).await? else {
            return Ok(None);
        };

        if session.state(self.clock.now_ms()) == SessionState::Expired {
            tracing::debug!(session_id = %session.id, "Session expired");
            return Ok(None);
        }

        let user = UserRepository::find_by_id(self.repo.as_ref(), session.user_id).await?;
        if user.is_none() {
            tracing::debug!(session_id = %session.id, "Session owner no longer exists");
        }

        Ok(user)
    }
}
