//! In-memory Repository Implementation
//!
//! Same contracts as the SQLite repository, backed by a lock-protected
//! map. Used by use-case tests and handy for local experiments.

use std::collections::BTreeMap;
use std::sync::Arc;

use kernel::id::{SessionId, UserId};
use tokio::sync::RwLock;

use crate::domain::entity::{
    session::{NewSession, Session},
    user::{NewUser, User},
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    sessions: BTreeMap<i64, Session>,
    next_user_id: i64,
    next_session_id: i64,
}

#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a user row without touching its sessions
    ///
    /// Leaves orphaned sessions behind, which storage with foreign keys
    /// never does; lets tests check that orphans are still rejected.
    pub async fn remove_user_only(&self, user_id: UserId) {
        self.tables.write().await.users.remove(&user_id.get());
    }

    pub async fn session_count(&self) -> usize {
        self.tables.read().await.sessions.len()
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create(&self, user: NewUser) -> AuthResult<User> {
        let mut tables = self.tables.write().await;

        let taken = tables
            .users
            .values()
            .any(|u| u.username == user.username || u.email == user.email);
        if taken {
            return Err(AuthError::DuplicateIdentity);
        }

        tables.next_user_id += 1;
        let user = user.into_user(UserId::new(tables.next_user_id));
        tables.users.insert(user.id.get(), user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&user_id.get()).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username.as_str() == username)
            .cloned())
    }
}

impl SessionRepository for InMemoryAuthRepository {
    async fn create(&self, session: NewSession) -> AuthResult<Session> {
        let mut tables = self.tables.write().await;

        if tables.sessions.values().any(|s| s.token == session.token) {
            return Err(AuthError::Internal("Session token collision".to_string()));
        }

        tables.next_session_id += 1;
        let session = session.into_session(SessionId::new(tables.next_session_id));
        tables.sessions.insert(session.id.get(), session.clone());

        Ok(session)
    }

    async fn find_by_token(&self, token: &SessionToken) -> AuthResult<Option<Session>> {
        let tables = self.tables.read().await;
        Ok(tables
            .sessions
            .values()
            .find(|s| &s.token == token)
            .cloned())
    }

    async fn cleanup_expired(&self, now_ms: i64) -> AuthResult<u64> {
        let mut tables = self.tables.write().await;
        let before = tables.sessions.len();
        tables.sessions.retain(|_, s| s.expires_at_ms > now_ms);
        Ok((before - tables.sessions.len()) as u64)
    }
}
