//! SQLite Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::id::{SessionId, UserId};
use platform::password::HashedPassword;
use sqlx::SqlitePool;

use crate::domain::entity::{
    session::{NewSession, Session},
    user::{NewUser, User},
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email, session_token::SessionToken, user_name::UserName,
};
use crate::error::{AuthError, AuthResult};

/// SQLite-backed auth repository
#[derive(Clone)]
pub struct SqliteAuthRepository {
    pool: SqlitePool,
}

impl SqliteAuthRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for SqliteAuthRepository {
    async fn create(&self, user: NewUser) -> AuthResult<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                username,
                email,
                password_hash,
                salt,
                created_at
            ) VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.username.as_str())
        .bind(user.email.as_str())
        .bind(user.password.hash())
        .bind(user.password.salt())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AuthError::DuplicateIdentity
            } else {
                AuthError::Database(e)
            }
        })?;

        Ok(user.into_user(UserId::new(result.last_insert_rowid())))
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                username,
                email,
                password_hash,
                salt,
                created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(user_id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                username,
                email,
                password_hash,
                salt,
                created_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for SqliteAuthRepository {
    async fn create(&self, session: NewSession) -> AuthResult<Session> {
        let result = sqlx::query(
            r#"
            INSERT INTO sessions (
                user_id,
                token,
                created_at,
                expires_at
            ) VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(session.user_id.get())
        .bind(session.token.as_str())
        .bind(session.created_at)
        .bind(timestamp_from_ms(session.expires_at_ms)?)
        .execute(&self.pool)
        .await?;

        Ok(session.into_session(SessionId::new(result.last_insert_rowid())))
    }

    async fn find_by_token(&self, token: &SessionToken) -> AuthResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                id,
                user_id,
                token,
                created_at,
                expires_at
            FROM sessions
            WHERE token = ?
            "#,
        )
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn cleanup_expired(&self, now_ms: i64) -> AuthResult<u64> {
        let deleted = sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE julianday(expires_at) <= julianday(?)
            "#,
        )
        .bind(timestamp_from_ms(now_ms)?)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(deleted)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    salt: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password = HashedPassword::from_parts(self.password_hash, self.salt)
            .map_err(|e| AuthError::Internal(format!("Invalid stored password for user {}: {e}", self.id)))?;

        Ok(User {
            id: UserId::new(self.id),
            username: UserName::from_db(self.username),
            email: Email::from_db(self.email),
            password,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: i64,
    user_id: i64,
    token: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            id: SessionId::new(self.id),
            user_id: UserId::new(self.user_id),
            token: SessionToken::from_db(self.token),
            created_at: self.created_at,
            expires_at_ms: self.expires_at.timestamp_millis(),
        }
    }
}

/// Sessions keep `expires_at` as a timestamp column
fn timestamp_from_ms(ms: i64) -> AuthResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| AuthError::Internal(format!("Session expiry out of range: {ms}")))
}
