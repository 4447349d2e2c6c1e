//! Login Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use kernel::clock::Clock;
use platform::password::{ClearTextPassword, decoy_verify};

use crate::application::config::AuthConfig;
use crate::application::session::SessionManager;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{session_token::SessionToken, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Bearer token for the `Authorization` header
    pub token: SessionToken,
    pub username: UserName,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository + SessionRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    sessions: SessionManager<R>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository + SessionRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>, clock: Arc<dyn Clock>) -> Self {
        let sessions = SessionManager::new(repo.clone(), config.clone(), clock);
        Self {
            repo,
            config,
            sessions,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let username = input.username.trim();
        if username.is_empty() || input.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let password = ClearTextPassword::for_verification(input.password);

        let Some(user) = UserRepository::find_by_username(self.repo.as_ref(), username).await?
        else {
            // Same cost as a real verification
            decoy_verify(&password, self.config.pepper());
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.sessions.create_session(user.id).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(LoginOutput {
            token,
            username: user.username,
        })
    }
}
