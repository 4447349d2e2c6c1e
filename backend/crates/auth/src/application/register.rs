//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use kernel::clock::Clock;
use kernel::id::UserId;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    clock: Arc<dyn Clock>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            config,
            clock,
        }
    }

    /// Validate, hash and store; first failing check wins
    pub async fn execute(&self, input: RegisterInput) -> AuthResult<UserId> {
        let username = UserName::new(&input.username)?;
        let email = Email::new(&input.email)?;
        let password = ClearTextPassword::new(input.password)?;

        let hashed = password.hash(self.config.pepper())?;

        let new_user = NewUser::new(username, email, hashed, self.clock.now());
        let user = self.repo.create(new_user).await?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            "User registered"
        );

        Ok(user.id)
    }
}
