//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::{PasswordHashError, PasswordPolicyError};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration input rejected (message is shown to the client)
    #[error("{0}")]
    Validation(String),

    /// Username or email already registered; never says which
    #[error("Username or email already exists")]
    DuplicateIdentity,

    /// Login with an empty username or password
    #[error("Username and password are required")]
    MissingCredentials,

    /// Unknown user or wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_)
            | AuthError::DuplicateIdentity
            | AuthError::MissingCredentials => ErrorKind::BadRequest,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures get a generic message; the original error is
    /// kept as the source so it ends up in the log, not on the wire.
    pub fn into_app_error(self) -> AppError {
        match self.kind() {
            ErrorKind::InternalServerError => {
                AppError::internal("Internal server error").with_source(self)
            }
            kind => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::DuplicateIdentity => {
                tracing::info!("Registration rejected: identity already taken");
            }
            // Logged with the full source chain by AppError
            AuthError::Database(_) | AuthError::Internal(_) => {}
            _ => {
                tracing::debug!(error = %self, "Auth request rejected");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<PasswordPolicyError> for AuthError {
    fn from(err: PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(err: PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
