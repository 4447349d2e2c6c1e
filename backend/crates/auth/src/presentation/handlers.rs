//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use kernel::clock::Clock;
use platform::bearer::extract_bearer_token;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, SessionManager,
};
use crate::domain::repository::AuthRepository;
use crate::error::AuthResult;
use crate::presentation::extract::JsonBody;
use crate::presentation::dto::{
    CheckSessionResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AuthRepository,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub clock: Arc<dyn Clock>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> AuthResult<Json<RegisterResponse>>
where
    R: AuthRepository,
{
    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.clock.clone(),
    );

    let input = RegisterInput {
        username: req.username,
        email: req.email,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok(Json(RegisterResponse {
        success: true,
        message: "Registration successful",
    }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: AuthRepository,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.clock.clone(),
    );

    let input = LoginInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        success: true,
        token: output.token.into_string(),
        username: output.username.to_string(),
    }))
}

// ============================================================================
// Check Session
// ============================================================================

/// GET /api/check-session
///
/// Never fails: anything short of a valid session is `{"valid": false}`.
pub async fn check_session<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> Json<CheckSessionResponse>
where
    R: AuthRepository,
{
    let Some(token) = extract_bearer_token(&headers) else {
        return Json(CheckSessionResponse::invalid());
    };

    let sessions = SessionManager::new(
        state.repo.clone(),
        state.config.clone(),
        state.clock.clone(),
    );

    match sessions.check_session(&token).await {
        Some(user) => Json(CheckSessionResponse::valid(user.username.as_str())),
        None => Json(CheckSessionResponse::invalid()),
    }
}
