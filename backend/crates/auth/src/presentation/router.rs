//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use kernel::clock::Clock;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::AuthRepository;
use crate::infra::sqlite::SqliteAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with SQLite repository
pub fn auth_router(repo: SqliteAuthRepository, config: AuthConfig, clock: Arc<dyn Clock>) -> Router {
    auth_router_generic(repo, config, clock)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig, clock: Arc<dyn Clock>) -> Router
where
    R: AuthRepository,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        clock,
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/check-session", get(handlers::check_session::<R>))
        .with_state(state)
}
