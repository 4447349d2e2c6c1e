//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Registration with username, email and password
//! - Login issuing an opaque bearer token
//! - Server-side sessions with a fixed lifetime (default one week)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id over a per-user random salt
//! - Unknown users and wrong passwords are indistinguishable
//! - Session checks fail closed

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::session::SessionManager;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryAuthRepository, sqlite::SqliteAuthRepository};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
