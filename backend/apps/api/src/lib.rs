//! API server composition
//!
//! Mounts the auth and catalog routers under `/api` and serves the static
//! frontend for everything else.

pub mod config;
pub mod db;

use std::path::Path;
use std::sync::Arc;

use auth::{SqliteAuthRepository, auth_router};
use axum::Router;
use axum::http::{Method, header};
use catalog::{SqliteCatalogRepository, catalog_router};
use kernel::clock::Clock;
use sqlx::SqlitePool;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::Config;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Page served for `/` and for any static path that does not exist
pub const LOGIN_PAGE: &str = "login.html";

/// Build the full application router over one SQLite pool
pub fn build_router(pool: SqlitePool, config: &Config, clock: Arc<dyn Clock>) -> Router {
    let api = Router::new()
        .merge(auth_router(
            SqliteAuthRepository::new(pool.clone()),
            config.auth_config(),
            clock,
        ))
        .merge(catalog_router(SqliteCatalogRepository::new(pool)));

    with_frontend(api, &config.static_dir)
}

/// Nest `api` under `/api`, fall back to static files, add CORS and tracing
pub fn with_frontend(api: Router, static_dir: &Path) -> Router {
    let login_page = static_dir.join(LOGIN_PAGE);
    let serve_static = ServeDir::new(static_dir).fallback(ServeFile::new(&login_page));

    Router::new()
        .nest("/api", api)
        .route_service("/", ServeFile::new(&login_page))
        .fallback_service(serve_static)
        .layer(TraceLayer::new_for_http())
        .layer(cors())
}

/// Any origin; the API authenticates with a bearer header, not cookies
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ]))
}
