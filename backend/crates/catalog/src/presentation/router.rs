//! Catalog Router

use std::sync::Arc;

use axum::{Router, routing::get};

use crate::domain::repository::CatalogRepository;
use crate::infra::sqlite::SqliteCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the Catalog router with SQLite repository
pub fn catalog_router(repo: SqliteCatalogRepository) -> Router {
    catalog_router_generic(repo)
}

/// Create a generic Catalog router for any repository implementation
pub fn catalog_router_generic<R>(repo: R) -> Router
where
    R: CatalogRepository,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/companies", get(handlers::list_companies::<R>))
        .route("/problems", get(handlers::list_problems::<R>))
        .route("/stats", get(handlers::stats::<R>))
        .with_state(state)
}
