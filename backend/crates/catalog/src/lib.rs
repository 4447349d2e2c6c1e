//! Catalog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, filter predicates, repository traits
//! - `application/` - Query, stats, ingest and progress use cases
//! - `infra/` - SQLite and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Filtered problem listing (company, recency window, difficulty, title search)
//! - Company list and catalog-wide counts
//! - Idempotent ingest of normalized problem rows
//! - Per-user progress records

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CatalogQuery, CatalogStats, IngestReport, IngestUseCase, ProblemDraft, ProgressTracker,
    StatsAggregator,
};
pub use domain::filter::ProblemFilter;
pub use error::{CatalogError, CatalogResult};
pub use infra::{memory::InMemoryCatalogRepository, sqlite::SqliteCatalogRepository};
pub use presentation::router::{catalog_router, catalog_router_generic};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
