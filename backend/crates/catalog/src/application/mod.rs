//! Application Layer - Use Cases
//!
//! Read paths (query, stats) are stateless over the repository; progress
//! and ingest are the only writers.

pub mod ingest;
pub mod progress;
pub mod query;
pub mod stats;

pub use ingest::{IngestReport, IngestUseCase, ProblemDraft, parse_metric};
pub use progress::ProgressTracker;
pub use query::CatalogQuery;
pub use stats::{CatalogStats, StatsAggregator};
