//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{ProblemId, UserId};

use crate::domain::entities::{NewProblem, Problem, ProgressRecord, ProgressUpdate};
use crate::domain::filter::Predicate;
use crate::error::CatalogResult;

/// Problem catalog repository trait
#[trait_variant::make(ProblemRepository: Send)]
pub trait LocalProblemRepository {
    /// Distinct company names, ascending
    async fn list_companies(&self) -> CatalogResult<Vec<String>>;

    /// Problems matching every predicate, ordered by
    /// `(company, difficulty, title)` compared as text
    async fn query(&self, predicates: &[Predicate]) -> CatalogResult<Vec<Problem>>;

    async fn find_by_id(&self, id: ProblemId) -> CatalogResult<Option<Problem>>;

    /// Row count per stored difficulty, ascending by difficulty
    async fn count_by_difficulty(&self) -> CatalogResult<Vec<(String, i64)>>;

    /// Row count per company, in any order
    async fn count_by_company(&self) -> CatalogResult<Vec<(String, i64)>>;

    /// Insert unless `(company, duration, title)` already exists
    ///
    /// Returns whether a row was written.
    async fn insert_or_ignore(&self, problem: NewProblem) -> CatalogResult<bool>;
}

/// Per-user progress repository trait
#[trait_variant::make(ProgressRepository: Send)]
pub trait LocalProgressRepository {
    /// Insert or replace the status for `(user_id, problem_id)`
    async fn upsert(&self, update: ProgressUpdate) -> CatalogResult<ProgressRecord>;

    /// A user's records, optionally for one company, ordered by problem id
    async fn list_for_user(
        &self,
        user_id: UserId,
        company: Option<&str>,
    ) -> CatalogResult<Vec<ProgressRecord>>;
}

/// Everything the HTTP layer needs from catalog storage
pub trait CatalogRepository: ProblemRepository + Clone + Send + Sync + 'static {}

impl<T> CatalogRepository for T where T: ProblemRepository + Clone + Send + Sync + 'static {}
