//! Catalog Query Use Case

use std::sync::Arc;

use crate::domain::entities::Problem;
use crate::domain::filter::ProblemFilter;
use crate::domain::repository::ProblemRepository;
use crate::error::CatalogResult;

/// Read-only access to the problem catalog
pub struct CatalogQuery<R>
where
    R: ProblemRepository,
{
    repo: Arc<R>,
}

impl<R> CatalogQuery<R>
where
    R: ProblemRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Distinct company names, ascending
    pub async fn list_companies(&self) -> CatalogResult<Vec<String>> {
        self.repo.list_companies().await
    }

    /// Every problem matching the filter; no pagination
    pub async fn query_problems(&self, filter: &ProblemFilter) -> CatalogResult<Vec<Problem>> {
        let predicates = filter.predicates();
        let problems = self.repo.query(&predicates).await?;

        tracing::debug!(
            predicates = predicates.len(),
            matched = problems.len(),
            "Problem query served"
        );

        Ok(problems)
    }
}
