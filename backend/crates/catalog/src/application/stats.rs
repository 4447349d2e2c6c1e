//! Stats Aggregator
//!
//! Counts are recomputed from storage on every call.

use std::sync::Arc;

use crate::domain::repository::ProblemRepository;
use crate::error::CatalogResult;

/// Catalog-wide counts
///
/// Both breakdowns keep their computed order: difficulties ascending,
/// companies by count descending then name ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: i64,
    pub by_difficulty: Vec<(String, i64)>,
    pub by_company: Vec<(String, i64)>,
    pub total_companies: usize,
}

pub struct StatsAggregator<R>
where
    R: ProblemRepository,
{
    repo: Arc<R>,
}

impl<R> StatsAggregator<R>
where
    R: ProblemRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn compute(&self) -> CatalogResult<CatalogStats> {
        let mut by_difficulty = self.repo.count_by_difficulty().await?;
        by_difficulty.sort_by(|a, b| a.0.cmp(&b.0));

        let mut by_company = self.repo.count_by_company().await?;
        by_company.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Ok(CatalogStats {
            total: by_difficulty.iter().map(|(_, n)| n).sum(),
            total_companies: by_company.len(),
            by_difficulty,
            by_company,
        })
    }
}
