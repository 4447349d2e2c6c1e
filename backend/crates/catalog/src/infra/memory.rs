//! In-memory Repository Implementation
//!
//! Evaluates the same predicates as the SQLite repository over a
//! lock-protected map. Used by use-case and router tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use kernel::id::{ProblemId, ProgressId, UserId};
use tokio::sync::RwLock;

use crate::domain::entities::{NewProblem, Problem, ProgressRecord, ProgressUpdate};
use crate::domain::filter::Predicate;
use crate::domain::repository::{ProblemRepository, ProgressRepository};
use crate::error::CatalogResult;

#[derive(Default)]
struct Tables {
    problems: BTreeMap<i64, Problem>,
    /// Keyed by `(user_id, problem_id)`
    progress: BTreeMap<(i64, i64), ProgressRecord>,
    next_problem_id: i64,
    next_progress_id: i64,
}

#[derive(Clone, Default)]
pub struct InMemoryCatalogRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn counts<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(String, i64)> {
    let mut counts = BTreeMap::<String, i64>::new();
    for key in keys {
        *counts.entry(key.to_string()).or_default() += 1;
    }
    counts.into_iter().collect()
}

impl ProblemRepository for InMemoryCatalogRepository {
    async fn list_companies(&self) -> CatalogResult<Vec<String>> {
        let tables = self.tables.read().await;
        let mut companies: Vec<String> =
            tables.problems.values().map(|p| p.company.clone()).collect();
        companies.sort();
        companies.dedup();
        Ok(companies)
    }

    async fn query(&self, predicates: &[Predicate]) -> CatalogResult<Vec<Problem>> {
        let tables = self.tables.read().await;
        let mut problems: Vec<Problem> = tables
            .problems
            .values()
            .filter(|p| predicates.iter().all(|pred| pred.matches(p)))
            .cloned()
            .collect();

        problems.sort_by(|a, b| {
            (&a.company, a.difficulty.as_str(), &a.title).cmp(&(
                &b.company,
                b.difficulty.as_str(),
                &b.title,
            ))
        });
        Ok(problems)
    }

    async fn find_by_id(&self, id: ProblemId) -> CatalogResult<Option<Problem>> {
        Ok(self.tables.read().await.problems.get(&id.get()).cloned())
    }

    async fn count_by_difficulty(&self) -> CatalogResult<Vec<(String, i64)>> {
        let tables = self.tables.read().await;
        Ok(counts(tables.problems.values().map(|p| p.difficulty.as_str())))
    }

    async fn count_by_company(&self) -> CatalogResult<Vec<(String, i64)>> {
        let tables = self.tables.read().await;
        Ok(counts(tables.problems.values().map(|p| p.company.as_str())))
    }

    async fn insert_or_ignore(&self, problem: NewProblem) -> CatalogResult<bool> {
        let mut tables = self.tables.write().await;

        let (company, duration, title) = problem.key();
        let exists = tables
            .problems
            .values()
            .any(|p| p.company == company && p.duration == duration && p.title == title);
        if exists {
            return Ok(false);
        }

        tables.next_problem_id += 1;
        let id = tables.next_problem_id;
        tables
            .problems
            .insert(id, problem.into_problem(ProblemId::new(id)));
        Ok(true)
    }
}

impl ProgressRepository for InMemoryCatalogRepository {
    async fn upsert(&self, update: ProgressUpdate) -> CatalogResult<ProgressRecord> {
        let mut tables = self.tables.write().await;
        let key = (update.user_id.get(), update.problem_id.get());

        let existing = tables.progress.get(&key).map(|r| r.id);
        let id = match existing {
            Some(id) => id,
            None => {
                tables.next_progress_id += 1;
                ProgressId::new(tables.next_progress_id)
            }
        };

        let record = ProgressRecord {
            id,
            user_id: update.user_id,
            problem_id: update.problem_id,
            company: update.company,
            status: update.status,
            updated_at: update.updated_at,
        };
        tables.progress.insert(key, record.clone());
        Ok(record)
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        company: Option<&str>,
    ) -> CatalogResult<Vec<ProgressRecord>> {
        let tables = self.tables.read().await;
        // BTreeMap order is (user_id, problem_id)
        Ok(tables
            .progress
            .values()
            .filter(|r| r.user_id == user_id)
            .filter(|r| company.is_none_or(|c| r.company == c))
            .cloned()
            .collect())
    }
}
