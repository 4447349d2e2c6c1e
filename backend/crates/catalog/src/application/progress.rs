//! Progress Tracker
//!
//! Per-user status for catalog problems. Status is free text chosen by the
//! client (e.g. "solved", "attempted").

use std::sync::Arc;

use kernel::clock::Clock;
use kernel::id::{ProblemId, UserId};

use crate::domain::entities::{ProgressRecord, ProgressUpdate};
use crate::domain::repository::{ProblemRepository, ProgressRepository};
use crate::error::{CatalogError, CatalogResult};

pub struct ProgressTracker<R>
where
    R: ProblemRepository + ProgressRepository,
{
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ProgressTracker<R>
where
    R: ProblemRepository + ProgressRepository,
{
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Record a status, replacing any earlier one for the same problem
    ///
    /// An unknown problem is `NotFound`; nothing is written.
    pub async fn set_status(
        &self,
        user_id: UserId,
        problem_id: ProblemId,
        company: &str,
        status: &str,
    ) -> CatalogResult<ProgressRecord> {
        if self.repo.find_by_id(problem_id).await?.is_none() {
            return Err(CatalogError::NotFound("Problem"));
        }

        let record = self
            .repo
            .upsert(ProgressUpdate {
                user_id,
                problem_id,
                company: company.to_string(),
                status: status.to_string(),
                updated_at: self.clock.now(),
            })
            .await?;

        tracing::info!(
            user_id = %user_id,
            problem_id = %problem_id,
            status = %record.status,
            "Progress updated"
        );

        Ok(record)
    }

    /// A user's recorded statuses, optionally restricted to one company
    pub async fn statuses_for(
        &self,
        user_id: UserId,
        company: Option<&str>,
    ) -> CatalogResult<Vec<ProgressRecord>> {
        self.repo.list_for_user(user_id, company).await
    }
}
