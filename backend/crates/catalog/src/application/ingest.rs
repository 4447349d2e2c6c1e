//! Catalog Ingest
//!
//! Loads raw problem rows (as read from the per-company exports) into the
//! catalog. Reading the files themselves happens elsewhere; this is the
//! normalize-and-insert half.

use std::sync::Arc;

use crate::domain::entities::NewProblem;
use crate::domain::repository::ProblemRepository;
use crate::domain::value_objects::{Difficulty, RecencyWindow};
use crate::error::CatalogResult;

/// One problem row as found in source data
///
/// The window comes from which export the row was read from; every other
/// field is untrimmed text.
#[derive(Debug, Clone)]
pub struct ProblemDraft {
    pub company: String,
    pub duration: RecencyWindow,
    pub difficulty: String,
    pub title: String,
    pub frequency: String,
    pub acceptance_rate: String,
    pub link: String,
    pub topics: String,
}

impl ProblemDraft {
    /// Normalize for storage, or `None` if company, title or link is blank
    pub fn normalize(self) -> Option<NewProblem> {
        let company = self.company.trim();
        let title = self.title.trim();
        let link = self.link.trim();
        if company.is_empty() || title.is_empty() || link.is_empty() {
            return None;
        }

        let topics = self.topics.trim();

        Some(NewProblem {
            company: company.to_string(),
            duration: self.duration,
            difficulty: Difficulty::normalize(&self.difficulty),
            title: title.to_string(),
            frequency: parse_metric(&self.frequency),
            acceptance_rate: parse_metric(&self.acceptance_rate),
            link: link.to_string(),
            topics: (!topics.is_empty()).then(|| topics.to_string()),
        })
    }
}

/// Lenient numeric parse: blank, unparsable or non-finite is `None`
pub fn parse_metric(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Outcome of one ingest run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub inserted: usize,
    /// Already present under the same `(company, duration, title)`
    pub duplicates: usize,
    /// Missing company, title or link
    pub incomplete: usize,
}

impl IngestReport {
    pub fn skipped(&self) -> usize {
        self.duplicates + self.incomplete
    }
}

pub struct IngestUseCase<R>
where
    R: ProblemRepository,
{
    repo: Arc<R>,
}

impl<R> IngestUseCase<R>
where
    R: ProblemRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Duplicates are counted, never an error. A storage error aborts the
    /// run; rows inserted before it stay.
    pub async fn execute<I>(&self, drafts: I) -> CatalogResult<IngestReport>
    where
        I: IntoIterator<Item = ProblemDraft>,
    {
        let mut report = IngestReport::default();

        for draft in drafts {
            let Some(problem) = draft.normalize() else {
                report.incomplete += 1;
                continue;
            };

            if self.repo.insert_or_ignore(problem).await? {
                report.inserted += 1;
            } else {
                report.duplicates += 1;
            }
        }

        tracing::info!(
            inserted = report.inserted,
            skipped = report.skipped(),
            "Ingest finished"
        );

        Ok(report)
    }
}
