//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{ProblemId, ProgressId, UserId};

use crate::domain::value_objects::{Difficulty, RecencyWindow};

/// A catalog entry: one problem as reported for one company and window
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub id: ProblemId,
    pub company: String,
    /// Recency window label, e.g. `"1. Thirty Days"`
    pub duration: String,
    pub difficulty: Difficulty,
    pub title: String,
    pub frequency: Option<f64>,
    pub acceptance_rate: Option<f64>,
    pub link: String,
    pub topics: Option<String>,
}

/// A normalized problem ready to be stored
#[derive(Debug, Clone, PartialEq)]
pub struct NewProblem {
    pub company: String,
    pub duration: RecencyWindow,
    pub difficulty: Difficulty,
    pub title: String,
    pub frequency: Option<f64>,
    pub acceptance_rate: Option<f64>,
    pub link: String,
    pub topics: Option<String>,
}

impl NewProblem {
    pub fn into_problem(self, id: ProblemId) -> Problem {
        Problem {
            id,
            company: self.company,
            duration: self.duration.label().to_string(),
            difficulty: self.difficulty,
            title: self.title,
            frequency: self.frequency,
            acceptance_rate: self.acceptance_rate,
            link: self.link,
            topics: self.topics,
        }
    }

    /// Identity of a catalog entry; ingesting the same key twice is a no-op
    pub fn key(&self) -> (&str, &str, &str) {
        (&self.company, self.duration.label(), &self.title)
    }
}

/// A user's status for one problem
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRecord {
    pub id: ProgressId,
    pub user_id: UserId,
    pub problem_id: ProblemId,
    /// Copied from the problem at write time
    pub company: String,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

/// Status change to upsert, keyed by `(user_id, problem_id)`
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub user_id: UserId,
    pub problem_id: ProblemId,
    pub company: String,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}
