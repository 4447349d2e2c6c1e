//! Data Transfer Objects for catalog requests and responses

use kernel::id::ProblemId;
use serde::{Deserialize, Serialize, Serializer};

use crate::application::CatalogStats;
use crate::domain::entities::Problem;
use crate::domain::filter::ProblemFilter;
use crate::domain::value_objects::Difficulty;

// ============================================================================
// Requests
// ============================================================================

/// Query string of `GET /api/problems`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProblemsQuery {
    pub company: Option<String>,
    pub duration: Option<String>,
    pub difficulty: Option<String>,
    pub search: Option<String>,
}

impl From<ProblemsQuery> for ProblemFilter {
    fn from(q: ProblemsQuery) -> Self {
        ProblemFilter {
            company: q.company,
            duration: q.duration,
            difficulty: q.difficulty,
            search: q.search,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProblemResponse {
    pub id: ProblemId,
    pub company: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub title: String,
    pub frequency: Option<f64>,
    pub acceptance_rate: Option<f64>,
    pub link: String,
    pub topics: Option<String>,
}

impl From<Problem> for ProblemResponse {
    fn from(p: Problem) -> Self {
        Self {
            id: p.id,
            company: p.company,
            duration: p.duration,
            difficulty: p.difficulty,
            title: p.title,
            frequency: p.frequency,
            acceptance_rate: p.acceptance_rate,
            link: p.link,
            topics: p.topics,
        }
    }
}

/// Name → count pairs written as a JSON object in their given order
#[derive(Debug)]
pub struct OrderedCounts(pub Vec<(String, i64)>);

impl Serialize for OrderedCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, count)| (name, count)))
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: i64,
    pub by_difficulty: OrderedCounts,
    pub by_company: OrderedCounts,
    pub total_companies: usize,
}

impl From<CatalogStats> for StatsResponse {
    fn from(stats: CatalogStats) -> Self {
        Self {
            total: stats.total,
            by_difficulty: OrderedCounts(stats.by_difficulty),
            by_company: OrderedCounts(stats.by_company),
            total_companies: stats.total_companies,
        }
    }
}
