//! Problem Filter
//!
//! Turns the optional query fields into a list of typed predicates. Storage
//! backends combine the predicates with AND; neither ever sees a raw query
//! fragment.

use crate::domain::entities::Problem;
use crate::domain::value_objects::RecencyWindow;

/// Company value meaning "no company filter"
pub const ALL_COMPANIES: &str = "all";

/// Difficulty value meaning "no difficulty filter"
pub const ALL_DIFFICULTIES: &str = "all";

/// Duration value meaning "no duration filter"
pub const ALL_DURATIONS: &str = RecencyWindow::All.label();

/// Optional filters for a problem query
///
/// Absent fields, the sentinels above and an empty search all mean the
/// field does not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemFilter {
    pub company: Option<String>,
    pub duration: Option<String>,
    pub difficulty: Option<String>,
    pub search: Option<String>,
}

/// A single constraint on a problem row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Exact, case-sensitive company match
    CompanyEquals(String),
    /// Exact recency window label match
    DurationEquals(String),
    /// Exact, case-sensitive difficulty match
    DifficultyEquals(String),
    /// Case-insensitive substring of the title
    TitleContains(String),
}

impl ProblemFilter {
    /// Compile the present, non-sentinel fields into predicates
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(company) = active(&self.company, Some(ALL_COMPANIES)) {
            predicates.push(Predicate::CompanyEquals(company.to_string()));
        }
        if let Some(duration) = active(&self.duration, Some(ALL_DURATIONS)) {
            predicates.push(Predicate::DurationEquals(duration.to_string()));
        }
        if let Some(difficulty) = active(&self.difficulty, Some(ALL_DIFFICULTIES)) {
            predicates.push(Predicate::DifficultyEquals(difficulty.to_string()));
        }
        if let Some(search) = active(&self.search, None) {
            predicates.push(Predicate::TitleContains(search.to_string()));
        }

        predicates
    }
}

fn active<'a>(value: &'a Option<String>, sentinel: Option<&str>) -> Option<&'a str> {
    let value = value.as_deref()?;
    if value.is_empty() || Some(value) == sentinel {
        return None;
    }
    Some(value)
}

impl Predicate {
    /// Evaluate against an in-memory row
    ///
    /// SQL backends must agree with this for ASCII titles.
    pub fn matches(&self, problem: &Problem) -> bool {
        match self {
            Predicate::CompanyEquals(company) => problem.company == *company,
            Predicate::DurationEquals(duration) => problem.duration == *duration,
            Predicate::DifficultyEquals(difficulty) => problem.difficulty.as_str() == difficulty,
            Predicate::TitleContains(needle) => problem
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}
