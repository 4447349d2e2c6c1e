//! Use-case and router tests for the catalog crate
//!
//! Run against the in-memory repository.

#[cfg(test)]
mod support {
    use std::sync::Arc;

    use crate::application::{IngestUseCase, ProblemDraft};
    use crate::domain::value_objects::RecencyWindow;
    use crate::infra::memory::InMemoryCatalogRepository;

    pub fn draft(company: &str, window: RecencyWindow, difficulty: &str, title: &str) -> ProblemDraft {
        ProblemDraft {
            company: company.to_string(),
            duration: window,
            difficulty: difficulty.to_string(),
            title: title.to_string(),
            frequency: "42.0".to_string(),
            acceptance_rate: "0.55".to_string(),
            link: format!(
                "https://leetcode.com/problems/{}",
                title.to_lowercase().replace(' ', "-")
            ),
            topics: "Tree".to_string(),
        }
    }

    /// Five problems over three companies
    pub async fn seeded() -> Arc<InMemoryCatalogRepository> {
        let repo = Arc::new(InMemoryCatalogRepository::new());
        let report = IngestUseCase::new(repo.clone())
            .execute([
                draft("Google", RecencyWindow::ThirtyDays, "M", "Binary Tree Paths"),
                draft("Google", RecencyWindow::ThirtyDays, "easy", "Array Sum"),
                draft("Google", RecencyWindow::SixMonths, "HARD", "Word Ladder"),
                draft("Amazon", RecencyWindow::ThirtyDays, "E", "Two Sum"),
                draft("Meta", RecencyWindow::All, "N/A", "Valid Palindrome"),
            ])
            .await
            .unwrap();
        assert_eq!(report.inserted, 5);
        repo
    }
}

#[cfg(test)]
mod query_tests {
    use super::support::seeded;
    use crate::application::CatalogQuery;
    use crate::domain::filter::ProblemFilter;

    async fn titles(filter: ProblemFilter) -> Vec<String> {
        CatalogQuery::new(seeded().await)
            .query_problems(&filter)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect()
    }

    #[tokio::test]
    async fn test_no_filter_returns_everything_ordered() {
        assert_eq!(
            titles(ProblemFilter::default()).await,
            vec![
                "Two Sum",
                // Easy < Hard < Medium, compared as text
                "Array Sum",
                "Word Ladder",
                "Binary Tree Paths",
                "Valid Palindrome",
            ]
        );
    }

    #[tokio::test]
    async fn test_company_filter_is_exact() {
        let google = ProblemFilter {
            company: Some("Google".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(google).await.len(), 3);

        let lower = ProblemFilter {
            company: Some("google".to_string()),
            ..Default::default()
        };
        assert!(titles(lower).await.is_empty());
    }

    #[tokio::test]
    async fn test_search_matches_title_substring() {
        let tree = ProblemFilter {
            search: Some("tree".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(tree).await, vec!["Binary Tree Paths"]);
    }

    #[tokio::test]
    async fn test_sentinels_mean_no_filter() {
        let all = ProblemFilter {
            company: Some("all".to_string()),
            duration: Some("5. All".to_string()),
            difficulty: Some("all".to_string()),
            search: Some(String::new()),
        };
        assert_eq!(titles(all).await.len(), 5);
    }

    #[tokio::test]
    async fn test_duration_and_difficulty_filters() {
        let recent_easy = ProblemFilter {
            duration: Some("1. Thirty Days".to_string()),
            difficulty: Some("Easy".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(recent_easy).await, vec!["Two Sum", "Array Sum"]);

        // Stored only under its own window, not also under "5. All"
        let half_year = ProblemFilter {
            duration: Some("3. Six Months".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(half_year).await, vec!["Word Ladder"]);
    }

    #[tokio::test]
    async fn test_list_companies_sorted_distinct() {
        let companies = CatalogQuery::new(seeded().await)
            .list_companies()
            .await
            .unwrap();
        assert_eq!(companies, vec!["Amazon", "Google", "Meta"]);
    }
}

#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;

    use super::support::seeded;
    use crate::application::StatsAggregator;
    use crate::infra::memory::InMemoryCatalogRepository;

    #[tokio::test]
    async fn test_stats_counts_and_order() {
        let stats = StatsAggregator::new(seeded().await).compute().await.unwrap();

        assert_eq!(stats.total, 5);
        assert_eq!(stats.total_companies, 3);
        assert_eq!(
            stats.by_difficulty,
            vec![
                ("Easy".to_string(), 2),
                ("Hard".to_string(), 1),
                ("Medium".to_string(), 1),
                ("N/a".to_string(), 1),
            ]
        );
        assert_eq!(
            stats.by_company,
            vec![
                ("Google".to_string(), 3),
                ("Amazon".to_string(), 1),
                ("Meta".to_string(), 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_stats_on_empty_catalog() {
        let repo = Arc::new(InMemoryCatalogRepository::new());
        let stats = StatsAggregator::new(repo).compute().await.unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.total_companies, 0);
        assert!(stats.by_difficulty.is_empty());
    }
}

#[cfg(test)]
mod ingest_tests {
    use std::sync::Arc;

    use tokio_test::assert_ok;

    use super::support::{draft, seeded};
    use crate::application::{CatalogQuery, IngestReport, IngestUseCase};
    use crate::domain::filter::ProblemFilter;
    use crate::domain::value_objects::{Difficulty, RecencyWindow};
    use crate::infra::memory::InMemoryCatalogRepository;

    #[tokio::test]
    async fn test_reingest_is_a_noop() {
        let repo = seeded().await;
        let report = assert_ok!(
            IngestUseCase::new(repo.clone())
                .execute([draft("Google", RecencyWindow::ThirtyDays, "Hard", "Array Sum")])
                .await
        );
        assert_eq!(
            report,
            IngestReport {
                inserted: 0,
                duplicates: 1,
                incomplete: 0
            }
        );
        assert_eq!(report.skipped(), 1);

        let all = CatalogQuery::new(repo)
            .query_problems(&ProblemFilter::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 5);
    }

    #[tokio::test]
    async fn test_same_title_in_another_window_is_new() {
        let repo = seeded().await;
        let report = IngestUseCase::new(repo)
            .execute([draft("Google", RecencyWindow::All, "easy", "Array Sum")])
            .await
            .unwrap();
        assert_eq!(report.inserted, 1);
    }

    #[tokio::test]
    async fn test_incomplete_rows_are_skipped() {
        let repo = Arc::new(InMemoryCatalogRepository::new());
        let mut no_link = draft("Google", RecencyWindow::All, "easy", "Two Sum");
        no_link.link = String::new();

        let report = IngestUseCase::new(repo.clone())
            .execute([
                no_link,
                draft("Google", RecencyWindow::All, "easy", "  "),
                draft("Google", RecencyWindow::All, "", "Three Sum"),
            ])
            .await
            .unwrap();

        assert_eq!(report.inserted, 1);
        assert_eq!(report.incomplete, 2);

        let stored = CatalogQuery::new(repo)
            .query_problems(&ProblemFilter::default())
            .await
            .unwrap();
        assert_eq!(stored[0].difficulty, Difficulty::Unknown);
        assert_eq!(stored[0].acceptance_rate, Some(0.55));
    }
}

#[cfg(test)]
mod progress_tests {
    use std::sync::Arc;

    use chrono::Duration;
    use kernel::clock::{Clock, ManualClock};
    use kernel::id::{ProblemId, UserId};
    use tokio_test::{assert_err, assert_ok};

    use super::support::seeded;
    use crate::application::{CatalogQuery, ProgressTracker};
    use crate::domain::filter::ProblemFilter;
    use crate::error::CatalogError;

    #[tokio::test]
    async fn test_set_status_upserts() {
        let repo = seeded().await;
        let clock = Arc::new(ManualClock::starting_now());
        let tracker = ProgressTracker::new(repo.clone(), clock.clone() as Arc<dyn Clock>);
        let problem = CatalogQuery::new(repo)
            .query_problems(&ProblemFilter::default())
            .await
            .unwrap()
            .remove(0);
        let user = UserId::new(1);

        let first = assert_ok!(
            tracker
                .set_status(user, problem.id, &problem.company, "attempted")
                .await
        );
        clock.advance(Duration::minutes(5));
        let second = assert_ok!(
            tracker
                .set_status(user, problem.id, &problem.company, "solved")
                .await
        );

        assert_eq!(first.id, second.id);
        assert_eq!(second.status, "solved");
        assert!(second.updated_at > first.updated_at);

        let records = tracker.statuses_for(user, None).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, "solved");
    }

    #[tokio::test]
    async fn test_statuses_filtered_by_company() {
        let repo = seeded().await;
        let tracker = ProgressTracker::new(repo.clone(), Arc::new(ManualClock::starting_now()));
        let problems = CatalogQuery::new(repo)
            .query_problems(&ProblemFilter::default())
            .await
            .unwrap();
        let user = UserId::new(1);

        for p in &problems {
            tracker
                .set_status(user, p.id, &p.company, "solved")
                .await
                .unwrap();
        }

        let google = tracker.statuses_for(user, Some("Google")).await.unwrap();
        assert_eq!(google.len(), 3);
        assert!(google.iter().all(|r| r.company == "Google"));

        // Other users see nothing
        assert!(tracker
            .statuses_for(UserId::new(2), None)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_unknown_problem_is_not_found() {
        let repo = seeded().await;
        let tracker = ProgressTracker::new(repo, Arc::new(ManualClock::starting_now()));

        let err = assert_err!(
            tracker
                .set_status(UserId::new(1), ProblemId::new(999), "Google", "solved")
                .await
        );
        assert!(matches!(err, CatalogError::NotFound("Problem")));
        assert!(tracker
            .statuses_for(UserId::new(1), None)
            .await
            .unwrap()
            .is_empty());
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::support::seeded;
    use crate::infra::memory::InMemoryCatalogRepository;
    use crate::presentation::router::catalog_router_generic;

    async fn app() -> Router {
        let repo = seeded().await;
        catalog_router_generic(InMemoryCatalogRepository::clone(&repo))
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_companies() {
        let (status, body) = get(&app().await, "/companies").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["Amazon", "Google", "Meta"]));
    }

    #[tokio::test]
    async fn test_problems_with_query() {
        let app = app().await;

        let (status, body) = get(&app, "/problems").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 5);

        let (_, body) = get(&app, "/problems?company=Google&search=TREE").await;
        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["title"], json!("Binary Tree Paths"));
        assert_eq!(rows[0]["difficulty"], json!("Medium"));
        assert_eq!(rows[0]["duration"], json!("1. Thirty Days"));
        assert_eq!(rows[0]["acceptance_rate"], json!(0.55));

        let (_, body) = get(
            &app,
            "/problems?company=all&duration=5.%20All&difficulty=all&search=",
        )
        .await;
        assert_eq!(body.as_array().unwrap().len(), 5);

        let (_, body) = get(&app, "/problems?duration=1.%20Thirty%20Days&difficulty=Easy").await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_rejected_query_uses_error_envelope() {
        let (status, body) = get(&app().await, "/problems?company=Google&company=Meta").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some_and(|m| m.contains("duplicate field")));
    }

    #[tokio::test]
    async fn test_stats_json_order() {
        let app = app().await;
        let request = Request::builder().uri("/stats").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(
            text,
            r#"{"total":5,"by_difficulty":{"Easy":2,"Hard":1,"Medium":1,"N/a":1},"by_company":{"Google":3,"Amazon":1,"Meta":1},"total_companies":3}"#
        );
    }
}
