//! SQLite Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{ProblemId, ProgressId, UserId};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::domain::entities::{NewProblem, Problem, ProgressRecord, ProgressUpdate};
use crate::domain::filter::Predicate;
use crate::domain::repository::{ProblemRepository, ProgressRepository};
use crate::domain::value_objects::Difficulty;
use crate::error::CatalogResult;

const PROBLEM_COLUMNS: &str = r#"
    SELECT
        id,
        company,
        duration,
        difficulty,
        title,
        frequency,
        acceptance_rate,
        link,
        topics
    FROM problems
"#;

/// SQLite-backed catalog repository
#[derive(Clone)]
pub struct SqliteCatalogRepository {
    pool: SqlitePool,
}

impl SqliteCatalogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Append `WHERE`/`AND` clauses; every value goes through a bind parameter
fn push_predicates(builder: &mut QueryBuilder<'_, Sqlite>, predicates: &[Predicate]) {
    for (i, predicate) in predicates.iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        match predicate {
            Predicate::CompanyEquals(company) => {
                builder.push("company = ").push_bind(company.clone());
            }
            Predicate::DurationEquals(duration) => {
                builder.push("duration = ").push_bind(duration.clone());
            }
            Predicate::DifficultyEquals(difficulty) => {
                builder.push("difficulty = ").push_bind(difficulty.clone());
            }
            Predicate::TitleContains(needle) => {
                // instr() instead of LIKE: no wildcard characters to escape
                builder
                    .push("instr(lower(title), lower(")
                    .push_bind(needle.clone())
                    .push(")) > 0");
            }
        }
    }
}

// ============================================================================
// Problem Repository Implementation
// ============================================================================

impl ProblemRepository for SqliteCatalogRepository {
    async fn list_companies(&self) -> CatalogResult<Vec<String>> {
        let companies =
            sqlx::query_scalar::<_, String>("SELECT DISTINCT company FROM problems ORDER BY company")
                .fetch_all(&self.pool)
                .await?;

        Ok(companies)
    }

    async fn query(&self, predicates: &[Predicate]) -> CatalogResult<Vec<Problem>> {
        let mut builder = QueryBuilder::<Sqlite>::new(PROBLEM_COLUMNS);
        push_predicates(&mut builder, predicates);
        builder.push(" ORDER BY company, difficulty, title");

        let rows = builder
            .build_query_as::<ProblemRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ProblemRow::into_problem).collect())
    }

    async fn find_by_id(&self, id: ProblemId) -> CatalogResult<Option<Problem>> {
        let mut builder = QueryBuilder::<Sqlite>::new(PROBLEM_COLUMNS);
        builder.push(" WHERE id = ").push_bind(id.get());

        let row = builder
            .build_query_as::<ProblemRow>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ProblemRow::into_problem))
    }

    async fn count_by_difficulty(&self) -> CatalogResult<Vec<(String, i64)>> {
        let counts = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT difficulty, COUNT(*)
            FROM problems
            GROUP BY difficulty
            ORDER BY difficulty
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }

    async fn count_by_company(&self) -> CatalogResult<Vec<(String, i64)>> {
        let counts = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT company, COUNT(*) AS n
            FROM problems
            GROUP BY company
            ORDER BY n DESC, company ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }

    async fn insert_or_ignore(&self, problem: NewProblem) -> CatalogResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO problems (
                company,
                duration,
                difficulty,
                title,
                frequency,
                acceptance_rate,
                link,
                topics
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&problem.company)
        .bind(problem.duration.label())
        .bind(problem.difficulty.as_str())
        .bind(&problem.title)
        .bind(problem.frequency)
        .bind(problem.acceptance_rate)
        .bind(&problem.link)
        .bind(&problem.topics)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Progress Repository Implementation
// ============================================================================

impl ProgressRepository for SqliteCatalogRepository {
    async fn upsert(&self, update: ProgressUpdate) -> CatalogResult<ProgressRecord> {
        let row = sqlx::query_as::<_, ProgressRow>(
            r#"
            INSERT INTO user_progress (
                user_id,
                problem_id,
                company,
                status,
                updated_at
            ) VALUES (?, ?, ?, ?, ?)
            ON CONFLICT (user_id, problem_id) DO UPDATE SET
                company = excluded.company,
                status = excluded.status,
                updated_at = excluded.updated_at
            RETURNING
                id,
                user_id,
                problem_id,
                company,
                status,
                updated_at
            "#,
        )
        .bind(update.user_id.get())
        .bind(update.problem_id.get())
        .bind(&update.company)
        .bind(&update.status)
        .bind(update.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_record())
    }

    async fn list_for_user(
        &self,
        user_id: UserId,
        company: Option<&str>,
    ) -> CatalogResult<Vec<ProgressRecord>> {
        let mut builder = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT
                id,
                user_id,
                problem_id,
                company,
                status,
                updated_at
            FROM user_progress
            WHERE user_id = "#,
        );
        builder.push_bind(user_id.get());
        if let Some(company) = company {
            builder.push(" AND company = ").push_bind(company.to_string());
        }
        builder.push(" ORDER BY problem_id");

        let rows = builder
            .build_query_as::<ProgressRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(ProgressRow::into_record).collect())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProblemRow {
    id: i64,
    company: String,
    duration: String,
    difficulty: String,
    title: String,
    frequency: Option<f64>,
    acceptance_rate: Option<f64>,
    link: String,
    topics: Option<String>,
}

impl ProblemRow {
    fn into_problem(self) -> Problem {
        Problem {
            id: ProblemId::new(self.id),
            company: self.company,
            duration: self.duration,
            difficulty: Difficulty::from_stored(&self.difficulty),
            title: self.title,
            frequency: self.frequency,
            acceptance_rate: self.acceptance_rate,
            link: self.link,
            topics: self.topics,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProgressRow {
    id: i64,
    user_id: i64,
    problem_id: i64,
    company: String,
    status: String,
    updated_at: DateTime<Utc>,
}

impl ProgressRow {
    fn into_record(self) -> ProgressRecord {
        ProgressRecord {
            id: ProgressId::new(self.id),
            user_id: UserId::new(self.user_id),
            problem_id: ProblemId::new(self.problem_id),
            company: self.company,
            status: self.status,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::ProblemFilter;
    use crate::domain::value_objects::RecencyWindow;
    use sqlx::sqlite::SqlitePoolOptions;
    use tokio_test::{assert_err, assert_ok};

    async fn pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("../../../database/migrations")
            .run(&pool)
            .await
            .unwrap();
        pool
    }

    fn new_problem(company: &str, difficulty: Difficulty, title: &str) -> NewProblem {
        NewProblem {
            company: company.to_string(),
            duration: RecencyWindow::ThirtyDays,
            difficulty,
            title: title.to_string(),
            frequency: Some(50.0),
            acceptance_rate: None,
            link: format!("https://leetcode.com/problems/{}", title.to_lowercase()),
            topics: Some("Array".to_string()),
        }
    }

    async fn seeded() -> (SqlitePool, SqliteCatalogRepository) {
        let pool = pool().await;
        let repo = SqliteCatalogRepository::new(pool.clone());
        for p in [
            new_problem("Google", Difficulty::Medium, "Binary Tree Paths"),
            new_problem("Google", Difficulty::Easy, "Array Sum"),
            new_problem("Amazon", Difficulty::Hard, "Tree Diameter"),
            new_problem("Amazon", Difficulty::Easy, "Two Sum"),
            new_problem("Meta", Difficulty::Easy, "Valid Palindrome"),
        ] {
            assert!(repo.insert_or_ignore(p).await.unwrap());
        }
        (pool, repo)
    }

    async fn titles(repo: &SqliteCatalogRepository, filter: ProblemFilter) -> Vec<String> {
        repo.query(&filter.predicates())
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect()
    }

    #[tokio::test]
    async fn test_query_without_filter_returns_all_in_order() {
        let (_pool, repo) = seeded().await;
        let all = titles(&repo, ProblemFilter::default()).await;
        assert_eq!(
            all,
            vec![
                // Amazon: Easy < Hard
                "Two Sum",
                "Tree Diameter",
                // Google: Easy < Medium
                "Array Sum",
                "Binary Tree Paths",
                "Valid Palindrome",
            ]
        );
    }

    #[tokio::test]
    async fn test_query_filters() {
        let (_pool, repo) = seeded().await;

        let google = ProblemFilter {
            company: Some("Google".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(&repo, google).await, vec!["Array Sum", "Binary Tree Paths"]);

        let tree = ProblemFilter {
            search: Some("TREE".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(&repo, tree).await, vec!["Tree Diameter", "Binary Tree Paths"]);

        let easy_amazon = ProblemFilter {
            company: Some("Amazon".to_string()),
            difficulty: Some("Easy".to_string()),
            ..Default::default()
        };
        assert_eq!(titles(&repo, easy_amazon).await, vec!["Two Sum"]);

        let other_window = ProblemFilter {
            duration: Some("2. Three Months".to_string()),
            ..Default::default()
        };
        assert!(titles(&repo, other_window).await.is_empty());
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let (_pool, repo) = seeded().await;
        let percent = ProblemFilter {
            search: Some("%".to_string()),
            ..Default::default()
        };
        assert!(titles(&repo, percent).await.is_empty());

        let quote = ProblemFilter {
            search: Some("'; DROP TABLE problems; --".to_string()),
            ..Default::default()
        };
        assert!(titles(&repo, quote).await.is_empty());
        assert_eq!(titles(&repo, ProblemFilter::default()).await.len(), 5);
    }

    #[tokio::test]
    async fn test_insert_or_ignore_is_idempotent() {
        let (_pool, repo) = seeded().await;
        let again = repo
            .insert_or_ignore(new_problem("Google", Difficulty::Hard, "Array Sum"))
            .await
            .unwrap();
        assert!(!again);

        // The first write wins
        let google = ProblemFilter {
            company: Some("Google".to_string()),
            search: Some("Array".to_string()),
            ..Default::default()
        };
        let rows = repo.query(&google.predicates()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].difficulty, Difficulty::Easy);
    }

    #[tokio::test]
    async fn test_companies_and_counts() {
        let (_pool, repo) = seeded().await;

        assert_eq!(
            repo.list_companies().await.unwrap(),
            vec!["Amazon", "Google", "Meta"]
        );
        assert_eq!(
            repo.count_by_difficulty().await.unwrap(),
            vec![
                ("Easy".to_string(), 3),
                ("Hard".to_string(), 1),
                ("Medium".to_string(), 1),
            ]
        );
        assert_eq!(
            repo.count_by_company().await.unwrap(),
            vec![
                ("Amazon".to_string(), 2),
                ("Google".to_string(), 2),
                ("Meta".to_string(), 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_progress_upsert_and_list() {
        let (pool, repo) = seeded().await;
        let user_id: i64 = sqlx::query_scalar(
            "INSERT INTO users (username, email, password_hash, salt, created_at) \
             VALUES ('alice', 'alice@example.com', 'x', 'y', '2026-01-01T00:00:00Z') RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        let user_id = UserId::new(user_id);
        let problem = repo.query(&[]).await.unwrap().remove(0);

        let first = assert_ok!(
            repo.upsert(ProgressUpdate {
                user_id,
                problem_id: problem.id,
                company: problem.company.clone(),
                status: "attempted".to_string(),
                updated_at: Utc::now(),
            })
            .await
        );
        let second = assert_ok!(
            repo.upsert(ProgressUpdate {
                user_id,
                problem_id: problem.id,
                company: problem.company.clone(),
                status: "solved".to_string(),
                updated_at: Utc::now(),
            })
            .await
        );
        assert_eq!(first.id, second.id);
        assert_eq!(second.status, "solved");

        let all = repo.list_for_user(user_id, None).await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(repo
            .list_for_user(user_id, Some("Nowhere"))
            .await
            .unwrap()
            .is_empty());

        // Deleting the problem removes the progress row
        sqlx::query("DELETE FROM problems WHERE id = ?")
            .bind(problem.id.get())
            .execute(&pool)
            .await
            .unwrap();
        assert!(repo.list_for_user(user_id, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_progress_for_unknown_user_fails() {
        let (_pool, repo) = seeded().await;
        let problem = repo.query(&[]).await.unwrap().remove(0);
        assert_err!(
            repo.upsert(ProgressUpdate {
                user_id: UserId::new(999),
                problem_id: problem.id,
                company: problem.company,
                status: "solved".to_string(),
                updated_at: Utc::now(),
            })
            .await
        );
    }
}
