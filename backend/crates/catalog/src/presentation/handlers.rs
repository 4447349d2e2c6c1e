//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum_extra::extract::WithRejection;
use kernel::error::app_error::AppError;

use crate::application::{CatalogQuery, StatsAggregator};
use crate::domain::filter::ProblemFilter;
use crate::domain::repository::CatalogRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{ProblemResponse, ProblemsQuery, StatsResponse};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: CatalogRepository,
{
    pub repo: Arc<R>,
}

/// GET /api/companies
pub async fn list_companies<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<String>>>
where
    R: CatalogRepository,
{
    let companies = CatalogQuery::new(state.repo.clone()).list_companies().await?;
    Ok(Json(companies))
}

/// GET /api/problems
///
/// Every query field is optional; see [`ProblemFilter`] for the sentinels.
pub async fn list_problems<R>(
    State(state): State<CatalogAppState<R>>,
    WithRejection(Query(query), _): WithRejection<Query<ProblemsQuery>, AppError>,
) -> CatalogResult<Json<Vec<ProblemResponse>>>
where
    R: CatalogRepository,
{
    let filter = ProblemFilter::from(query);
    let problems = CatalogQuery::new(state.repo.clone())
        .query_problems(&filter)
        .await?;

    Ok(Json(problems.into_iter().map(ProblemResponse::from).collect()))
}

/// GET /api/stats
pub async fn stats<R>(State(state): State<CatalogAppState<R>>) -> CatalogResult<Json<StatsResponse>>
where
    R: CatalogRepository,
{
    let stats = StatsAggregator::new(state.repo.clone()).compute().await?;
    Ok(Json(stats.into()))
}
