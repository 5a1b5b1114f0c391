//! Axum route handlers for the job market API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assessment::profile::{profile_from_ratings, SkillRating};
use crate::catalog::market::MarketTrend;
use crate::errors::AppError;
use crate::market::analysis::{matched_jobs, MatchedJob};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    /// Ratings travel with the request; an empty list means no skill match.
    #[serde(default)]
    pub ratings: Vec<SkillRating>,
    pub search: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<MatchedJob>,
}

#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub trends: Vec<MarketTrend>,
}

/// POST /api/v1/market/jobs
///
/// The market snapshot with per-role skill matches, filtered and sorted
/// best-match-first.
pub async fn handle_jobs(
    State(state): State<AppState>,
    Json(request): Json<JobSearchRequest>,
) -> Result<Json<JobSearchResponse>, AppError> {
    let profile = profile_from_ratings(&request.ratings)?;

    let jobs = matched_jobs(
        &state.catalog.job_market,
        &profile,
        request.search.as_deref(),
        request.category.as_deref(),
    );

    Ok(Json(JobSearchResponse { jobs }))
}

/// GET /api/v1/market/trends
///
/// Skill demand trends from the static snapshot.
pub async fn handle_trends(State(state): State<AppState>) -> Json<TrendsResponse> {
    Json(TrendsResponse {
        trends: state.catalog.market_trends.clone(),
    })
}
