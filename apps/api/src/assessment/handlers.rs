//! Axum route handlers for the assessment API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::assessment::profile::{profile_from_ratings, SkillRating};
use crate::assessment::summary::{assessment_summary, AssessmentSummary};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssessmentSummaryRequest {
    pub ratings: Vec<SkillRating>,
}

/// POST /api/v1/assessment/summary
///
/// Overall rating progress and per-category averages for the submitted
/// ratings. The client persists ratings itself; nothing is stored here.
pub async fn handle_assessment_summary(
    State(state): State<AppState>,
    Json(request): Json<AssessmentSummaryRequest>,
) -> Result<Json<AssessmentSummary>, AppError> {
    let profile = profile_from_ratings(&request.ratings)?;
    Ok(Json(assessment_summary(&state.catalog, &profile)))
}
