//! Axum route handlers for the read-only catalog endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::catalog::interviews::InterviewKind;
use crate::catalog::paths::CareerPath;
use crate::catalog::skills::{level_description, SkillCategory, MAX_SKILL_LEVEL};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LevelDescription {
    pub level: u8,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub categories: Vec<SkillCategory>,
    /// Legend for the 0–5 rating scale.
    pub levels: Vec<LevelDescription>,
}

#[derive(Debug, Serialize)]
pub struct PathsResponse {
    pub paths: Vec<CareerPath>,
}

#[derive(Debug, Serialize)]
pub struct InterviewsResponse {
    pub kinds: Vec<InterviewKind>,
}

/// GET /api/v1/catalog/skills
///
/// The rateable skill taxonomy, grouped by category.
pub async fn handle_get_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    let levels = (0..=MAX_SKILL_LEVEL)
        .map(|level| LevelDescription {
            level,
            label: level_description(level),
        })
        .collect();

    Json(SkillsResponse {
        categories: state.catalog.skill_categories.clone(),
        levels,
    })
}

/// GET /api/v1/catalog/paths
///
/// The career path catalog, in ranking tie-break order.
pub async fn handle_get_paths(State(state): State<AppState>) -> Json<PathsResponse> {
    Json(PathsResponse {
        paths: state.catalog.career_paths.clone(),
    })
}

/// GET /api/v1/catalog/interviews
///
/// The interview banks, questions and rubrics included — the client renders
/// expected points on the results screen.
pub async fn handle_get_interviews(State(state): State<AppState>) -> Json<InterviewsResponse> {
    Json(InterviewsResponse {
        kinds: state.catalog.interview_kinds.clone(),
    })
}
