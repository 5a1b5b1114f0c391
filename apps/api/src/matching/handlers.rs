//! Axum route handlers for the path matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assessment::profile::{profile_from_ratings, SkillRating};
use crate::catalog::paths::CareerPath;
use crate::errors::AppError;
use crate::matching::path_match::{best_path, match_percentage};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PathMatchRequest {
    pub ratings: Vec<SkillRating>,
}

#[derive(Debug, Serialize)]
pub struct PathMatchEntry {
    pub path: CareerPath,
    pub match_percentage: u8,
}

#[derive(Debug, Serialize)]
pub struct PathMatchResponse {
    /// Per-path normalized matches, in catalog order.
    pub matches: Vec<PathMatchEntry>,
    /// Winner by raw level sum. May disagree with the percentage ordering
    /// when required-skill lists differ in length; both are returned so the
    /// caller sees the discrepancy.
    pub best_path_id: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/paths/match
///
/// Ranks every career path against the submitted ratings.
pub async fn handle_path_match(
    State(state): State<AppState>,
    Json(request): Json<PathMatchRequest>,
) -> Result<Json<PathMatchResponse>, AppError> {
    let profile = profile_from_ratings(&request.ratings)?;

    let matches = state
        .catalog
        .career_paths
        .iter()
        .map(|path| PathMatchEntry {
            match_percentage: match_percentage(path, &profile),
            path: path.clone(),
        })
        .collect();

    // Catalog validation guarantees at least one path.
    let best = best_path(&state.catalog.career_paths, &profile)
        .ok_or_else(|| anyhow::anyhow!("career path catalog is empty"))?;

    Ok(Json(PathMatchResponse {
        matches,
        best_path_id: best.id,
    }))
}
