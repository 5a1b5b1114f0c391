//! Axum route handlers for the roadmap API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assessment::profile::{profile_from_ratings, SkillRating};
use crate::catalog::paths::CareerPath;
use crate::errors::AppError;
use crate::matching::path_match::best_path;
use crate::roadmap::generator::{generate_roadmap, Milestone};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    pub ratings: Vec<SkillRating>,
    /// Explicit path choice; defaults to the best-matching path.
    pub path_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub path: CareerPath,
    pub milestones: Vec<Milestone>,
}

/// POST /api/v1/roadmap
///
/// Generates the 6-month roadmap for the chosen (or best-matching) path.
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(request): Json<RoadmapRequest>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let profile = profile_from_ratings(&request.ratings)?;

    let path = match &request.path_id {
        Some(id) => state
            .catalog
            .career_path(id)
            .ok_or_else(|| AppError::NotFound(format!("Career path '{id}' not found")))?,
        None => best_path(&state.catalog.career_paths, &profile)
            .ok_or_else(|| anyhow::anyhow!("career path catalog is empty"))?,
    };

    Ok(Json(RoadmapResponse {
        path: path.clone(),
        milestones: generate_roadmap(path, &profile),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(id: &str, level: u8) -> SkillRating {
        SkillRating {
            skill_id: id.to_string(),
            level,
        }
    }

    #[tokio::test]
    async fn test_roadmap_defaults_to_best_path() {
        let state = AppState::for_tests();
        let request = RoadmapRequest {
            ratings: vec![
                rating("leadership", 5),
                rating("communication", 5),
                rating("innovation", 5),
                rating("problem-solving", 5),
            ],
            path_id: None,
        };
        let Json(response) = handle_roadmap(State(state), Json(request)).await.unwrap();
        assert_eq!(response.path.id, "product-manager");
        assert_eq!(response.milestones.len(), 4);
    }

    #[tokio::test]
    async fn test_roadmap_honors_explicit_path() {
        let state = AppState::for_tests();
        let request = RoadmapRequest {
            ratings: vec![],
            path_id: Some("ux-designer".to_string()),
        };
        let Json(response) = handle_roadmap(State(state), Json(request)).await.unwrap();
        assert_eq!(response.path.id, "ux-designer");
    }

    #[tokio::test]
    async fn test_roadmap_unknown_path_is_not_found() {
        let state = AppState::for_tests();
        let request = RoadmapRequest {
            ratings: vec![],
            path_id: Some("dragon-tamer".to_string()),
        };
        let err = handle_roadmap(State(state), Json(request)).await.err().unwrap();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
