pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route(
            "/api/v1/catalog/skills",
            get(crate::catalog::handlers::handle_get_skills),
        )
        .route(
            "/api/v1/catalog/paths",
            get(crate::catalog::handlers::handle_get_paths),
        )
        .route(
            "/api/v1/catalog/interviews",
            get(crate::catalog::handlers::handle_get_interviews),
        )
        // Assessment API
        .route(
            "/api/v1/assessment/summary",
            post(crate::assessment::handlers::handle_assessment_summary),
        )
        // Path matching API
        .route(
            "/api/v1/paths/match",
            post(crate::matching::handlers::handle_path_match),
        )
        // Roadmap API
        .route(
            "/api/v1/roadmap",
            post(crate::roadmap::handlers::handle_roadmap),
        )
        // Interview API
        .route(
            "/api/v1/interview/score",
            post(crate::interview::handlers::handle_score),
        )
        .route(
            "/api/v1/interview/report",
            post(crate::interview::handlers::handle_report),
        )
        // Market API
        .route(
            "/api/v1/market/jobs",
            post(crate::market::handlers::handle_jobs),
        )
        .route(
            "/api/v1/market/trends",
            get(crate::market::handlers::handle_trends),
        )
        .with_state(state)
}
