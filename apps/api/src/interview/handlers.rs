//! Axum route handlers for the mock interview API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::interview::report::{
    build_report, InterviewReport, ResponseSubmission, ScoredResponse,
};
use crate::interview::scoring::feedback_for_score;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub question_id: String,
    /// May be empty or partial: a timer expiry submits whatever was typed.
    pub response: String,
    #[serde(default)]
    pub time_spent_secs: u32,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub interview_kind: String,
    pub submissions: Vec<ResponseSubmission>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/score
///
/// Scores a single answer as the client advances between questions.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoredResponse>, AppError> {
    let question = state.catalog.question(&request.question_id).ok_or_else(|| {
        AppError::NotFound(format!("Question '{}' not found", request.question_id))
    })?;

    let score = state
        .response_scorer
        .score(question, &request.response)
        .await?;

    Ok(Json(ScoredResponse {
        question_id: request.question_id,
        response: request.response,
        time_spent_secs: request.time_spent_secs,
        score,
        feedback: feedback_for_score(score),
    }))
}

/// POST /api/v1/interview/report
///
/// Scores a full session and returns the report with the overall score.
pub async fn handle_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<InterviewReport>, AppError> {
    if request.interview_kind.trim().is_empty() {
        return Err(AppError::Validation(
            "interview_kind cannot be empty".to_string(),
        ));
    }

    let report = build_report(
        &state.catalog,
        state.response_scorer.as_ref(),
        &request.interview_kind,
        &request.submissions,
    )
    .await?;

    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_score_unknown_question_is_not_found() {
        let state = AppState::for_tests();
        let request = ScoreRequest {
            question_id: "no-such-id".to_string(),
            response: "anything".to_string(),
            time_spent_secs: 10,
        };
        let err = handle_score(State(state), Json(request)).await.err().unwrap();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_score_empty_response_is_zero_not_an_error() {
        let state = AppState::for_tests();
        let request = ScoreRequest {
            question_id: "behavioral-1".to_string(),
            response: "   ".to_string(),
            time_spent_secs: 180,
        };
        let Json(scored) = handle_score(State(state), Json(request)).await.unwrap();
        assert_eq!(scored.score, 0);
        assert!(scored.feedback.starts_with("Your response needs"));
    }

    #[tokio::test]
    async fn test_report_rejects_blank_kind() {
        let state = AppState::for_tests();
        let request = ReportRequest {
            interview_kind: "  ".to_string(),
            submissions: vec![],
        };
        let err = handle_report(State(state), Json(request)).await.err().unwrap();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
