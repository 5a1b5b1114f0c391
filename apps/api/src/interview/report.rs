//! Interview reports — per-question scored responses and the session total.
//!
//! The client owns the session (question order, countdown timers, partial
//! text on expiry); this module just scores whatever was submitted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::interview::scoring::{feedback_for_score, ResponseScorer};

/// One answer as submitted by the client, in question order.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseSubmission {
    pub question_id: String,
    pub response: String,
    pub time_spent_secs: u32,
}

/// A scored answer. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResponse {
    pub question_id: String,
    pub response: String,
    pub time_spent_secs: u32,
    pub score: u8,
    pub feedback: &'static str,
}

/// Full result of one mock interview.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewReport {
    pub id: Uuid,
    pub interview_kind: String,
    pub responses: Vec<ScoredResponse>,
    pub overall_score: u8,
    pub completed_at: DateTime<Utc>,
}

/// Mean of the per-question scores, rounded. 0 for an empty session.
pub fn overall_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let total: u32 = scores.iter().map(|&s| s as u32).sum();
    ((total as f64) / (scores.len() as f64)).round() as u8
}

/// Scores every submission of a session and assembles the report. An unknown
/// question id is a 404; submissions are scored in the order given.
pub async fn build_report(
    catalog: &Catalog,
    scorer: &dyn ResponseScorer,
    kind_id: &str,
    submissions: &[ResponseSubmission],
) -> Result<InterviewReport, AppError> {
    let kind = catalog
        .interview_kind(kind_id)
        .ok_or_else(|| AppError::NotFound(format!("Interview kind '{kind_id}' not found")))?;

    let mut responses = Vec::with_capacity(submissions.len());
    for submission in submissions {
        let question = catalog.question(&submission.question_id).ok_or_else(|| {
            AppError::NotFound(format!("Question '{}' not found", submission.question_id))
        })?;
        let score = scorer.score(question, &submission.response).await?;
        responses.push(ScoredResponse {
            question_id: submission.question_id.clone(),
            response: submission.response.clone(),
            time_spent_secs: submission.time_spent_secs,
            score,
            feedback: feedback_for_score(score),
        });
    }

    let scores: Vec<u8> = responses.iter().map(|r| r.score).collect();

    Ok(InterviewReport {
        id: Uuid::new_v4(),
        interview_kind: kind.id.to_string(),
        overall_score: overall_score(&scores),
        responses,
        completed_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::scoring::KeywordResponseScorer;

    fn submission(question_id: &str, response: &str) -> ResponseSubmission {
        ResponseSubmission {
            question_id: question_id.to_string(),
            response: response.to_string(),
            time_spent_secs: 90,
        }
    }

    #[test]
    fn test_overall_score_is_rounded_mean() {
        assert_eq!(overall_score(&[80, 90]), 85);
        assert_eq!(overall_score(&[83, 0, 18]), 34); // 33.66… → 34
        assert_eq!(overall_score(&[]), 0);
    }

    #[tokio::test]
    async fn test_report_scores_each_submission() {
        let catalog = Catalog::builtin();
        let scorer = KeywordResponseScorer;
        let submissions = vec![
            submission("behavioral-1", "the situation called for specific actions and the outcome was positive with lessons learned"),
            submission("behavioral-2", ""),
            submission("behavioral-3", "my learning strategy and time management"),
        ];

        let report = build_report(&catalog, &scorer, "behavioral", &submissions)
            .await
            .unwrap();

        assert_eq!(report.interview_kind, "behavioral");
        assert_eq!(report.responses.len(), 3);
        // Full coverage, short answer: 4/4 * 70 = 70.
        assert_eq!(report.responses[0].score, 70);
        // Empty answer is terminal 0.
        assert_eq!(report.responses[1].score, 0);
        let scores: Vec<u8> = report.responses.iter().map(|r| r.score).collect();
        assert_eq!(report.overall_score, overall_score(&scores));
    }

    #[tokio::test]
    async fn test_unknown_interview_kind_is_not_found() {
        let catalog = Catalog::builtin();
        let err = build_report(&catalog, &KeywordResponseScorer, "underwater-basket", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unknown_question_id_is_not_found() {
        let catalog = Catalog::builtin();
        let err = build_report(
            &catalog,
            &KeywordResponseScorer,
            "behavioral",
            &[submission("no-such-question", "text")],
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_empty_session_reports_zero_overall() {
        let catalog = Catalog::builtin();
        let report = build_report(&catalog, &KeywordResponseScorer, "technical", &[])
            .await
            .unwrap();
        assert_eq!(report.overall_score, 0);
        assert!(report.responses.is_empty());
    }
}
