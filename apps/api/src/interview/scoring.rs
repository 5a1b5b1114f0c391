//! Response scoring — keyword-overlap scorer behind a pluggable trait.
//!
//! Default: `KeywordResponseScorer` (pure-Rust, fast, deterministic). The
//! trait seam exists so a richer backend can be swapped in via `AppState`
//! without touching handlers; the "AI interviewer" framing upstream is
//! cosmetic and stays that way here.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::catalog::interviews::InterviewQuestion;
use crate::errors::AppError;

/// Portion of the score attributable to expected-point coverage.
const COVERAGE_WEIGHT: f64 = 70.0;
/// Token-count thresholds that each add `LENGTH_BONUS_STEP`. Cumulative, not
/// mutually exclusive: a 160-word answer clears all three.
const LENGTH_BONUS_THRESHOLDS: [usize; 3] = [50, 100, 150];
const LENGTH_BONUS_STEP: f64 = 10.0;

/// Scores a free-text answer against a question's expected points.
///
/// A point is covered when any single word of the phrase appears verbatim
/// among the response's lowercased whitespace tokens. This is deliberately
/// loose: single-word overlap, not phrase containment.
pub fn score_response(response: &str, expected_points: &[&str]) -> u8 {
    if response.trim().is_empty() {
        return 0;
    }

    let lowered = response.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    let token_set: HashSet<&str> = tokens.iter().copied().collect();

    let covered = expected_points
        .iter()
        .filter(|point| {
            point
                .to_lowercase()
                .split_whitespace()
                .any(|word| token_set.contains(word))
        })
        .count();

    // Guarded: validated catalogs never ship an empty point list.
    let coverage = if expected_points.is_empty() {
        0.0
    } else {
        (covered as f64 / expected_points.len() as f64) * COVERAGE_WEIGHT
    };

    let length_bonus = LENGTH_BONUS_THRESHOLDS
        .iter()
        .filter(|&&threshold| tokens.len() > threshold)
        .count() as f64
        * LENGTH_BONUS_STEP;

    (coverage + length_bonus).round().min(100.0) as u8
}

/// Maps a score to its qualitative feedback tier. Bands are closed-open
/// except at the extremes: [80,100] / [60,80) / [40,60) / [0,40).
pub fn feedback_for_score(score: u8) -> &'static str {
    if score >= 80 {
        "Excellent response! You covered the key points well and provided good detail. Your answer demonstrates strong understanding and experience."
    } else if score >= 60 {
        "Good response! You touched on some important points. Consider adding more specific examples and details to strengthen your answer."
    } else if score >= 40 {
        "Decent start, but your response could be more comprehensive. Try to address more of the key points and provide specific examples."
    } else {
        "Your response needs more development. Focus on providing specific examples and addressing the core aspects of the question."
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pluggable scorer trait
// ────────────────────────────────────────────────────────────────────────────

/// The response scorer seam. Carried in `AppState` as
/// `Arc<dyn ResponseScorer>`; swap implementations without touching the
/// endpoint or handler code.
#[async_trait]
pub trait ResponseScorer: Send + Sync {
    async fn score(
        &self,
        question: &InterviewQuestion,
        response: &str,
    ) -> Result<u8, AppError>;
}

/// Default keyword-overlap scorer.
pub struct KeywordResponseScorer;

#[async_trait]
impl ResponseScorer for KeywordResponseScorer {
    async fn score(
        &self,
        question: &InterviewQuestion,
        response: &str,
    ) -> Result<u8, AppError> {
        Ok(score_response(response, question.expected_points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAR_POINTS: &[&str] = &[
        "Specific situation",
        "Actions taken",
        "Positive outcome",
        "Lessons learned",
    ];

    /// Builds a response with an exact token count, seeded with the given
    /// keywords and padded with filler.
    fn response_with(words: usize, keywords: &[&str]) -> String {
        let mut tokens: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
        while tokens.len() < words {
            tokens.push(format!("filler{}", tokens.len()));
        }
        tokens.truncate(words);
        tokens.join(" ")
    }

    #[test]
    fn test_empty_response_scores_zero() {
        assert_eq!(score_response("", STAR_POINTS), 0);
        assert_eq!(score_response("   \n\t  ", STAR_POINTS), 0);
    }

    #[test]
    fn test_single_word_overlap_covers_a_phrase() {
        // "situation" alone covers "Specific situation".
        let score = score_response("the situation", STAR_POINTS);
        // 1/4 * 70 = 17.5 → 18, no length bonus.
        assert_eq!(score, 18);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            score_response("SITUATION", STAR_POINTS),
            score_response("situation", STAR_POINTS)
        );
    }

    #[test]
    fn test_phrase_containment_not_required() {
        // "outcome" matches even though "positive outcome" never appears.
        let score = score_response("we reached a good outcome", STAR_POINTS);
        assert_eq!(score, 18);
    }

    #[test]
    fn test_substring_overlap_does_not_count() {
        // "situational" is not the verbatim token "situation".
        assert_eq!(score_response("situational awareness helps", STAR_POINTS), 0);
    }

    // The literal scenario: 160 words covering situation/actions/outcome but
    // not lessons → 3/4 * 70 + 30 = 82.5 → 83, excellent tier.
    #[test]
    fn test_three_of_four_points_at_160_words() {
        let response = response_with(160, &["situation", "actions", "outcome"]);
        let score = score_response(&response, STAR_POINTS);
        assert_eq!(score, 83);
        assert!(feedback_for_score(score).starts_with("Excellent"));
    }

    #[test]
    fn test_short_response_with_no_coverage_scores_zero() {
        let response = response_with(10, &[]);
        let score = score_response(&response, STAR_POINTS);
        assert_eq!(score, 0);
        assert!(feedback_for_score(score).starts_with("Your response needs"));
    }

    #[test]
    fn test_length_bonuses_are_cumulative() {
        // Full coverage at each length band.
        let all = &["situation", "actions", "outcome", "lessons"];
        assert_eq!(score_response(&response_with(50, all), STAR_POINTS), 70);
        assert_eq!(score_response(&response_with(51, all), STAR_POINTS), 80);
        assert_eq!(score_response(&response_with(101, all), STAR_POINTS), 90);
        assert_eq!(score_response(&response_with(151, all), STAR_POINTS), 100);
    }

    #[test]
    fn test_score_is_capped_at_100() {
        let all = &["situation", "actions", "outcome", "lessons"];
        let score = score_response(&response_with(500, all), STAR_POINTS);
        assert_eq!(score, 100);
    }

    #[test]
    fn test_feedback_tier_boundaries() {
        assert!(feedback_for_score(100).starts_with("Excellent"));
        assert!(feedback_for_score(80).starts_with("Excellent"));
        assert!(feedback_for_score(79).starts_with("Good"));
        assert!(feedback_for_score(60).starts_with("Good"));
        assert!(feedback_for_score(59).starts_with("Decent"));
        assert!(feedback_for_score(40).starts_with("Decent"));
        assert!(feedback_for_score(39).starts_with("Your response needs"));
        assert!(feedback_for_score(0).starts_with("Your response needs"));
    }

    #[tokio::test]
    async fn test_keyword_scorer_delegates_to_score_response() {
        use crate::catalog::Catalog;

        let catalog = Catalog::builtin();
        let question = catalog.question("behavioral-1").unwrap();
        let scorer = KeywordResponseScorer;
        let score = scorer.score(question, "the situation was tense").await.unwrap();
        assert_eq!(score, score_response("the situation was tense", question.expected_points));
    }
}
