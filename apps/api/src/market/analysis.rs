//! Market analysis — attaches a per-role skill match to the job snapshot and
//! applies search/category filters.
//!
//! Reuses `matching::skill_match_for_job` at the default threshold, the same
//! way the path matcher consumes the profile.

use serde::Serialize;

use crate::assessment::profile::SkillProfile;
use crate::catalog::market::JobMarketEntry;
use crate::matching::path_match::{skill_match_for_job, DEFAULT_JOB_SKILL_THRESHOLD};

/// A job market entry with the caller's computed skill match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedJob {
    #[serde(flatten)]
    pub job: JobMarketEntry,
    pub skill_match: u8,
}

/// Computes matches, filters, and sorts the snapshot.
///
/// - `search`: case-insensitive substring match on the role name.
/// - `category`: "all" (or `None`) keeps everything, otherwise an exact
///   case-insensitive category match.
/// - Result is sorted by skill match, best first; the sort is stable so
///   equal matches keep snapshot order.
pub fn matched_jobs(
    jobs: &[JobMarketEntry],
    profile: &SkillProfile,
    search: Option<&str>,
    category: Option<&str>,
) -> Vec<MatchedJob> {
    let search = search.map(str::to_lowercase);
    let category = category
        .map(str::to_lowercase)
        .filter(|c| c != "all");

    let mut matched: Vec<MatchedJob> = jobs
        .iter()
        .filter(|job| match &search {
            Some(term) => job.role.to_lowercase().contains(term),
            None => true,
        })
        .filter(|job| match &category {
            Some(cat) => job.category.to_lowercase() == *cat,
            None => true,
        })
        .map(|job| MatchedJob {
            skill_match: skill_match_for_job(
                job.required_skills,
                profile,
                DEFAULT_JOB_SKILL_THRESHOLD,
            ),
            job: job.clone(),
        })
        .collect();

    matched.sort_by(|a, b| b.skill_match.cmp(&a.skill_match));
    matched
}
