//! Skill matcher — compatibility between a skill profile and career targets.
//!
//! Two of these rankings deliberately disagree: `match_percentage` normalizes
//! by required-skill count while `best_path` compares raw level sums, so they
//! can order paths differently when required-skill lists have different
//! lengths. Callers must not assume they agree.

use crate::assessment::profile::SkillProfile;
use crate::catalog::paths::CareerPath;
use crate::catalog::skills::MAX_SKILL_LEVEL;

/// Default level a required skill must reach to count as "held" in job
/// matching.
pub const DEFAULT_JOB_SKILL_THRESHOLD: u8 = 3;

/// Compatibility percentage for one path: summed required-skill levels over
/// the maximum possible sum, rounded to the nearest integer. Unrated skills
/// contribute 0. A path with no required skills scores 0 rather than
/// dividing by zero.
pub fn match_percentage(path: &CareerPath, profile: &SkillProfile) -> u8 {
    if path.required_skills.is_empty() {
        return 0;
    }
    let actual: u32 = path
        .required_skills
        .iter()
        .map(|id| profile.level(id) as u32)
        .sum();
    let possible = path.required_skills.len() as u32 * MAX_SKILL_LEVEL as u32;
    ((actual as f64 / possible as f64) * 100.0).round() as u8
}

/// Picks the path with the highest *unnormalized* level sum. Ties go to the
/// earlier catalog entry (strict `>`), which also makes the first path the
/// answer when every sum is 0. Returns `None` only for an empty slice.
pub fn best_path<'a>(paths: &'a [CareerPath], profile: &SkillProfile) -> Option<&'a CareerPath> {
    let mut best = paths.first()?;
    let mut highest: u32 = 0;

    for path in paths {
        let sum: u32 = path
            .required_skills
            .iter()
            .map(|id| profile.level(id) as u32)
            .sum();
        if sum > highest {
            highest = sum;
            best = path;
        }
    }

    Some(best)
}

/// Share of a role's required skills held at or above `threshold`, as a
/// truncated integer percentage. A skill at exactly the threshold counts.
pub fn skill_match_for_job(required: &[&str], profile: &SkillProfile, threshold: u8) -> u8 {
    if required.is_empty() {
        return 0;
    }
    let held = required
        .iter()
        .filter(|id| profile.level(id) >= threshold)
        .count();
    ((held * 100) / required.len()) as u8
}
