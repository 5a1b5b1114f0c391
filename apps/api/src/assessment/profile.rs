//! Skill profile — the caller-owned set of rated skills.
//!
//! The API is stateless: clients persist ratings however they like and send
//! them with each request. Lookups default to level 0 for unrated or unknown
//! ids; a missing skill is never an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::skills::MAX_SKILL_LEVEL;
use crate::errors::AppError;

/// One user rating, as submitted in request bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRating {
    pub skill_id: String,
    /// 0–5; 0 means unrated.
    pub level: u8,
}

/// A user's rated skill set, keyed by skill id.
#[derive(Debug, Clone, Default)]
pub struct SkillProfile {
    levels: HashMap<String, u8>,
}

impl SkillProfile {
    /// Builds a profile from ratings. Levels are capped at `MAX_SKILL_LEVEL`
    /// so every downstream percentage stays within [0, 100] even for inputs
    /// that bypassed handler validation.
    pub fn from_ratings(ratings: &[SkillRating]) -> Self {
        let levels = ratings
            .iter()
            .map(|r| (r.skill_id.clone(), r.level.min(MAX_SKILL_LEVEL)))
            .collect();
        SkillProfile { levels }
    }

    /// Lookup with default: unknown ids read as level 0.
    pub fn level(&self, skill_id: &str) -> u8 {
        self.levels.get(skill_id).copied().unwrap_or(0)
    }
}

/// Validates ratings at the handler boundary and builds a profile.
/// Levels above 5 are a client error, not something to silently clamp.
pub fn profile_from_ratings(ratings: &[SkillRating]) -> Result<SkillProfile, AppError> {
    for rating in ratings {
        if rating.level > MAX_SKILL_LEVEL {
            return Err(AppError::Validation(format!(
                "skill '{}' rated {} — levels run 0 to {}",
                rating.skill_id, rating.level, MAX_SKILL_LEVEL
            )));
        }
    }
    Ok(SkillProfile::from_ratings(ratings))
}
