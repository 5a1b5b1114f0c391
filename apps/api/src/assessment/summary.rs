//! Assessment summary — progress and per-category averages for a profile.

use serde::Serialize;

use crate::assessment::profile::SkillProfile;
use crate::catalog::skills::MAX_SKILL_LEVEL;
use crate::catalog::Catalog;

#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub id: &'static str,
    pub name: &'static str,
    /// Mean rated level across the category's skills, 0.0–5.0.
    pub average_level: f64,
    /// `average_level` expressed against the 0–5 scale, rounded.
    pub percentage: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    /// Share of taxonomy skills rated above 0, rounded percent.
    pub overall_progress: u8,
    pub categories: Vec<CategorySummary>,
}

/// Computes the completion-screen summary: how much of the taxonomy has been
/// rated, and the average level per category.
pub fn assessment_summary(catalog: &Catalog, profile: &SkillProfile) -> AssessmentSummary {
    let total_skills = catalog.skills().count();
    let rated = catalog
        .skills()
        .filter(|s| profile.level(s.id) > 0)
        .count();
    let overall_progress = if total_skills > 0 {
        ((rated as f64 / total_skills as f64) * 100.0).round() as u8
    } else {
        0
    };

    let categories = catalog
        .skill_categories
        .iter()
        .map(|category| {
            let count = category.skills.len();
            let total: u32 = category
                .skills
                .iter()
                .map(|s| profile.level(s.id) as u32)
                .sum();
            let average_level = if count > 0 {
                total as f64 / count as f64
            } else {
                0.0
            };
            CategorySummary {
                id: category.id,
                name: category.name,
                average_level,
                percentage: ((average_level / MAX_SKILL_LEVEL as f64) * 100.0).round() as u8,
            }
        })
        .collect();

    AssessmentSummary {
        overall_progress,
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::profile::SkillRating;

    fn profile(ratings: &[(&str, u8)]) -> SkillProfile {
        let ratings: Vec<SkillRating> = ratings
            .iter()
            .map(|(id, level)| SkillRating {
                skill_id: id.to_string(),
                level: *level,
            })
            .collect();
        SkillProfile::from_ratings(&ratings)
    }

    #[test]
    fn test_empty_profile_has_zero_progress() {
        let catalog = Catalog::builtin();
        let summary = assessment_summary(&catalog, &SkillProfile::default());
        assert_eq!(summary.overall_progress, 0);
        assert!(summary.categories.iter().all(|c| c.percentage == 0));
    }

    #[test]
    fn test_partial_progress_rounds() {
        let catalog = Catalog::builtin();
        // 3 of 15 skills rated → 20%
        let summary = assessment_summary(
            &catalog,
            &profile(&[("programming", 3), ("design", 2), ("teamwork", 5)]),
        );
        assert_eq!(summary.overall_progress, 20);
    }

    #[test]
    fn test_category_average_only_counts_own_skills() {
        let catalog = Catalog::builtin();
        // All five technical skills at 4 → average 4.0, 80%.
        let summary = assessment_summary(
            &catalog,
            &profile(&[
                ("programming", 4),
                ("web-dev", 4),
                ("data-analysis", 4),
                ("ai-ml", 4),
                ("cloud", 4),
            ]),
        );
        let technical = summary
            .categories
            .iter()
            .find(|c| c.id == "technical")
            .unwrap();
        assert!((technical.average_level - 4.0).abs() < f64::EPSILON);
        assert_eq!(technical.percentage, 80);

        let creative = summary
            .categories
            .iter()
            .find(|c| c.id == "creative")
            .unwrap();
        assert_eq!(creative.percentage, 0);
    }
}
