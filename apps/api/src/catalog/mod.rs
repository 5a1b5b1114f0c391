// Static configuration: skill taxonomy, career paths, interview banks,
// job market snapshot. Built once at startup and validated before serving.

pub mod handlers;
pub mod interviews;
pub mod market;
pub mod paths;
pub mod skills;

use std::collections::HashSet;

use anyhow::{bail, Result};

use crate::catalog::interviews::{interview_kinds, InterviewKind, InterviewQuestion};
use crate::catalog::market::{job_market, market_trends, JobMarketEntry, MarketTrend};
use crate::catalog::paths::{career_paths, CareerPath};
use crate::catalog::skills::{skill_taxonomy, Skill, SkillCategory};

/// All static catalogs, assembled once and shared via `AppState`.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub skill_categories: Vec<SkillCategory>,
    pub career_paths: Vec<CareerPath>,
    pub interview_kinds: Vec<InterviewKind>,
    pub job_market: Vec<JobMarketEntry>,
    pub market_trends: Vec<MarketTrend>,
}

impl Catalog {
    /// Assembles the built-in catalogs.
    pub fn builtin() -> Self {
        Catalog {
            skill_categories: skill_taxonomy(),
            career_paths: career_paths(),
            interview_kinds: interview_kinds(),
            job_market: job_market(),
            market_trends: market_trends(),
        }
    }

    /// Startup integrity check. A dangling skill id or an unscoreable
    /// question is a programming error in the static data, so it aborts
    /// startup rather than surfacing as a runtime condition.
    pub fn validate(&self) -> Result<()> {
        let known: HashSet<&str> = self.skills().map(|s| s.id).collect();

        if self.career_paths.is_empty() {
            bail!("career path catalog is empty");
        }
        for path in &self.career_paths {
            if path.required_skills.is_empty() {
                bail!("career path '{}' has no required skills", path.id);
            }
            for id in path.required_skills {
                if !known.contains(id) {
                    bail!("career path '{}' references unknown skill '{}'", path.id, id);
                }
            }
        }

        for job in &self.job_market {
            for id in job.required_skills {
                if !known.contains(id) {
                    bail!("job role '{}' references unknown skill '{}'", job.role, id);
                }
            }
        }

        for kind in &self.interview_kinds {
            if kind.questions.is_empty() {
                bail!("interview kind '{}' has no questions", kind.id);
            }
            for question in &kind.questions {
                if question.expected_points.is_empty() {
                    bail!("question '{}' has no expected points", question.id);
                }
                if question.time_limit_secs == 0 {
                    bail!("question '{}' has a zero time limit", question.id);
                }
            }
        }

        Ok(())
    }

    /// Iterates all skills across categories, in taxonomy order.
    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.skill_categories.iter().flat_map(|c| c.skills.iter())
    }

    pub fn career_path(&self, id: &str) -> Option<&CareerPath> {
        self.career_paths.iter().find(|p| p.id == id)
    }

    pub fn interview_kind(&self, id: &str) -> Option<&InterviewKind> {
        self.interview_kinds.iter().find(|k| k.id == id)
    }

    /// Looks up a question across every interview bank.
    pub fn question(&self, id: &str) -> Option<&InterviewQuestion> {
        self.interview_kinds
            .iter()
            .flat_map(|k| k.questions.iter())
            .find(|q| q.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        Catalog::builtin().validate().unwrap();
    }

    #[test]
    fn test_question_lookup_spans_all_kinds() {
        let catalog = Catalog::builtin();
        assert!(catalog.question("behavioral-1").is_some());
        assert!(catalog.question("technical-3").is_some());
        assert!(catalog.question("leadership-2").is_some());
        assert!(catalog.question("nonexistent").is_none());
    }

    #[test]
    fn test_career_path_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.career_path("ai-developer").unwrap().title, "AI Developer");
        assert!(catalog.career_path("astronaut").is_none());
    }

    #[test]
    fn test_validate_rejects_dangling_skill_reference() {
        let mut catalog = Catalog::builtin();
        catalog.career_paths[0].required_skills = &["programming", "quantum-basket-weaving"];
        let err = catalog.validate().unwrap_err().to_string();
        assert!(err.contains("quantum-basket-weaving"), "got: {err}");
    }

    #[test]
    fn test_validate_rejects_empty_required_skills() {
        let mut catalog = Catalog::builtin();
        catalog.career_paths[0].required_skills = &[];
        assert!(catalog.validate().is_err());
    }
}
