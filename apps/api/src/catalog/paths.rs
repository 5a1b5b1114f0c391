//! Career path catalog — target occupations with required-skill lists.
//!
//! Salary and growth figures are descriptive metadata only; matching reads
//! nothing but `required_skills`.

use serde::Serialize;

/// A target occupation the matcher can rank against a skill profile.
#[derive(Debug, Clone, Serialize)]
pub struct CareerPath {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub required_skills: &'static [&'static str],
    pub average_salary: &'static str,
    pub growth_rate: &'static str,
}

/// Builds the career path catalog. Order matters: `best_path` breaks ties
/// in favor of the earlier entry.
pub fn career_paths() -> Vec<CareerPath> {
    vec![
        CareerPath {
            id: "ai-developer",
            title: "AI Developer",
            description: "Build intelligent applications using machine learning and AI",
            required_skills: &["programming", "ai-ml", "data-analysis", "problem-solving"],
            average_salary: "$95k - $150k",
            growth_rate: "+22% (Very High)",
        },
        CareerPath {
            id: "full-stack-dev",
            title: "Full-Stack Developer",
            description: "Create end-to-end web applications and systems",
            required_skills: &["programming", "web-dev", "problem-solving", "teamwork"],
            average_salary: "$75k - $120k",
            growth_rate: "+13% (High)",
        },
        CareerPath {
            id: "product-manager",
            title: "Product Manager",
            description: "Lead product strategy and cross-functional teams",
            required_skills: &["leadership", "communication", "problem-solving", "innovation"],
            average_salary: "$85k - $140k",
            growth_rate: "+19% (Very High)",
        },
        CareerPath {
            id: "ux-designer",
            title: "UX Designer",
            description: "Design user-centered digital experiences",
            required_skills: &["design", "problem-solving", "communication", "innovation"],
            average_salary: "$70k - $110k",
            growth_rate: "+13% (High)",
        },
    ]
}
