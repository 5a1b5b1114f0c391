//! Skill taxonomy — the rateable skills, grouped by category.
//!
//! This is static configuration: the taxonomy is fixed at design time and
//! never mutated at runtime. User ratings live in `assessment::SkillProfile`,
//! keyed by these ids.

use serde::Serialize;

/// Levels run 0–5; 0 means "not yet rated".
pub const MAX_SKILL_LEVEL: u8 = 5;

/// A single rateable skill.
#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

/// A group of related skills presented together during assessment.
#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub skills: Vec<Skill>,
}

/// Human-readable label for a skill level.
pub fn level_description(level: u8) -> &'static str {
    match level {
        0 => "Not yet rated",
        1 => "Beginner - Just getting started",
        2 => "Novice - Some basic knowledge",
        3 => "Intermediate - Comfortable with basics",
        4 => "Advanced - Strong understanding",
        _ => "Expert - Highly proficient",
    }
}

/// Builds the full skill taxonomy: 15 skills across three categories.
pub fn skill_taxonomy() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            id: "technical",
            name: "Technical Skills",
            skills: vec![
                skill("programming", "Programming", "Writing and understanding code", "technical"),
                skill(
                    "web-dev",
                    "Web Development",
                    "Building websites and web applications",
                    "technical",
                ),
                skill(
                    "data-analysis",
                    "Data Analysis",
                    "Interpreting and analyzing data",
                    "technical",
                ),
                skill(
                    "ai-ml",
                    "AI/Machine Learning",
                    "Understanding AI and ML concepts",
                    "technical",
                ),
                skill("cloud", "Cloud Computing", "Working with cloud platforms", "technical"),
            ],
        },
        SkillCategory {
            id: "soft-skills",
            name: "Soft Skills",
            skills: vec![
                skill("communication", "Communication", "Expressing ideas clearly", "soft-skills"),
                skill("leadership", "Leadership", "Guiding and inspiring others", "soft-skills"),
                skill("teamwork", "Teamwork", "Collaborating effectively", "soft-skills"),
                skill(
                    "problem-solving",
                    "Problem Solving",
                    "Finding creative solutions",
                    "soft-skills",
                ),
                skill("adaptability", "Adaptability", "Adjusting to change", "soft-skills"),
            ],
        },
        SkillCategory {
            id: "creative",
            name: "Creative Skills",
            skills: vec![
                skill("design", "Design", "Creating visual solutions", "creative"),
                skill("writing", "Writing", "Crafting compelling content", "creative"),
                skill("video-editing", "Video Editing", "Creating and editing videos", "creative"),
                skill("marketing", "Marketing", "Promoting products and ideas", "creative"),
                skill("innovation", "Innovation", "Generating new ideas", "creative"),
            ],
        },
    ]
}

fn skill(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
) -> Skill {
    Skill {
        id,
        name,
        description,
        category,
    }
}
