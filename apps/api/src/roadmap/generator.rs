//! Roadmap generator — a deterministic 6-month plan for a chosen path.
//!
//! Weakest required skills first: anything below level 4 is a candidate,
//! sorted ascending by level (stable, so catalog order breaks ties). The
//! milestone shape is fixed; only the target skills vary with the profile.

use serde::Serialize;

use crate::assessment::profile::SkillProfile;
use crate::catalog::paths::CareerPath;

/// Level at or above which a required skill no longer needs foundation work.
const STRONG_SKILL_LEVEL: u8 = 4;

/// Skills every portfolio phase targets regardless of path.
const PORTFOLIO_SKILLS: &[&str] = &["communication", "leadership"];

#[allow(dead_code)] // Low is part of the priority scale; no milestone uses it yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Learn,
    Practice,
    Project,
    Read,
}

/// A daily micro-learning task within a milestone.
#[derive(Debug, Clone, Serialize)]
pub struct DailyTask {
    pub id: String,
    pub title: &'static str,
    pub description: &'static str,
    pub task_type: TaskType,
    pub estimated_time: &'static str,
    pub resources: &'static [&'static str],
}

/// One phase of the roadmap.
#[derive(Debug, Clone, Serialize)]
pub struct Milestone {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub target_skills: Vec<&'static str>,
    pub duration: &'static str,
    pub priority: Priority,
    pub tasks: Vec<DailyTask>,
}

struct TaskTemplate {
    title: &'static str,
    description: &'static str,
    task_type: TaskType,
    estimated_time: &'static str,
    resources: &'static [&'static str],
}

/// Required skills below `STRONG_SKILL_LEVEL`, weakest first.
fn weak_skills(path: &CareerPath, profile: &SkillProfile) -> Vec<&'static str> {
    let mut weak: Vec<(&'static str, u8)> = path
        .required_skills
        .iter()
        .map(|&id| (id, profile.level(id)))
        .filter(|&(_, level)| level < STRONG_SKILL_LEVEL)
        .collect();
    weak.sort_by_key(|&(_, level)| level);
    weak.into_iter().map(|(id, _)| id).collect()
}

/// Generates the four-milestone roadmap for a path and profile.
pub fn generate_roadmap(path: &CareerPath, profile: &SkillProfile) -> Vec<Milestone> {
    let weak = weak_skills(path, profile);

    vec![
        Milestone {
            id: "foundation",
            title: "Build Strong Foundation",
            description: "Master the fundamental skills needed for your career path",
            target_skills: weak.iter().take(2).copied().collect(),
            duration: "Weeks 1-8",
            priority: Priority::High,
            tasks: daily_tasks("foundation"),
        },
        Milestone {
            id: "intermediate",
            title: "Develop Intermediate Skills",
            description: "Advance your knowledge and start building projects",
            target_skills: weak.iter().skip(2).take(2).copied().collect(),
            duration: "Weeks 9-16",
            priority: Priority::High,
            tasks: daily_tasks("intermediate"),
        },
        Milestone {
            id: "advanced",
            title: "Advanced Specialization",
            description: "Specialize in your chosen field and build a portfolio",
            target_skills: path.required_skills.to_vec(),
            duration: "Weeks 17-24",
            priority: Priority::Medium,
            tasks: daily_tasks("advanced"),
        },
        Milestone {
            id: "portfolio",
            title: "Portfolio & Job Prep",
            description: "Create impressive projects and prepare for interviews",
            target_skills: PORTFOLIO_SKILLS.to_vec(),
            duration: "Weeks 25-26",
            priority: Priority::High,
            tasks: daily_tasks("portfolio"),
        },
    ]
}

fn daily_tasks(phase: &'static str) -> Vec<DailyTask> {
    templates_for(phase)
        .iter()
        .enumerate()
        .map(|(index, t)| DailyTask {
            id: format!("{phase}-task-{index}"),
            title: t.title,
            description: t.description,
            task_type: t.task_type,
            estimated_time: t.estimated_time,
            resources: t.resources,
        })
        .collect()
}

fn templates_for(phase: &str) -> &'static [TaskTemplate] {
    match phase {
        "foundation" => &[
            TaskTemplate {
                title: "Complete online course module",
                description: "Study fundamental concepts and take notes",
                task_type: TaskType::Learn,
                estimated_time: "45 min",
                resources: &["Coursera", "edX", "Udemy"],
            },
            TaskTemplate {
                title: "Practice coding exercises",
                description: "Solve 3-5 beginner problems",
                task_type: TaskType::Practice,
                estimated_time: "30 min",
                resources: &["LeetCode", "HackerRank", "Codewars"],
            },
            TaskTemplate {
                title: "Read industry articles",
                description: "Stay updated with latest trends",
                task_type: TaskType::Read,
                estimated_time: "15 min",
                resources: &["Medium", "Dev.to", "TechCrunch"],
            },
        ],
        "intermediate" => &[
            TaskTemplate {
                title: "Build mini-project",
                description: "Apply learned concepts in a small project",
                task_type: TaskType::Project,
                estimated_time: "60 min",
                resources: &["GitHub", "CodePen", "Repl.it"],
            },
            TaskTemplate {
                title: "Advanced tutorial",
                description: "Follow intermediate-level tutorials",
                task_type: TaskType::Learn,
                estimated_time: "45 min",
                resources: &["YouTube", "FreeCodeCamp", "Pluralsight"],
            },
        ],
        "advanced" => &[
            TaskTemplate {
                title: "Contribute to open source",
                description: "Make contributions to existing projects",
                task_type: TaskType::Project,
                estimated_time: "90 min",
                resources: &["GitHub", "GitLab", "First Timers Only"],
            },
            TaskTemplate {
                title: "Advanced specialization",
                description: "Deep dive into specialized topics",
                task_type: TaskType::Learn,
                estimated_time: "60 min",
                resources: &["Advanced courses", "Documentation", "Research papers"],
            },
        ],
        "portfolio" => &[
            TaskTemplate {
                title: "Portfolio project",
                description: "Work on showcase project",
                task_type: TaskType::Project,
                estimated_time: "120 min",
                resources: &["Personal website", "GitHub", "Behance"],
            },
            TaskTemplate {
                title: "Interview preparation",
                description: "Practice technical and behavioral questions",
                task_type: TaskType::Practice,
                estimated_time: "45 min",
                resources: &["Pramp", "InterviewBit", "Glassdoor"],
            },
        ],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::profile::SkillRating;
    use crate::catalog::Catalog;

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

    fn ai_path() -> CareerPath {
        Catalog::builtin().career_path("ai-developer").unwrap().clone()
    }

    #[test]
    fn test_roadmap_has_four_fixed_milestones() {
        let roadmap = generate_roadmap(&ai_path(), &SkillProfile::default());
        let ids: Vec<&str> = roadmap.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["foundation", "intermediate", "advanced", "portfolio"]);
    }

    #[test]
    fn test_foundation_targets_two_weakest_skills() {
        // ai-developer requires programming, ai-ml, data-analysis, problem-solving.
        let profile = profile(&[
            ("programming", 3),
            ("ai-ml", 1),
            ("data-analysis", 2),
            ("problem-solving", 5),
        ]);
        let roadmap = generate_roadmap(&ai_path(), &profile);
        assert_eq!(roadmap[0].target_skills, vec!["ai-ml", "data-analysis"]);
        assert_eq!(roadmap[1].target_skills, vec!["programming"]);
    }

    #[test]
    fn test_strong_skills_are_not_foundation_targets() {
        let profile = profile(&[
            ("programming", 5),
            ("ai-ml", 4),
            ("data-analysis", 4),
            ("problem-solving", 4),
        ]);
        let roadmap = generate_roadmap(&ai_path(), &profile);
        assert!(roadmap[0].target_skills.is_empty());
        assert!(roadmap[1].target_skills.is_empty());
    }

    #[test]
    fn test_weak_skill_ties_keep_catalog_order() {
        // All at level 0: order must follow required_skills order.
        let roadmap = generate_roadmap(&ai_path(), &SkillProfile::default());
        assert_eq!(roadmap[0].target_skills, vec!["programming", "ai-ml"]);
        assert_eq!(roadmap[1].target_skills, vec!["data-analysis", "problem-solving"]);
    }

    #[test]
    fn test_advanced_covers_all_required_and_portfolio_is_fixed() {
        let roadmap = generate_roadmap(&ai_path(), &SkillProfile::default());
        assert_eq!(roadmap[2].target_skills, ai_path().required_skills.to_vec());
        assert_eq!(roadmap[3].target_skills, vec!["communication", "leadership"]);
    }

    #[test]
    fn test_task_ids_encode_phase_and_index() {
        let roadmap = generate_roadmap(&ai_path(), &SkillProfile::default());
        assert_eq!(roadmap[0].tasks.len(), 3);
        assert_eq!(roadmap[0].tasks[0].id, "foundation-task-0");
        assert_eq!(roadmap[3].tasks[1].id, "portfolio-task-1");
    }
}
