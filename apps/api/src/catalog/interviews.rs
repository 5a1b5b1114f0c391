//! Interview question banks — canned questions with expected-point lists.
//!
//! Expected points are short phrases; the scorer counts a point as covered
//! when any single word of the phrase appears in the response.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Behavioral,
    Technical,
    Situational,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single interview question with its scoring rubric.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub question_type: QuestionType,
    pub category: &'static str,
    pub difficulty: Difficulty,
    pub expected_points: &'static [&'static str],
    pub time_limit_secs: u32,
}

/// A themed bank of questions making up one mock interview.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewKind {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub questions: Vec<InterviewQuestion>,
}

/// Builds the three interview banks: behavioral, technical, leadership.
pub fn interview_kinds() -> Vec<InterviewKind> {
    vec![
        InterviewKind {
            id: "behavioral",
            title: "Behavioral Interview",
            description: "Common behavioral questions to assess soft skills and cultural fit",
            duration: "30 min",
            questions: vec![
                InterviewQuestion {
                    id: "behavioral-1",
                    prompt: "Tell me about a time when you had to work with a difficult team member. How did you handle it?",
                    question_type: QuestionType::Behavioral,
                    category: "Teamwork",
                    difficulty: Difficulty::Medium,
                    expected_points: &[
                        "Specific situation",
                        "Actions taken",
                        "Positive outcome",
                        "Lessons learned",
                    ],
                    time_limit_secs: 180,
                },
                InterviewQuestion {
                    id: "behavioral-2",
                    prompt: "Describe a challenging project you worked on. What made it challenging and how did you overcome it?",
                    question_type: QuestionType::Behavioral,
                    category: "Problem Solving",
                    difficulty: Difficulty::Medium,
                    expected_points: &[
                        "Clear challenge description",
                        "Problem-solving approach",
                        "Results achieved",
                    ],
                    time_limit_secs: 180,
                },
                InterviewQuestion {
                    id: "behavioral-3",
                    prompt: "Tell me about a time when you had to learn something new quickly. How did you approach it?",
                    question_type: QuestionType::Behavioral,
                    category: "Adaptability",
                    difficulty: Difficulty::Easy,
                    expected_points: &[
                        "Learning strategy",
                        "Time management",
                        "Application of knowledge",
                    ],
                    time_limit_secs: 150,
                },
            ],
        },
        InterviewKind {
            id: "technical",
            title: "Technical Interview",
            description: "Technical questions to assess programming and problem-solving skills",
            duration: "45 min",
            questions: vec![
                InterviewQuestion {
                    id: "technical-1",
                    prompt: "Explain the difference between let, const, and var in JavaScript. When would you use each?",
                    question_type: QuestionType::Technical,
                    category: "JavaScript",
                    difficulty: Difficulty::Easy,
                    expected_points: &[
                        "Scope differences",
                        "Hoisting behavior",
                        "Reassignment rules",
                        "Use cases",
                    ],
                    time_limit_secs: 120,
                },
                InterviewQuestion {
                    id: "technical-2",
                    prompt: "How would you optimize a slow-loading web page? Walk me through your debugging process.",
                    question_type: QuestionType::Technical,
                    category: "Performance",
                    difficulty: Difficulty::Medium,
                    expected_points: &[
                        "Performance analysis tools",
                        "Common bottlenecks",
                        "Optimization strategies",
                    ],
                    time_limit_secs: 240,
                },
                InterviewQuestion {
                    id: "technical-3",
                    prompt: "Design a simple REST API for a todo application. What endpoints would you create?",
                    question_type: QuestionType::Technical,
                    category: "System Design",
                    difficulty: Difficulty::Medium,
                    expected_points: &[
                        "CRUD operations",
                        "HTTP methods",
                        "Status codes",
                        "Data structure",
                    ],
                    time_limit_secs: 300,
                },
            ],
        },
        InterviewKind {
            id: "leadership",
            title: "Leadership Interview",
            description: "Questions focused on leadership potential and management skills",
            duration: "35 min",
            questions: vec![
                InterviewQuestion {
                    id: "leadership-1",
                    prompt: "Describe your leadership style. How do you motivate team members with different personalities?",
                    question_type: QuestionType::Behavioral,
                    category: "Leadership",
                    difficulty: Difficulty::Hard,
                    expected_points: &[
                        "Leadership philosophy",
                        "Adaptation strategies",
                        "Specific examples",
                    ],
                    time_limit_secs: 200,
                },
                InterviewQuestion {
                    id: "leadership-2",
                    prompt: "Tell me about a time when you had to make a difficult decision with limited information.",
                    question_type: QuestionType::Situational,
                    category: "Decision Making",
                    difficulty: Difficulty::Hard,
                    expected_points: &[
                        "Decision framework",
                        "Risk assessment",
                        "Stakeholder consideration",
                    ],
                    time_limit_secs: 180,
                },
            ],
        },
    ]
}
