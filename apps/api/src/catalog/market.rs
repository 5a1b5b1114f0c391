//! Job market catalog — static role statistics and skill demand trends.
//!
//! Figures are snapshot data, not live feeds. The analysis layer attaches a
//! per-role skill match on top of these entries.

use serde::Serialize;

// The snapshot only carries high-demand roles today; the lower bands are
// part of the demand scale regardless.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemandLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub median: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobLocation {
    pub city: &'static str,
    pub state: &'static str,
    pub average_salary: u32,
    pub openings: u32,
}

/// One role in the job market snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct JobMarketEntry {
    pub role: &'static str,
    pub category: &'static str,
    pub average_salary: SalaryRange,
    /// Projected growth rate, percent.
    pub growth_rate: u32,
    pub demand_level: DemandLevel,
    pub open_positions: u32,
    pub required_skills: &'static [&'static str],
    pub locations: Vec<JobLocation>,
}

/// Demand trend for a single skill.
#[derive(Debug, Clone, Serialize)]
pub struct MarketTrend {
    pub skill: &'static str,
    pub category: &'static str,
    /// Year-over-year change in demand, percent.
    pub demand_change: i32,
    /// Current demand index, 0–100.
    pub current_demand: u32,
    pub projected_growth: u32,
    pub average_salary_impact: u32,
}

/// Builds the job market snapshot: 6 roles with location breakdowns.
pub fn job_market() -> Vec<JobMarketEntry> {
    vec![
        JobMarketEntry {
            role: "AI/ML Engineer",
            category: "Technology",
            average_salary: SalaryRange { min: 95_000, max: 180_000, median: 135_000 },
            growth_rate: 22,
            demand_level: DemandLevel::VeryHigh,
            open_positions: 15_420,
            required_skills: &["programming", "ai-ml", "data-analysis", "problem-solving"],
            locations: vec![
                location("San Francisco", "CA", 165_000, 2_840),
                location("Seattle", "WA", 145_000, 1_920),
                location("New York", "NY", 155_000, 2_150),
                location("Austin", "TX", 125_000, 1_680),
                location("Boston", "MA", 140_000, 1_230),
            ],
        },
        JobMarketEntry {
            role: "Full Stack Developer",
            category: "Technology",
            average_salary: SalaryRange { min: 75_000, max: 140_000, median: 105_000 },
            growth_rate: 13,
            demand_level: DemandLevel::High,
            open_positions: 28_750,
            required_skills: &["programming", "web-dev", "problem-solving", "teamwork"],
            locations: vec![
                location("San Francisco", "CA", 135_000, 4_200),
                location("New York", "NY", 120_000, 3_800),
                location("Seattle", "WA", 115_000, 2_900),
                location("Austin", "TX", 95_000, 2_400),
                location("Denver", "CO", 90_000, 1_850),
            ],
        },
        JobMarketEntry {
            role: "Product Manager",
            category: "Business",
            average_salary: SalaryRange { min: 85_000, max: 160_000, median: 120_000 },
            growth_rate: 19,
            demand_level: DemandLevel::VeryHigh,
            open_positions: 12_340,
            required_skills: &["leadership", "communication", "problem-solving", "innovation"],
            locations: vec![
                location("San Francisco", "CA", 155_000, 1_840),
                location("New York", "NY", 145_000, 1_620),
                location("Seattle", "WA", 135_000, 1_200),
                location("Los Angeles", "CA", 125_000, 980),
                location("Chicago", "IL", 110_000, 850),
            ],
        },
        JobMarketEntry {
            role: "UX Designer",
            category: "Design",
            average_salary: SalaryRange { min: 70_000, max: 130_000, median: 95_000 },
            growth_rate: 13,
            demand_level: DemandLevel::High,
            open_positions: 8_920,
            required_skills: &["design", "problem-solving", "communication", "innovation"],
            locations: vec![
                location("San Francisco", "CA", 125_000, 1_340),
                location("New York", "NY", 115_000, 1_180),
                location("Los Angeles", "CA", 105_000, 920),
                location("Seattle", "WA", 100_000, 780),
                location("Austin", "TX", 85_000, 640),
            ],
        },
        JobMarketEntry {
            role: "Data Scientist",
            category: "Technology",
            average_salary: SalaryRange { min: 90_000, max: 170_000, median: 125_000 },
            growth_rate: 25,
            demand_level: DemandLevel::VeryHigh,
            open_positions: 11_680,
            required_skills: &["data-analysis", "programming", "ai-ml", "problem-solving"],
            locations: vec![
                location("San Francisco", "CA", 160_000, 1_920),
                location("New York", "NY", 145_000, 1_680),
                location("Seattle", "WA", 135_000, 1_240),
                location("Boston", "MA", 130_000, 980),
                location("Austin", "TX", 115_000, 820),
            ],
        },
        JobMarketEntry {
            role: "DevOps Engineer",
            category: "Technology",
            average_salary: SalaryRange { min: 85_000, max: 150_000, median: 115_000 },
            growth_rate: 18,
            demand_level: DemandLevel::High,
            open_positions: 9_840,
            required_skills: &["cloud", "programming", "problem-solving", "teamwork"],
            locations: vec![
                location("Seattle", "WA", 140_000, 1_420),
                location("San Francisco", "CA", 145_000, 1_380),
                location("Austin", "TX", 110_000, 1_120),
                location("New York", "NY", 125_000, 980),
                location("Denver", "CO", 105_000, 740),
            ],
        },
    ]
}

/// Builds the skill demand trend table.
pub fn market_trends() -> Vec<MarketTrend> {
    vec![
        trend("AI/Machine Learning", "Technology", 45, 92, 38, 25_000),
        trend("Cloud Computing", "Technology", 32, 88, 28, 18_000),
        trend("Data Analysis", "Technology", 28, 85, 25, 15_000),
        trend("Product Management", "Business", 24, 78, 22, 12_000),
        trend("UX Design", "Design", 18, 72, 16, 8_000),
        trend("Cybersecurity", "Technology", 35, 89, 31, 20_000),
    ]
}

fn location(city: &'static str, state: &'static str, average_salary: u32, openings: u32) -> JobLocation {
    JobLocation {
        city,
        state,
        average_salary,
        openings,
    }
}

fn trend(
    skill: &'static str,
    category: &'static str,
    demand_change: i32,
    current_demand: u32,
    projected_growth: u32,
    average_salary_impact: u32,
) -> MarketTrend {
    MarketTrend {
        skill,
        category,
        demand_change,
        current_demand,
        projected_growth,
        average_salary_impact,
    }
}
