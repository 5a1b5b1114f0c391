// Skill matching: compatibility percentages, best-path selection, and the
// threshold-based job match shared with the market module.

pub mod handlers;
pub mod path_match;
