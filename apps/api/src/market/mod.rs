// Job market analysis: skill matches over the static snapshot, plus trends.

pub mod analysis;
pub mod handlers;
