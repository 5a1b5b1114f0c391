// Mock interview: keyword-overlap response scoring, feedback tiers, and
// session reports. No LLM calls — scoring is deterministic arithmetic.

pub mod handlers;
pub mod report;
pub mod scoring;
