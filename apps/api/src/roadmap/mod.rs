// Roadmap generation: fixed four-milestone plan with weak-skill targeting.

pub mod generator;
pub mod handlers;
