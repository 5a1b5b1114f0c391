// Skill assessment: the caller-owned skill profile and the completion
// summary. The API stores nothing — ratings arrive with each request.

pub mod handlers;
pub mod profile;
pub mod summary;
