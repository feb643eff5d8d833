// Market data: salary/growth insights, trending skills, and mock job postings.
// Every lookup here resolves to a value; failures degrade to fixed fallbacks.

pub mod handlers;
pub mod insights;
pub mod models;
pub mod postings;
pub mod trending;
