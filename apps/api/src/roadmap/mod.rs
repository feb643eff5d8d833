// Roadmap synthesis: prompt → generate → parse → fallback.
// All generation calls go through llm_client::TextGenerator.

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
