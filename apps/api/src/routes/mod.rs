pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::market::handlers as market;
use crate::roadmap::handlers as roadmap;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/generate-roadmap", post(roadmap::handle_generate_roadmap))
        .route("/job-insights/:job_title", get(market::handle_job_insights))
        .route("/trending-skills/:industry", get(market::handle_trending_skills))
        .route("/job-postings/:job_title", get(market::handle_job_postings))
        .with_state(state)
}
