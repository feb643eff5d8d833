//! Axum route handlers for the market data endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::market::models::{JobPosting, MarketInsights, TrendingSkillsResponse};
use crate::market::postings::{mock_job_postings, DEFAULT_LOCATION};
use crate::market::trending::trending_skills;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PostingsQuery {
    pub location: Option<String>,
}

/// GET /job-insights/:job_title
pub async fn handle_job_insights(
    State(state): State<AppState>,
    Path(job_title): Path<String>,
) -> Json<MarketInsights> {
    Json(state.insights.resolve(&job_title))
}

/// GET /trending-skills/:industry
pub async fn handle_trending_skills(Path(industry): Path<String>) -> Json<TrendingSkillsResponse> {
    let trending_skills = trending_skills(&industry);
    Json(TrendingSkillsResponse {
        industry,
        trending_skills,
    })
}

/// GET /job-postings/:job_title?location=
pub async fn handle_job_postings(
    Path(job_title): Path<String>,
    Query(query): Query<PostingsQuery>,
) -> Json<Vec<JobPosting>> {
    let location = query.location.as_deref().unwrap_or(DEFAULT_LOCATION);
    Json(mock_job_postings(&job_title, location))
}
