//! Axum route handlers for the Roadmap API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::roadmap::generator::build_roadmap_response;
use crate::roadmap::models::{RoadmapResponse, TransitionRequest};
use crate::state::AppState;

/// POST /generate-roadmap
///
/// Full pipeline: prompt → generate → parse/fallback, merged with market insights
/// for the dream job. Only a malformed request body is surfaced as an error.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    payload: Result<Json<TransitionRequest>, JsonRejection>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let Json(request) = payload.map_err(|e| {
        AppError::Validation(format!("Failed to generate roadmap: {}", e.body_text()))
    })?;

    let response = build_roadmap_response(state.llm.as_ref(), &state.insights, request).await;
    info!("Roadmap generated successfully");

    Ok(Json(response))
}
