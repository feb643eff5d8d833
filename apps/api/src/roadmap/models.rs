use serde::{Deserialize, Serialize};

use crate::market::models::MarketInsights;

/// A career-transition request as submitted by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRequest {
    pub current_role: String,
    pub current_skills: String,
    pub dream_job: String,
    pub experience: String,
    pub timeline: String,
    #[serde(default)]
    pub additional_info: Option<String>,
}

/// One phase of a roadmap. Every field is required on the wire, so a
/// generated phase missing any of them fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub courses: Vec<String>,
    pub projects: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub steps: Vec<RoadmapPhase>,
}

/// The externally visible result of `POST /generate-roadmap`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapResponse {
    pub title: String,
    pub timeline: String,
    pub steps: Vec<RoadmapPhase>,
    pub market_insights: MarketInsights,
}
