//! Roadmap response parser: turns raw generated text into a 4-phase `Roadmap`.
//!
//! Tiers, in order:
//! 1. JSON payload between the first `{` and the last `}` with a `steps` key.
//! 2. Text segmentation on the literal marker `"Phase"`; content is generic.
//!
//! Both tiers are normalized to exactly `ROADMAP_PHASE_COUNT` phases. This module
//! never returns an error: every failure degrades to the next tier.

use tracing::{debug, warn};

use crate::roadmap::models::{Roadmap, RoadmapPhase};

/// Number of phases every roadmap carries after normalization.
pub const ROADMAP_PHASE_COUNT: usize = 4;

/// Case-sensitive marker the prompt asks the backend to use for each phase.
const PHASE_MARKER: &str = "Phase";

/// Parses the backend's raw text into a normalized roadmap.
pub fn parse_roadmap_response(text: &str) -> Roadmap {
    let steps = match extract_structured_roadmap(text) {
        Some(roadmap) => {
            debug!("Parsed structured roadmap with {} phases", roadmap.steps.len());
            roadmap.steps
        }
        None => {
            warn!("Generated roadmap had no usable JSON payload, falling back to text segmentation");
            segment_phases(text)
        }
    };

    Roadmap {
        steps: normalize_phases(steps),
    }
}

/// Tier 1: deserializes the span from the first `{` to the last `}`.
fn extract_structured_roadmap(text: &str) -> Option<Roadmap> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    match serde_json::from_str::<Roadmap>(&text[start..=end]) {
        Ok(roadmap) => Some(roadmap),
        Err(e) => {
            debug!("Roadmap JSON payload rejected: {e}");
            None
        }
    }
}

/// Tier 2: one placeholder phase per non-empty segment after the first.
fn segment_phases(text: &str) -> Vec<RoadmapPhase> {
    text.split(PHASE_MARKER)
        .skip(1)
        .filter(|segment| !segment.trim().is_empty())
        .enumerate()
        .map(|(i, _)| RoadmapPhase {
            phase: format!("Phase {}", i + 1),
            duration: "2-3 months".to_string(),
            skills: vec!["Skill analysis from text".to_string()],
            courses: vec!["Course recommendations".to_string()],
            projects: vec!["Project suggestions".to_string()],
            description: "Phase description extracted from text".to_string(),
        })
        .collect()
}

/// Truncates to the first four phases, or pads with synthetic ones.
pub fn normalize_phases(mut steps: Vec<RoadmapPhase>) -> Vec<RoadmapPhase> {
    if steps.len() != ROADMAP_PHASE_COUNT {
        debug!(
            "Normalizing roadmap from {} to {} phases",
            steps.len(),
            ROADMAP_PHASE_COUNT
        );
    }

    steps.truncate(ROADMAP_PHASE_COUNT);
    while steps.len() < ROADMAP_PHASE_COUNT {
        steps.push(padding_phase(steps.len() + 1));
    }
    steps
}

fn padding_phase(number: usize) -> RoadmapPhase {
    RoadmapPhase {
        phase: format!("Phase {number}"),
        duration: "1-2 months".to_string(),
        skills: vec!["Additional skills".to_string()],
        courses: vec!["Additional courses".to_string()],
        projects: vec!["Additional projects".to_string()],
        description: "Additional phase for comprehensive learning".to_string(),
    }
}
