//! Roadmap generation: orchestrates the full synthesis pipeline.
//!
//! Flow: build prompt → generate → parse (JSON, then text segmentation) →
//!       normalize to 4 phases → merge with market insights.
//!
//! A backend failure skips parsing and serves the fallback roadmap. Nothing in
//! this pipeline returns an error to the caller.

use tracing::{info, warn};

use crate::llm_client::TextGenerator;
use crate::market::insights::MarketInsightResolver;
use crate::roadmap::fallback::fallback_roadmap;
use crate::roadmap::models::{Roadmap, RoadmapResponse, TransitionRequest};
use crate::roadmap::parser::parse_roadmap_response;
use crate::roadmap::prompts::{
    build_roadmap_prompt, ROADMAP_MAX_OUTPUT_TOKENS, ROADMAP_SYSTEM, ROADMAP_TEMPERATURE,
};

/// Title shown for every roadmap, whichever tier produced the steps.
pub fn roadmap_title(current_role: &str, dream_job: &str) -> String {
    format!("Career Roadmap: {current_role} → {dream_job}")
}

/// Generates a normalized roadmap for the request. Never fails.
pub async fn generate_roadmap(llm: &dyn TextGenerator, request: &TransitionRequest) -> Roadmap {
    let prompt = build_roadmap_prompt(request);

    match llm
        .generate(
            ROADMAP_SYSTEM,
            &prompt,
            ROADMAP_TEMPERATURE,
            ROADMAP_MAX_OUTPUT_TOKENS,
        )
        .await
    {
        Ok(text) => parse_roadmap_response(&text),
        Err(e) => {
            warn!("Error generating roadmap with LLM: {e}");
            fallback_roadmap(&request.current_role, &request.dream_job, &request.timeline)
        }
    }
}

/// Runs roadmap generation and market insight resolution and merges the results.
pub async fn build_roadmap_response(
    llm: &dyn TextGenerator,
    resolver: &MarketInsightResolver,
    request: TransitionRequest,
) -> RoadmapResponse {
    info!(
        "Generating roadmap for transition: {} -> {}",
        request.current_role, request.dream_job
    );

    let roadmap = generate_roadmap(llm, &request).await;
    let market_insights = resolver.resolve(&request.dream_job);

    RoadmapResponse {
        title: roadmap_title(&request.current_role, &request.dream_job),
        timeline: request.timeline,
        steps: roadmap.steps,
        market_insights,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;
    use crate::roadmap::parser::ROADMAP_PHASE_COUNT;

    /// Always fails like an unreachable backend.
    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _: &str, _: &str, _: f32, _: u32) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 401,
                message: "Incorrect API key provided".to_string(),
            })
        }
    }

    /// Returns canned text and records the arguments it was called with.
    struct CannedGenerator {
        text: String,
        calls: Mutex<Vec<(String, String, f32, u32)>>,
    }

    impl CannedGenerator {
        fn new(text: &str) -> Self {
            Self {
                text: text.to_string(),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(
            &self,
            instructions: &str,
            user_prompt: &str,
            temperature: f32,
            max_output_tokens: u32,
        ) -> Result<String, LlmError> {
            self.calls.lock().unwrap().push((
                instructions.to_string(),
                user_prompt.to_string(),
                temperature,
                max_output_tokens,
            ));
            Ok(self.text.clone())
        }
    }

    fn request(current_role: &str, dream_job: &str) -> TransitionRequest {
        TransitionRequest {
            current_role: current_role.to_string(),
            current_skills: "Patient care".to_string(),
            dream_job: dream_job.to_string(),
            experience: "5 years".to_string(),
            timeline: "12 months".to_string(),
            additional_info: None,
        }
    }

    #[tokio::test]
    async fn test_backend_failure_serves_fallback_roadmap() {
        let response = build_roadmap_response(
            &FailingGenerator,
            &MarketInsightResolver::new(),
            request("Nurse", "Software Engineer"),
        )
        .await;

        assert_eq!(response.title, "Career Roadmap: Nurse → Software Engineer");
        assert_eq!(response.timeline, "12 months");
        assert_eq!(
            response.steps,
            fallback_roadmap("Nurse", "Software Engineer", "12 months").steps
        );
        assert_eq!(response.market_insights.average_salary, "$85,000 - $150,000");
    }

    #[tokio::test]
    async fn test_generator_receives_fixed_parameters() {
        let llm = CannedGenerator::new("{}");
        let req = request("Nurse", "Data Scientist");
        generate_roadmap(&llm, &req).await;

        let calls = llm.calls.lock().unwrap();
        assert_eq!(calls.len(), 1, "exactly one attempt per request");
        let (instructions, prompt, temperature, max_tokens) = &calls[0];
        assert_eq!(instructions, ROADMAP_SYSTEM);
        assert_eq!(prompt, &build_roadmap_prompt(&req));
        assert!((temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(*max_tokens, 2000);
    }

    #[tokio::test]
    async fn test_structured_output_flows_through() {
        let llm = CannedGenerator::new(
            r#"Here you go:
            {"steps": [
              {"phase": "SQL Basics", "duration": "2 months", "skills": ["SQL"], "courses": ["Intro to SQL"], "projects": ["Sales dashboard"], "description": "Query data"},
              {"phase": "Python", "duration": "3 months", "skills": ["pandas"], "courses": ["Python for Data"], "projects": ["EDA notebook"], "description": "Analyze data"}
            ]}
            Good luck!"#,
        );
        let response = build_roadmap_response(
            &llm,
            &MarketInsightResolver::new(),
            request("Teacher", "Data Scientist"),
        )
        .await;

        assert_eq!(response.title, "Career Roadmap: Teacher → Data Scientist");
        assert_eq!(response.steps.len(), ROADMAP_PHASE_COUNT);
        assert_eq!(response.steps[0].phase, "SQL Basics");
        assert_eq!(response.steps[1].phase, "Python");
        assert_eq!(response.steps[2].phase, "Phase 3");
    }

    #[tokio::test]
    async fn test_unstructured_output_is_segmented_not_replaced_by_fallback() {
        let llm = CannedGenerator::new("Phase 1: learn. Phase 2: build. Phase 3: ship.");
        let roadmap = generate_roadmap(&llm, &request("Nurse", "Software Engineer")).await;

        assert_eq!(roadmap.steps.len(), ROADMAP_PHASE_COUNT);
        assert_eq!(roadmap.steps[0].phase, "Phase 1");
        assert_eq!(roadmap.steps[0].duration, "2-3 months");
        assert_eq!(roadmap.steps[3].duration, "1-2 months");
    }
}
