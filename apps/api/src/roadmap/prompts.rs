// Prompt constants and the prompt builder for roadmap generation.

use crate::roadmap::models::TransitionRequest;

/// System instruction describing the assistant's role.
pub const ROADMAP_SYSTEM: &str = "You are an expert career counselor and AI assistant \
    specializing in creating detailed, actionable career roadmaps. \
    You provide practical, step-by-step guidance tailored to individual career transitions.";

pub const ROADMAP_TEMPERATURE: f32 = 0.7;
pub const ROADMAP_MAX_OUTPUT_TOKENS: u32 = 2000;

/// Required output shape. Field names must match `RoadmapPhase` exactly.
const ROADMAP_OUTPUT_SHAPE: &str = r#"{
  "steps": [
    {
      "phase": "Phase Name",
      "duration": "X months",
      "skills": ["skill1", "skill2", "skill3"],
      "courses": ["course1", "course2"],
      "projects": ["project1", "project2"],
      "description": "Brief description of what this phase accomplishes"
    }
  ]
}"#;

/// Renders a transition request into the user prompt for the generation backend.
///
/// Pure: the same request always yields the same text. `additional_info` gets
/// its own bullet only when present and non-blank, and is inserted as given.
pub fn build_roadmap_prompt(request: &TransitionRequest) -> String {
    let additional_info = match request.additional_info.as_deref() {
        Some(info) if !info.trim().is_empty() => format!("- Additional Information: {info}\n"),
        _ => String::new(),
    };

    format!(
        r#"Create a detailed career roadmap for someone transitioning from "{current_role}" to "{dream_job}".

Current Situation:
- Current Role: {current_role}
- Current Skills: {current_skills}
- Experience Level: {experience}
- Timeline: {timeline}
{additional_info}
Please provide a structured roadmap with 4 phases, each containing:
1. Phase name and duration
2. Key skills to learn
3. Recommended courses/resources
4. Practical projects to build
5. Brief description of the phase

Format your response as a JSON object with this structure:
{shape}

Make the roadmap:
- Realistic and achievable within the specified timeline
- Progressive (building from basics to advanced)
- Practical with hands-on projects
- Industry-relevant and current
- Tailored to the specific career transition"#,
        current_role = request.current_role,
        dream_job = request.dream_job,
        current_skills = request.current_skills,
        experience = request.experience,
        timeline = request.timeline,
        additional_info = additional_info,
        shape = ROADMAP_OUTPUT_SHAPE,
    )
}
