//! Terminal fallback roadmap, served when the generation backend is unavailable.

use tracing::info;

use crate::roadmap::models::{Roadmap, RoadmapPhase};

fn phase(
    name: &str,
    duration: &str,
    skills: &[&str],
    courses: &[&str],
    projects: &[&str],
    description: &str,
) -> RoadmapPhase {
    RoadmapPhase {
        phase: name.to_string(),
        duration: duration.to_string(),
        skills: to_strings(skills),
        courses: to_strings(courses),
        projects: to_strings(projects),
        description: description.to_string(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Returns the fixed four-phase roadmap.
///
/// Content does not depend on the request; the role and timeline are only logged.
pub fn fallback_roadmap(current_role: &str, dream_job: &str, timeline: &str) -> Roadmap {
    info!("Serving fallback roadmap for {current_role} -> {dream_job} ({timeline})");

    Roadmap {
        steps: vec![
            phase(
                "Foundation Building",
                "1-2 months",
                &["Core fundamentals", "Industry basics", "Essential tools"],
                &["Introduction to field", "Basic certification course"],
                &["Beginner project", "Portfolio setup"],
                "Build strong fundamentals and understand the industry landscape",
            ),
            phase(
                "Skill Development",
                "2-3 months",
                &["Intermediate skills", "Specialized knowledge", "Technical proficiency"],
                &["Advanced course", "Specialization training"],
                &["Intermediate project", "Real-world application"],
                "Develop core competencies required for the target role",
            ),
            phase(
                "Advanced Learning",
                "2-3 months",
                &["Advanced concepts", "Leadership skills", "Industry trends"],
                &["Expert-level training", "Industry certification"],
                &["Complex project", "Open source contribution"],
                "Master advanced concepts and gain practical experience",
            ),
            phase(
                "Career Transition",
                "1 month",
                &["Interview preparation", "Networking", "Portfolio optimization"],
                &["Interview skills", "Personal branding"],
                &["Portfolio completion", "Case study presentation"],
                "Prepare for job applications and successful career transition",
            ),
        ],
    }
}
