//! Mock job postings. Stands in for a job-board scraper; no network access.

use crate::market::models::JobPosting;

pub const DEFAULT_LOCATION: &str = "Remote";

/// Returns sample postings for a job title at a location.
pub fn mock_job_postings(job_title: &str, location: &str) -> Vec<JobPosting> {
    let requirements = |items: [&str; 3]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    vec![
        JobPosting {
            title: format!("Senior {job_title}"),
            company: "TechCorp Inc.".to_string(),
            location: location.to_string(),
            salary: "$90,000 - $130,000".to_string(),
            requirements: requirements([
                "5+ years experience",
                "Bachelor's degree",
                "Strong communication skills",
            ]),
            posted_date: "2 days ago".to_string(),
        },
        JobPosting {
            title: job_title.to_string(),
            company: "Innovation Labs".to_string(),
            location: location.to_string(),
            salary: "$75,000 - $110,000".to_string(),
            requirements: requirements([
                "3+ years experience",
                "Relevant certifications",
                "Team player",
            ]),
            posted_date: "1 week ago".to_string(),
        },
    ]
}
