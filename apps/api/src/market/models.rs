use serde::{Deserialize, Serialize};

/// Labor-market statistics for a job title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsights {
    /// e.g. "$85,000 - $150,000"
    pub average_salary: String,
    /// e.g. "+22% (Much faster than average)"
    pub job_growth: String,
    pub top_companies: Vec<String>,
    pub in_demand_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingSkillsResponse {
    pub industry: String,
    pub trending_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub requirements: Vec<String>,
    pub posted_date: String,
}
