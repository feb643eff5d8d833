//! Trending skills per industry.

/// Industry key → trending skills. First key contained in the industry wins.
const TRENDING_SKILLS: &[(&str, &[&str])] = &[
    (
        "technology",
        &["AI/ML", "Cloud Computing", "Cybersecurity", "DevOps", "Data Science", "Blockchain"],
    ),
    (
        "marketing",
        &[
            "Digital Marketing",
            "SEO/SEM",
            "Social Media",
            "Analytics",
            "Content Strategy",
            "Marketing Automation",
        ],
    ),
    (
        "finance",
        &[
            "Financial Modeling",
            "Risk Management",
            "Blockchain",
            "Fintech",
            "Data Analysis",
            "Compliance",
        ],
    ),
    (
        "healthcare",
        &[
            "Telemedicine",
            "Health Informatics",
            "Data Analysis",
            "Regulatory Compliance",
            "Patient Care",
            "Medical Technology",
        ],
    ),
    (
        "design",
        &[
            "UX/UI Design",
            "Design Systems",
            "Prototyping",
            "User Research",
            "Accessibility",
            "Design Thinking",
        ],
    ),
];

const GENERAL_TRENDING_SKILLS: &[&str] = &[
    "Digital Literacy",
    "Data Analysis",
    "Communication",
    "Problem Solving",
    "Adaptability",
    "Remote Collaboration",
];

/// Returns trending skills for an industry, or the general list when nothing matches.
pub fn trending_skills(industry: &str) -> Vec<String> {
    let normalized = industry.trim().to_lowercase();
    let skills = TRENDING_SKILLS
        .iter()
        .find(|(key, _)| normalized.contains(*key))
        .map(|(_, skills)| *skills)
        .unwrap_or(GENERAL_TRENDING_SKILLS);

    skills.iter().map(|s| s.to_string()).collect()
}
