//! Skill detection over a closed vocabulary.
//!
//! Each keyword is tested once as a case-sensitive substring of the whole
//! document, so output order is vocabulary order and duplicates cannot
//! occur. Substring matching can false-positive on partial-word overlaps
//! ("Go" inside "Google") — a known limitation, kept as-is.

const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "React",
    "Node.js",
    "Angular",
    "Vue.js",
    "TypeScript",
    "PHP",
    "Ruby",
    "Go",
    "Rust",
    "Swift",
    "Kotlin",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "GraphQL",
    "REST",
    "API",
    "Git",
    "GitHub",
    "CI/CD",
    "Agile",
    "Scrum",
    "JIRA",
    "Confluence",
    "Figma",
    "Adobe",
    "Photoshop",
];

pub fn extract_skills(text: &str) -> Vec<String> {
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| text.contains(**skill))
        .map(|skill| skill.to_string())
        .collect()
}
