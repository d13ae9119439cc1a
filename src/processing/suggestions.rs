//! Improvement suggestions derived from missing skills and the verdict

use crate::processing::scorer::Verdict;

/// Substrings marking a missing skill as technical.
const TECH_INDICATORS: [&str; 10] = [
    "python",
    "java",
    "javascript",
    "react",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "cloud",
    "linux",
];

/// Substrings marking a missing skill as a soft skill.
const SOFT_INDICATORS: [&str; 3] = ["communication", "leadership", "management"];

const MAX_TECH_SUGGESTIONS: usize = 5;
const MAX_SOFT_SUGGESTIONS: usize = 3;

/// Build a multi-line guidance message. Deterministic for identical inputs.
pub fn generate_suggestions(missing_skills: &[String], verdict: Verdict) -> String {
    if missing_skills.is_empty() {
        return "Great match! No major gaps identified.".to_string();
    }

    let mut lines = Vec::new();

    if verdict == Verdict::Low {
        lines.push("Consider gaining experience in the following key areas:".to_string());
    } else {
        lines.push("To strengthen your profile, consider developing skills in:".to_string());
    }

    let tech_skills: Vec<&str> = missing_skills
        .iter()
        .filter(|skill| {
            let lowered = skill.to_lowercase();
            TECH_INDICATORS.iter().any(|t| lowered.contains(t))
        })
        .map(String::as_str)
        .take(MAX_TECH_SUGGESTIONS)
        .collect();

    let soft_skills: Vec<&str> = missing_skills
        .iter()
        .filter(|skill| {
            let lowered = skill.to_lowercase();
            SOFT_INDICATORS.iter().any(|s| lowered.contains(s))
        })
        .map(String::as_str)
        .take(MAX_SOFT_SUGGESTIONS)
        .collect();

    if !tech_skills.is_empty() {
        lines.push(format!("• Technical skills: {}", tech_skills.join(", ")));
    }

    if !soft_skills.is_empty() {
        lines.push(format!("• Soft skills: {}", soft_skills.join(", ")));
    }

    match verdict {
        Verdict::Low => {
            lines.push("• Consider taking relevant courses or certifications".to_string());
            lines.push("• Build projects that demonstrate these skills".to_string());
        }
        Verdict::Medium => {
            lines.push("• Highlight relevant experience more prominently".to_string());
            lines.push("• Consider adding specific examples or metrics".to_string());
        }
        Verdict::High => {}
    }

    lines.join("\n")
}
