//! Summary rollups over a batch of analysis results

use crate::processing::analyzer::AnalysisResult;
use crate::processing::scorer::Verdict;
use serde::{Deserialize, Serialize};

/// Aggregate metrics over a batch of analyzed resumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total_resumes: usize,
    pub average_score: f32,
    pub high_suitability: usize,
    pub medium_suitability: usize,
    pub low_suitability: usize,
    pub high_percentage: f32,
    pub medium_percentage: f32,
    pub low_percentage: f32,
}

impl SummaryMetrics {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        if results.is_empty() {
            return Self {
                total_resumes: 0,
                average_score: 0.0,
                high_suitability: 0,
                medium_suitability: 0,
                low_suitability: 0,
                high_percentage: 0.0,
                medium_percentage: 0.0,
                low_percentage: 0.0,
            };
        }

        let total = results.len();
        let high = results.iter().filter(|r| r.verdict == Verdict::High).count();
        let medium = results
            .iter()
            .filter(|r| r.verdict == Verdict::Medium)
            .count();
        let low = results.iter().filter(|r| r.verdict == Verdict::Low).count();

        let average_score = results.iter().map(|r| r.final_score).sum::<f32>() / total as f32;
        let pct = |count: usize| (count as f32 / total as f32) * 100.0;

        Self {
            total_resumes: total,
            average_score,
            high_suitability: high,
            medium_suitability: medium,
            low_suitability: low,
            high_percentage: pct(high),
            medium_percentage: pct(medium),
            low_percentage: pct(low),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(final_score: f32, verdict: Verdict) -> AnalysisResult {
        AnalysisResult {
            final_score,
            hard_match_score: final_score,
            semantic_score: final_score,
            verdict,
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
            suggestions: String::new(),
        }
    }

    #[test]
    fn test_empty_batch() {
        let metrics = SummaryMetrics::from_results(&[]);

        assert_eq!(metrics.total_resumes, 0);
        assert_eq!(metrics.average_score, 0.0);
        assert_eq!(metrics.high_percentage, 0.0);
    }

    #[test]
    fn test_counts_and_percentages() {
        let results = vec![
            result(0.8, Verdict::High),
            result(0.5, Verdict::Medium),
            result(0.4, Verdict::Medium),
            result(0.1, Verdict::Low),
        ];

        let metrics = SummaryMetrics::from_results(&results);

        assert_eq!(metrics.total_resumes, 4);
        assert_eq!(metrics.high_suitability, 1);
        assert_eq!(metrics.medium_suitability, 2);
        assert_eq!(metrics.low_suitability, 1);
        assert!((metrics.average_score - 0.45).abs() < 1e-6);
        assert!((metrics.high_percentage - 25.0).abs() < 1e-4);
        assert!((metrics.medium_percentage - 50.0).abs() < 1e-4);
    }
}
