//! Weighted score combination and verdict mapping

use crate::config::VerdictThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse suitability tier derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    High,
    Medium,
    Low,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::High => write!(f, "High"),
            Verdict::Medium => write!(f, "Medium"),
            Verdict::Low => write!(f, "Low"),
        }
    }
}

/// Normalize a weight pair to sum to 1. A non-positive sum is a caller
/// configuration error; the weights then pass through unmodified rather
/// than dividing by it.
pub fn normalize_weights(hard_weight: f32, semantic_weight: f32) -> (f32, f32) {
    let sum = hard_weight + semantic_weight;
    if sum > 0.0 {
        (hard_weight / sum, semantic_weight / sum)
    } else {
        log::warn!(
            "Non-positive weight sum {}, using weights unnormalized",
            sum
        );
        (hard_weight, semantic_weight)
    }
}

pub(crate) fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

/// Combines component scores into a final score and verdict.
pub struct ScoreCombiner {
    thresholds: VerdictThresholds,
}

impl ScoreCombiner {
    pub fn new(thresholds: VerdictThresholds) -> Self {
        Self { thresholds }
    }

    /// Weighted sum of the two component scores. The verdict is taken from
    /// the unrounded sum; the returned score is rounded to 3 decimals.
    pub fn combine(
        &self,
        hard_score: f32,
        semantic_score: f32,
        hard_weight: f32,
        semantic_weight: f32,
    ) -> (f32, Verdict) {
        let raw = hard_weight * hard_score + semantic_weight * semantic_score;
        (round3(raw), self.verdict(raw))
    }

    pub fn verdict(&self, score: f32) -> Verdict {
        if score >= self.thresholds.high {
            Verdict::High
        } else if score >= self.thresholds.medium {
            Verdict::Medium
        } else {
            Verdict::Low
        }
    }
}

impl Default for ScoreCombiner {
    fn default() -> Self {
        Self::new(VerdictThresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_boundaries() {
        let combiner = ScoreCombiner::default();

        assert_eq!(combiner.verdict(0.6), Verdict::High);
        assert_eq!(combiner.verdict(0.599999), Verdict::Medium);
        assert_eq!(combiner.verdict(0.35), Verdict::Medium);
        assert_eq!(combiner.verdict(0.349999), Verdict::Low);
        assert_eq!(combiner.verdict(0.0), Verdict::Low);
        assert_eq!(combiner.verdict(1.0), Verdict::High);
    }

    #[test]
    fn test_combine_weighted_sum() {
        let combiner = ScoreCombiner::default();

        let (score, verdict) = combiner.combine(0.75, 0.5, 0.6, 0.4);
        assert!((score - 0.65).abs() < 1e-4);
        assert_eq!(verdict, Verdict::High);
    }

    #[test]
    fn test_rounding_to_three_decimals() {
        let combiner = ScoreCombiner::default();

        let (score, _) = combiner.combine(0.3333333, 0.3333333, 0.5, 0.5);
        assert_eq!(score, 0.333);
    }

    #[test]
    fn test_verdict_from_unrounded_score() {
        let combiner = ScoreCombiner::default();

        // 0.5999 rounds to 0.6 for display but stays Medium
        let (score, verdict) = combiner.combine(0.5999, 0.5999, 0.5, 0.5);
        assert_eq!(score, 0.6);
        assert_eq!(verdict, Verdict::Medium);
    }

    #[test]
    fn test_normalize_weights() {
        let (hard, semantic) = normalize_weights(3.0, 1.0);
        assert!((hard - 0.75).abs() < 1e-6);
        assert!((semantic - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_zero_weight_sum_passes_through() {
        assert_eq!(normalize_weights(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_negative_weight_sum_passes_through() {
        assert_eq!(normalize_weights(-1.0, 0.5), (-1.0, 0.5));
    }

    #[test]
    fn test_custom_thresholds() {
        let combiner = ScoreCombiner::new(VerdictThresholds {
            high: 0.8,
            medium: 0.5,
        });

        assert_eq!(combiner.verdict(0.7), Verdict::Medium);
        assert_eq!(combiner.verdict(0.85), Verdict::High);
        assert_eq!(combiner.verdict(0.4), Verdict::Low);
    }

    #[test]
    fn test_verdict_serializes_as_plain_string() {
        let json = serde_json::to_string(&Verdict::High).unwrap();
        assert_eq!(json, "\"High\"");
    }
}
