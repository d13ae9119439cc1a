//! Relevance analyzer: the public entry point sequencing the pipeline

use crate::config::Config;
use crate::error::Result;
use crate::processing::hard_matcher::HardMatcher;
use crate::processing::scorer::{normalize_weights, round3, ScoreCombiner, Verdict};
use crate::processing::semantic_matcher::{SemanticMatcher, SemanticStrategy};
use crate::processing::suggestions::generate_suggestions;
use crate::processing::text_processor::TextNormalizer;
use serde::{Deserialize, Serialize};

/// The one externally visible artifact of an analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub final_score: f32,
    pub hard_match_score: f32,
    pub semantic_score: f32,
    pub verdict: Verdict,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: String,
}

/// Scores a resume against a job description.
///
/// All components are constructed once and reused; the embedding model
/// inside the semantic matcher loads lazily on first use. Analysis calls
/// take `&self` and share no mutable state, so one analyzer can serve
/// concurrent callers.
pub struct RelevanceAnalyzer {
    normalizer: TextNormalizer,
    hard_matcher: HardMatcher,
    semantic_matcher: SemanticMatcher,
    combiner: ScoreCombiner,
    config: Config,
}

impl RelevanceAnalyzer {
    pub fn new(config: Config) -> Result<Self> {
        let semantic_matcher = SemanticMatcher::new(&config);
        Self::with_semantic_matcher(config, semantic_matcher)
    }

    /// Construct with an explicit semantic matcher. Lets callers share one
    /// loaded model across analyzers or pin the lexical path.
    pub fn with_semantic_matcher(
        config: Config,
        semantic_matcher: SemanticMatcher,
    ) -> Result<Self> {
        Ok(Self {
            normalizer: TextNormalizer::new(),
            hard_matcher: HardMatcher::new()?,
            semantic_matcher,
            combiner: ScoreCombiner::new(config.scoring.verdict_thresholds),
            config,
        })
    }

    /// Analyze using the configured weights.
    pub fn analyze(&self, resume_text: &str, jd_text: &str) -> Result<AnalysisResult> {
        self.analyze_weighted(
            resume_text,
            jd_text,
            self.config.scoring.hard_weight,
            self.config.scoring.semantic_weight,
        )
    }

    /// Analyze with caller-supplied weights. The weights are normalized to
    /// sum to 1 before combining; a non-positive sum passes through as-is.
    pub fn analyze_weighted(
        &self,
        resume_text: &str,
        jd_text: &str,
        hard_weight: f32,
        semantic_weight: f32,
    ) -> Result<AnalysisResult> {
        let resume_text = self.normalizer.normalize(resume_text);
        let jd_text = self.normalizer.normalize(jd_text);

        if resume_text.is_empty() || jd_text.is_empty() {
            log::warn!("Empty input after normalization, returning zero-score result");
            return Ok(Self::empty_input_result());
        }

        let hard = self.hard_matcher.match_skills(&resume_text, &jd_text);
        let semantic = self.semantic_matcher.score(&resume_text, &jd_text);
        log::debug!(
            "Hard score {:.3}, semantic score {:.3} via {:?}",
            hard.score,
            semantic.score,
            semantic.strategy
        );

        let (hard_weight, semantic_weight) = normalize_weights(hard_weight, semantic_weight);
        let (final_score, verdict) =
            self.combiner
                .combine(hard.score, semantic.score, hard_weight, semantic_weight);

        let suggestions = generate_suggestions(&hard.missing, verdict);

        Ok(AnalysisResult {
            final_score,
            hard_match_score: round3(hard.score),
            semantic_score: round3(semantic.score),
            verdict,
            matched_skills: hard.matched,
            missing_skills: hard.missing,
            suggestions,
        })
    }

    /// Which strategy the semantic matcher would use right now. Exposed for
    /// observability; forces model initialization on first call.
    pub fn semantic_strategy(&self) -> SemanticStrategy {
        self.semantic_matcher.score("probe text", "probe text").strategy
    }

    fn empty_input_result() -> AnalysisResult {
        AnalysisResult {
            final_score: 0.0,
            hard_match_score: 0.0,
            semantic_score: 0.0,
            verdict: Verdict::Low,
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
            suggestions: "Insufficient text to analyze. Provide both resume and job description content.".to_string(),
        }
    }
}
