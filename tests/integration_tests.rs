//! End-to-end tests for the relevance scoring engine

use resume_relevance::processing::semantic_matcher::{SemanticMatcher, SemanticStrategy};
use resume_relevance::{Config, RelevanceAnalyzer, Verdict};

const RESUME: &str = "Experienced Python developer skilled in Docker and AWS. \
                      Built CI pipelines with Jenkins and deployed services to Kubernetes-adjacent \
                      platforms. Strong communication and documentation habits.";

const JOB: &str = "Looking for Python, Docker, Kubernetes, AWS experience. \
                   Familiarity with Terraform is a plus.";

/// Analyzer pinned to the lexical semantic path so tests never try to load
/// (or download) an embedding model.
fn analyzer() -> RelevanceAnalyzer {
    let config = Config::default();
    let semantic = SemanticMatcher::without_embedding_model(&config);
    RelevanceAnalyzer::with_semantic_matcher(config, semantic).unwrap()
}

#[test]
fn test_full_pipeline_produces_bounded_scores() {
    let result = analyzer().analyze(RESUME, JOB).unwrap();

    assert!(result.final_score >= 0.0 && result.final_score <= 1.0);
    assert!(result.hard_match_score >= 0.0 && result.hard_match_score <= 1.0);
    assert!(result.semantic_score >= 0.0 && result.semantic_score <= 1.0);
}

#[test]
fn test_matched_and_missing_skills() {
    let result = analyzer().analyze(RESUME, JOB).unwrap();

    assert!(result.matched_skills.contains(&"python".to_string()));
    assert!(result.matched_skills.contains(&"docker".to_string()));
    assert!(result.matched_skills.contains(&"aws".to_string()));
    assert!(result.matched_skills.len() <= 10);
    assert!(result.missing_skills.len() <= 10);
}

#[test]
fn test_weight_scaling_is_equivalent() {
    let analyzer = analyzer();

    let scaled = analyzer.analyze_weighted(RESUME, JOB, 3.0, 1.0).unwrap();
    let normalized = analyzer.analyze_weighted(RESUME, JOB, 0.75, 0.25).unwrap();

    assert_eq!(scaled.final_score, normalized.final_score);
    assert_eq!(scaled.verdict, normalized.verdict);
    assert_eq!(scaled.missing_skills, normalized.missing_skills);
}

#[test]
fn test_repeated_analysis_is_deterministic() {
    let analyzer = analyzer();

    let first = analyzer.analyze(RESUME, JOB).unwrap();
    let second = analyzer.analyze(RESUME, JOB).unwrap();

    assert_eq!(first.final_score, second.final_score);
    assert_eq!(first.verdict, second.verdict);
    assert_eq!(first.matched_skills, second.matched_skills);
    assert_eq!(first.missing_skills, second.missing_skills);
    assert_eq!(first.suggestions, second.suggestions);
}

#[test]
fn test_empty_resume_never_errors() {
    let result = analyzer().analyze("", JOB).unwrap();

    assert_eq!(result.final_score, 0.0);
    assert_eq!(result.verdict, Verdict::Low);
}

#[test]
fn test_identical_documents_verdict_high() {
    let result = analyzer().analyze(RESUME, RESUME).unwrap();

    assert_eq!(result.verdict, Verdict::High);
    assert!(result.hard_match_score >= 0.999);
    assert!(result.semantic_score >= 0.999);
}

#[test]
fn test_unrelated_documents_verdict_low() {
    let result = analyzer()
        .analyze(
            "Watercolor painter and gallery curator",
            "Senior Python engineer for Kubernetes platform work",
        )
        .unwrap();

    assert_eq!(result.verdict, Verdict::Low);
}

#[test]
fn test_lexical_strategy_reported_when_model_absent() {
    let config = Config::default();
    let matcher = SemanticMatcher::without_embedding_model(&config);

    let score = matcher.score(RESUME, JOB);
    assert_eq!(score.strategy, SemanticStrategy::Lexical);
    assert!(score.score >= 0.0 && score.score <= 1.0);
}

#[test]
fn test_json_contract() {
    let result = analyzer().analyze(RESUME, JOB).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value["final_score"].is_number());
    assert!(value["verdict"].is_string());
    assert!(value["matched_skills"].is_array());
    assert!(value["suggestions"].is_string());
}
