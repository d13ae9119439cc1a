//! Semantic similarity between resume and job description, with layered
//! fallbacks: embeddings, then lexical TF-IDF, then a constant floor

use crate::config::{Config, ModelConfig};
use crate::error::{RelevanceError, Result};
use crate::processing::embeddings::EmbeddingEngine;
use crate::processing::text_processor::TextNormalizer;
use crate::processing::tfidf::TfidfVectorizer;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Raw cosine similarities from this model family cluster low; the boosted
/// value is what feeds the combined score.
pub const EMBEDDING_BOOST: f32 = 1.2;

/// TF-IDF similarities run lower still, so the lexical path boosts harder.
pub const TFIDF_BOOST: f32 = 1.5;

/// Returned when even the lexical path has nothing to work with, so a total
/// absence of overlap does not zero out the final score.
pub const FALLBACK_SCORE: f32 = 0.2;

/// Which tier produced a semantic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SemanticStrategy {
    Embedding,
    Lexical,
    Constant,
}

#[derive(Debug, Clone, Copy)]
pub struct SemanticScore {
    pub score: f32,
    pub strategy: SemanticStrategy,
}

/// Computes document similarity, owning the lazily loaded embedding model.
///
/// The model is loaded at most once; a load failure is logged and forces the
/// lexical path for the lifetime of the matcher. After initialization the
/// model is only read, so one matcher can serve concurrent callers.
pub struct SemanticMatcher {
    engine: OnceLock<Option<EmbeddingEngine>>,
    normalizer: TextNormalizer,
    tfidf: TfidfVectorizer,
    models: ModelConfig,
    max_text_length: usize,
}

impl SemanticMatcher {
    pub fn new(config: &Config) -> Self {
        Self {
            engine: OnceLock::new(),
            normalizer: TextNormalizer::new(),
            tfidf: TfidfVectorizer::new(config.processing.tfidf_max_features),
            models: config.models.clone(),
            max_text_length: config.processing.max_text_length,
        }
    }

    /// Build a matcher that never attempts to load the embedding model and
    /// always uses the deterministic lexical path.
    pub fn without_embedding_model(config: &Config) -> Self {
        let matcher = Self::new(config);
        let _ = matcher.engine.set(None);
        matcher
    }

    /// Score similarity in [0, 1]. Never fails: every internal error
    /// degrades to the next fallback tier.
    pub fn score(&self, resume_text: &str, jd_text: &str) -> SemanticScore {
        if let Some(engine) = self.engine() {
            match self.embedding_score(engine, resume_text, jd_text) {
                Ok(score) => {
                    return SemanticScore {
                        score,
                        strategy: SemanticStrategy::Embedding,
                    }
                }
                Err(e) => {
                    log::warn!("Embedding similarity failed, falling back to TF-IDF: {}", e);
                }
            }
        }

        match self.lexical_score(resume_text, jd_text) {
            Ok(score) => SemanticScore {
                score,
                strategy: SemanticStrategy::Lexical,
            },
            Err(e) => {
                log::warn!("TF-IDF similarity failed, using constant floor: {}", e);
                SemanticScore {
                    score: FALLBACK_SCORE,
                    strategy: SemanticStrategy::Constant,
                }
            }
        }
    }

    fn engine(&self) -> Option<&EmbeddingEngine> {
        self.engine
            .get_or_init(|| match EmbeddingEngine::from_config(&self.models) {
                Ok(engine) => Some(engine),
                Err(e) => {
                    log::warn!(
                        "Embedding model unavailable, lexical fallback will be used: {}",
                        e
                    );
                    None
                }
            })
            .as_ref()
    }

    fn embedding_score(
        &self,
        engine: &EmbeddingEngine,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<f32> {
        let resume_text = Self::truncate_chars(resume_text, self.max_text_length);
        let jd_text = Self::truncate_chars(jd_text, self.max_text_length);

        let resume_embedding = engine.encode_single(resume_text);
        let jd_embedding = engine.encode_single(jd_text);

        if resume_embedding.is_empty() || jd_embedding.is_empty() {
            return Err(RelevanceError::Embedding(
                "Encoder produced an empty vector".to_string(),
            ));
        }

        let similarity = EmbeddingEngine::cosine_similarity(&resume_embedding, &jd_embedding)?;
        Ok((similarity * EMBEDDING_BOOST).clamp(0.0, 1.0))
    }

    fn lexical_score(&self, resume_text: &str, jd_text: &str) -> Result<f32> {
        let resume_text = self.normalizer.normalize(&resume_text.to_lowercase());
        let jd_text = self.normalizer.normalize(&jd_text.to_lowercase());

        let similarity = self.tfidf.similarity(&resume_text, &jd_text)?;
        Ok((similarity * TFIDF_BOOST).clamp(0.0, 1.0))
    }

    /// Char-boundary-safe truncation to respect model input limits.
    fn truncate_chars(text: &str, max_chars: usize) -> &str {
        match text.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => &text[..byte_idx],
            None => text,
        }
    }
}
