//! Static sentence embeddings via Model2Vec

use crate::config::ModelConfig;
use crate::error::{RelevanceError, Result};
use model2vec_rs::model::StaticModel;
use std::path::Path;

/// Owns the loaded embedding model. Inference is read-only, so a single
/// engine can be shared across concurrent analysis calls.
pub struct EmbeddingEngine {
    model: StaticModel,
    model_name: String,
}

impl EmbeddingEngine {
    pub fn load(model_path: &Path, model_name: &str) -> Result<Self> {
        log::info!(
            "Loading Model2Vec embedding model from: {}",
            model_path.display()
        );

        let model = StaticModel::from_pretrained(model_path, None, None, None).map_err(|e| {
            RelevanceError::ModelLoading(format!("Failed to load embedding model: {}", e))
        })?;

        Ok(Self {
            model,
            model_name: model_name.to_string(),
        })
    }

    /// Resolve the configured model: a folder under `models_dir` if present,
    /// otherwise the name is handed to model2vec as a HuggingFace repo ID.
    pub fn from_config(config: &ModelConfig) -> Result<Self> {
        let local_path = config.models_dir.join(&config.embedding_model);
        if local_path.exists() {
            Self::load(&local_path, &config.embedding_model)
        } else {
            Self::load(Path::new(&config.embedding_model), &config.embedding_model)
        }
    }

    pub fn encode_single(&self, text: &str) -> Vec<f32> {
        self.model.encode_single(text)
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Cosine similarity between two embeddings of equal dimension.
    pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
        if a.len() != b.len() {
            return Err(RelevanceError::Embedding(format!(
                "Embedding dimensions don't match: {} vs {}",
                a.len(),
                b.len()
            )));
        }

        if a.is_empty() {
            return Ok(0.0);
        }

        let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            Ok(0.0)
        } else {
            Ok(dot_product / (norm_a * norm_b))
        }
    }
}
