//! Lexical TF-IDF document similarity, the fallback when embeddings are
//! unavailable

use crate::error::{RelevanceError, Result};
use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;

pub const DEFAULT_MAX_FEATURES: usize = 1000;

/// Terms present in more than this share of documents are pruned. The count
/// bound is rounded up, so with only two documents nothing is pruned and the
/// bound bites only on larger corpora.
const MAX_DOC_FREQ: f32 = 0.95;
const MIN_DOC_FREQ: usize = 1;

/// Two-document TF-IDF vectorizer over unigrams and bigrams with stop-word
/// removal and document-frequency bounds.
pub struct TfidfVectorizer {
    max_features: usize,
    stop_words: HashSet<&'static str>,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FEATURES)
    }
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features: max_features.max(1),
            stop_words: Self::english_stop_words(),
        }
    }

    /// Cosine similarity between the TF-IDF vectors of the two texts.
    ///
    /// Fails only when no vocabulary survives filtering (both texts empty or
    /// all stop words); callers treat that as the signal to use the constant
    /// floor score.
    pub fn similarity(&self, text1: &str, text2: &str) -> Result<f32> {
        let docs = [self.terms(text1), self.terms(text2)];
        let n_docs = docs.len();

        // Document frequency per term
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for doc in &docs {
            let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let max_df_count = (MAX_DOC_FREQ * n_docs as f32).ceil() as usize;
        let mut total_counts: HashMap<&str, usize> = HashMap::new();
        for doc in &docs {
            for term in doc {
                *total_counts.entry(term).or_insert(0) += 1;
            }
        }

        let mut vocabulary: Vec<&str> = doc_freq
            .iter()
            .filter(|(_, &df)| df >= MIN_DOC_FREQ && df <= max_df_count)
            .map(|(&term, _)| term)
            .collect();

        if vocabulary.is_empty() {
            return Err(RelevanceError::TextProcessing(
                "Empty vocabulary after filtering".to_string(),
            ));
        }

        // Keep the most frequent terms when over the feature cap, ties
        // resolved alphabetically for determinism
        if vocabulary.len() > self.max_features {
            vocabulary.sort_by(|a, b| {
                total_counts[b]
                    .cmp(&total_counts[a])
                    .then_with(|| a.cmp(b))
            });
            vocabulary.truncate(self.max_features);
        }

        let vectors: Vec<Vec<f32>> = docs
            .iter()
            .map(|doc| {
                let mut counts: HashMap<&str, usize> = HashMap::new();
                for term in doc {
                    *counts.entry(term).or_insert(0) += 1;
                }
                vocabulary
                    .iter()
                    .map(|term| {
                        let tf = counts.get(term).copied().unwrap_or(0) as f32;
                        tf * Self::idf(doc_freq[term], n_docs)
                    })
                    .collect()
            })
            .collect();

        Ok(Self::cosine(&vectors[0], &vectors[1]))
    }

    /// Smoothed inverse document frequency: ln((1 + n) / (1 + df)) + 1.
    fn idf(df: usize, n_docs: usize) -> f32 {
        ((1.0 + n_docs as f32) / (1.0 + df as f32)).ln() + 1.0
    }

    fn cosine(a: &[f32], b: &[f32]) -> f32 {
        let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            0.0
        } else {
            dot / (norm_a * norm_b)
        }
    }

    /// Unigrams and bigrams from the word tokens of `text`, stop words and
    /// single-character tokens removed.
    fn terms(&self, text: &str) -> Vec<String> {
        let tokens: Vec<String> = text
            .unicode_words()
            .map(|w| w.to_lowercase())
            .filter(|w| w.len() > 1 && !self.stop_words.contains(w.as_str()))
            .collect();

        let mut terms = tokens.clone();
        for pair in tokens.windows(2) {
            terms.push(format!("{} {}", pair[0], pair[1]));
        }
        terms
    }

    fn english_stop_words() -> HashSet<&'static str> {
        [
            "a", "about", "above", "after", "again", "all", "am", "an", "and", "any", "are",
            "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
            "but", "by", "can", "did", "do", "does", "doing", "down", "during", "each", "few",
            "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
            "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "just",
            "me", "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on", "once",
            "only", "or", "other", "our", "out", "over", "own", "same", "she", "should", "so",
            "some", "such", "than", "that", "the", "their", "them", "then", "there", "these",
            "they", "this", "those", "through", "to", "too", "under", "until", "up", "very",
            "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
            "why", "will", "with", "you", "your", "yours",
        ]
        .into_iter()
        .collect()
    }
}
