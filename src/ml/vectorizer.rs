//! TF-IDF vectorizer for text feature extraction.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::analysis::tokenize;
use crate::error::{DrachmaError, Result};

/// Configuration for vocabulary construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Minimum number of documents a term must appear in.
    pub min_df: usize,
    /// Maximum fraction of documents a term may appear in.
    pub max_df_ratio: f64,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        VectorizerConfig {
            min_df: 1,
            max_df_ratio: 1.0,
        }
    }
}

/// TF-IDF vectorizer for text feature extraction.
///
/// The vocabulary and inverse document frequencies are learned once by
/// [`fit`](TfIdfVectorizer::fit) from training text only; afterwards the
/// vectorizer is transform-only. Terms outside the fitted vocabulary
/// contribute nothing to transformed vectors.
#[derive(Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> dimension index mapping.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per dimension.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Vocabulary construction settings.
    config: VectorizerConfig,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .finish()
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new(VectorizerConfig::default())
    }
}

impl TfIdfVectorizer {
    /// Create a new, unfitted TF-IDF vectorizer.
    pub fn new(config: VectorizerConfig) -> Self {
        TfIdfVectorizer {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            config,
        }
    }

    /// Fit the vectorizer on normalized training documents.
    ///
    /// Learns the vocabulary (in first-encountered order, subject to the
    /// document-frequency bounds in [`VectorizerConfig`]) and a smoothed
    /// IDF weight `ln((N + 1) / (df + 1)) + 1` per term.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        if documents.is_empty() {
            return Err(DrachmaError::analysis("cannot fit on an empty corpus"));
        }

        self.n_documents = documents.len();

        // Count document frequencies
        let mut document_frequency: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            let unique_tokens: HashSet<String> = tokenize(doc).into_iter().collect();
            for token in unique_tokens {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        let max_df =
            ((self.n_documents as f64) * self.config.max_df_ratio).ceil() as usize;

        // Assign dimensions in first-encountered order, skipping terms
        // outside the document-frequency bounds
        let mut vocabulary = HashMap::new();
        for doc in documents {
            for token in tokenize(doc) {
                if vocabulary.contains_key(&token) {
                    continue;
                }
                let df = document_frequency[&token];
                if df < self.config.min_df || df > max_df {
                    continue;
                }
                let idx = vocabulary.len();
                vocabulary.insert(token, idx);
            }
        }

        // Calculate IDF for each term
        let mut idf = vec![0.0; vocabulary.len()];
        for (term, &idx) in &vocabulary {
            let df = document_frequency[term];
            // IDF = log((N + 1) / (df + 1)) + 1
            idf[idx] = ((self.n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
        }

        self.vocabulary = vocabulary;
        self.idf = idf;

        Ok(())
    }

    /// Transform a normalized document into a TF-IDF feature vector.
    ///
    /// The vector has vocabulary dimension; terms outside the fitted
    /// vocabulary contribute zero. Transforming never mutates the fitted
    /// state.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let tokens = tokenize(document);
        let mut tf = vec![0.0; self.vocabulary.len()];

        // Count term frequencies
        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                tf[idx] += 1.0;
            }
        }

        // Normalize by document length
        let doc_length = tokens.len() as f64;
        if doc_length > 0.0 {
            for count in &mut tf {
                *count /= doc_length;
            }
        }

        // Apply IDF
        for (idx, count) in tf.iter_mut().enumerate() {
            *count *= self.idf[idx];
        }

        tf
    }

    /// Transform a batch of normalized documents.
    pub fn transform_batch(&self, documents: &[String]) -> Vec<Vec<f64>> {
        documents.iter().map(|doc| self.transform(doc)).collect()
    }

    /// Get the size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether the vectorizer has been fitted.
    pub fn is_fitted(&self) -> bool {
        self.n_documents > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        vec![
            "bought milk for".to_string(),
            "paid shop rent".to_string(),
            "sold vegetables".to_string(),
            "bought rice".to_string(),
        ]
    }

    #[test]
    fn test_fit_builds_vocabulary() {
        let mut vectorizer = TfIdfVectorizer::default();
        vectorizer.fit(&corpus()).unwrap();

        // 9 distinct terms across the corpus
        assert_eq!(vectorizer.vocabulary_size(), 9);
        assert!(vectorizer.is_fitted());
    }

    #[test]
    fn test_transform_dimension_matches_vocabulary() {
        let mut vectorizer = TfIdfVectorizer::default();
        vectorizer.fit(&corpus()).unwrap();

        let features = vectorizer.transform("bought milk");
        assert_eq!(features.len(), vectorizer.vocabulary_size());
        assert!(features.iter().any(|&v| v > 0.0));
    }

    #[test]
    fn test_transform_ignores_unknown_terms() {
        let mut vectorizer = TfIdfVectorizer::default();
        vectorizer.fit(&corpus()).unwrap();

        // Entirely out-of-vocabulary text maps to the zero vector
        let features = vectorizer.transform("unknown words only");
        assert!(features.iter().all(|&v| v == 0.0));

        // Known terms still contribute when mixed with unknown ones
        let features = vectorizer.transform("unknown milk");
        assert!(features.iter().any(|&v| v > 0.0));
    }

    #[test]
    fn test_transform_does_not_mutate_state() {
        let mut vectorizer = TfIdfVectorizer::default();
        vectorizer.fit(&corpus()).unwrap();
        let size_before = vectorizer.vocabulary_size();

        vectorizer.transform("completely new vocabulary here");
        assert_eq!(vectorizer.vocabulary_size(), size_before);
    }

    #[test]
    fn test_min_df_prunes_rare_terms() {
        let mut vectorizer = TfIdfVectorizer::new(VectorizerConfig {
            min_df: 2,
            max_df_ratio: 1.0,
        });
        vectorizer.fit(&corpus()).unwrap();

        // Only "bought" appears in two documents
        assert_eq!(vectorizer.vocabulary_size(), 1);
        let features = vectorizer.transform("bought milk");
        assert!(features[0] > 0.0);
    }

    #[test]
    fn test_fit_empty_corpus_fails() {
        let mut vectorizer = TfIdfVectorizer::default();
        assert!(vectorizer.fit(&[]).is_err());
    }
}
