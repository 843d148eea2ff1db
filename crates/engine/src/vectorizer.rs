//! TF-IDF text vectorization.
//!
//! The vectorizer is split into two sharply separated operations: fitting,
//! which learns a vocabulary and IDF weights from a corpus exactly once, and
//! projection, which maps arbitrary text into that frozen space. Scores are
//! only comparable while the vocabulary stays fixed, so a fitted vectorizer
//! exposes no way to refit.

use std::collections::{HashMap, HashSet};

use recommender_core::math::{l2_norm, SparseVector};

/// TF-IDF vectorizer over a frozen vocabulary.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// Term -> dimension index.
    vocabulary: HashMap<String, usize>,
    /// IDF weight per dimension index.
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Learn the vocabulary and IDF weights from a document corpus.
    ///
    /// The vocabulary is every distinct token encountered, with indices
    /// assigned in sorted term order so repeated fits over the same corpus
    /// produce the same space. IDF uses the smoothed formulation
    /// `ln((1 + n) / (1 + df)) + 1`, which keeps terms that appear in every
    /// document at a positive weight.
    pub fn fit_corpus<S: AsRef<str>>(documents: &[S]) -> Self {
        let n_docs = documents.len();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let unique: HashSet<String> = tokenize(doc.as_ref()).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<String> = doc_freq.keys().cloned().collect();
        terms.sort();

        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (index, term) in terms.into_iter().enumerate() {
            let df = doc_freq[&term] as f32;
            idf.push(((1.0 + n_docs as f32) / (1.0 + df)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Self { vocabulary, idf }
    }

    /// Number of distinct terms in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Project text into the fitted vocabulary space.
    ///
    /// Pure and reentrant: term counts are weighted by the frozen IDF values
    /// and the result is L2-normalized. Tokens outside the vocabulary are
    /// silently dropped, so text with no known terms projects to the zero
    /// vector.
    pub fn project_text(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector: SparseVector = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.idf[index]))
            .collect();
        vector.sort_by_key(|&(index, _)| index);

        let norm = l2_norm(&vector);
        if norm > 0.0 {
            for (_, weight) in &mut vector {
                *weight /= norm;
            }
        }

        vector
    }

    /// Transform a corpus into matrix rows using the fitted vocabulary.
    pub fn transform_corpus<S: AsRef<str>>(&self, documents: &[S]) -> Vec<SparseVector> {
        documents
            .iter()
            .map(|doc| self.project_text(doc.as_ref()))
            .collect()
    }
}

/// Tokenize text: lowercase, split on non-alphanumeric runs.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
}
