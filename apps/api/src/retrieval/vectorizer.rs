//! TF-IDF vectorizer and the fitted term vector space.
//!
//! Weighting:
//! - term frequency = raw count of the term in the text
//! - idf(t) = ln((1 + n) / (1 + df(t))) + 1   (smoothed, never zero)
//! - every vector is L2-normalized, so cosine similarity reduces to a dot product
//!
//! Vocabulary dimensions are assigned in lexicographic term order.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::retrieval::tokenizer::tokenize;

// ────────────────────────────────────────────────────────────────────────────
// Sparse vectors
// ────────────────────────────────────────────────────────────────────────────

/// Sparse vector with entries sorted by dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    fn from_counts(counts: HashMap<usize, f64>) -> Self {
        let mut entries: Vec<(usize, f64)> = counts.into_iter().collect();
        entries.sort_unstable_by_key(|&(dim, _)| dim);
        Self { entries }
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|&(_, w)| w == 0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Scales to unit length. A zero vector is left untouched.
    fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_dim, a_w) = self.entries[i];
            let (b_dim, b_w) = other.entries[j];
            match a_dim.cmp(&b_dim) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Cosine of the angle between two vectors; 0.0 when either is zero.
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            0.0
        } else {
            self.dot(other) / denom
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Vectorizer
// ────────────────────────────────────────────────────────────────────────────

/// Fitted vocabulary and idf weights.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learns the vocabulary and document frequencies of `documents`.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(dim, term)| (term.to_string(), dim))
            .collect();

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tokens in &tokenized {
            let unique: BTreeSet<usize> = tokens.iter().map(|t| vocabulary[t]).collect();
            for dim in unique {
                document_frequency[dim] += 1;
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .into_iter()
            .map(|df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    #[cfg(test)]
    pub fn dimension_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    #[cfg(test)]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.dimension_of(term).map(|dim| self.idf[dim])
    }

    /// Projects `text` into the fitted space. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&dim) = self.vocabulary.get(&token) {
                *counts.entry(dim).or_insert(0.0) += 1.0;
            }
        }
        for (dim, weight) in counts.iter_mut() {
            *weight *= self.idf[*dim];
        }

        let mut vector = SparseVector::from_counts(counts);
        vector.l2_normalize();
        vector
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Term vector space
// ────────────────────────────────────────────────────────────────────────────

/// The vectorizer together with the document-term matrix it produced.
/// Row `i` belongs to document `i` of the corpus it was fitted on.
#[derive(Debug, Clone)]
pub struct TermVectorSpace {
    vectorizer: TfidfVectorizer,
    rows: Vec<SparseVector>,
}

impl TermVectorSpace {
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let vectorizer = TfidfVectorizer::fit(documents);
        let rows = documents
            .iter()
            .map(|d| vectorizer.transform(d.as_ref()))
            .collect();
        Self { vectorizer, rows }
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Cosine similarity of `query` against every document, in corpus order.
    pub fn similarities(&self, query: &str) -> Vec<f64> {
        let query_vector = self.vectorizer.transform(query);
        if query_vector.is_zero() {
            debug!("Query shares no terms with the vocabulary; all scores are zero");
        }
        self.rows
            .iter()
            .map(|row| query_vector.cosine(row))
            .collect()
    }
}
