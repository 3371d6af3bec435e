use tracing::debug;

use crate::models::career::CareerRecord;
use crate::retrieval::vectorizer::TermVectorSpace;

/// Position of a career in the dataset and its similarity to a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch {
    pub index: usize,
    pub score: f64,
}

/// Top-k lexical retriever over the career dataset.
///
/// Owns the careers and the vector space fitted over their documents. Both are
/// fixed at construction; row `i` of the space always describes `careers[i]`.
#[derive(Debug, Clone)]
pub struct LexicalRetriever {
    careers: Vec<CareerRecord>,
    space: TermVectorSpace,
}

impl LexicalRetriever {
    pub fn new(careers: Vec<CareerRecord>) -> Self {
        let documents: Vec<String> = careers.iter().map(CareerRecord::document_text).collect();
        let space = TermVectorSpace::fit(&documents);
        debug!(
            "Fitted TF-IDF space: {} documents, {} terms",
            space.len(),
            space.vectorizer().vocabulary_size()
        );
        Self { careers, space }
    }

    pub fn careers(&self) -> &[CareerRecord] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    /// Ranks careers against `query` and keeps the best `top_k`.
    ///
    /// Ordered by descending score; equal scores keep ascending dataset order, so a
    /// query with no known terms yields the first `top_k` careers.
    pub fn retrieve_scored(&self, query: &str, top_k: usize) -> Vec<ScoredMatch> {
        let scores = self.space.similarities(query);

        let mut ranked: Vec<ScoredMatch> = scores
            .into_iter()
            .enumerate()
            .map(|(index, score)| ScoredMatch { index, score })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
        ranked.truncate(top_k);
        ranked
    }

    /// The `top_k` careers most similar to `query`, best first.
    pub fn retrieve(&self, query: &str, top_k: usize) -> Vec<CareerRecord> {
        self.retrieve_scored(query, top_k)
            .into_iter()
            .map(|m| self.careers[m.index].clone())
            .collect()
    }
}
