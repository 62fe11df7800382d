//! TF-IDF vector-space similarity over a two-document corpus

use crate::processing::similarity::SimilarityBackend;
use crate::processing::text_processor::content_terms;
use indexmap::IndexMap;

/// Unigram + bigram TF-IDF with smoothed IDF and no document-frequency floor.
#[derive(Debug, Default, Clone, Copy)]
pub struct TfIdfBackend;

impl SimilarityBackend for TfIdfBackend {
    fn name(&self) -> &'static str {
        "tfidf"
    }

    fn cosine_similarity(&self, left: &str, right: &str) -> f64 {
        TwoDocumentCorpus::new(left, right).cosine_similarity()
    }
}

/// Term counts of the two documents. Lives for a single comparison only.
struct TwoDocumentCorpus {
    left: IndexMap<String, f64>,
    right: IndexMap<String, f64>,
}

impl TwoDocumentCorpus {
    const DOCUMENT_COUNT: f64 = 2.0;

    fn new(left: &str, right: &str) -> Self {
        Self {
            left: term_counts(left),
            right: term_counts(right),
        }
    }

    fn document_frequency(&self, term: &str) -> f64 {
        let mut df = 0.0;
        if self.left.contains_key(term) {
            df += 1.0;
        }
        if self.right.contains_key(term) {
            df += 1.0;
        }
        df
    }

    /// Smoothed IDF: `ln((1 + n) / (1 + df)) + 1`.
    fn idf(&self, term: &str) -> f64 {
        let df = self.document_frequency(term);
        ((1.0 + Self::DOCUMENT_COUNT) / (1.0 + df)).ln() + 1.0
    }

    fn weights(&self, counts: &IndexMap<String, f64>) -> IndexMap<String, f64> {
        counts
            .iter()
            .map(|(term, tf)| (term.clone(), tf * self.idf(term)))
            .collect()
    }

    fn cosine_similarity(&self) -> f64 {
        let left = self.weights(&self.left);
        let right = self.weights(&self.right);

        let left_norm = norm(&left);
        let right_norm = norm(&right);
        if left_norm == 0.0 || right_norm == 0.0 {
            return 0.0;
        }

        let dot: f64 = left
            .iter()
            .filter_map(|(term, weight)| right.get(term).map(|other| weight * other))
            .sum();

        (dot / (left_norm * right_norm)).clamp(0.0, 1.0)
    }
}

fn norm(vector: &IndexMap<String, f64>) -> f64 {
    vector.values().map(|w| w * w).sum::<f64>().sqrt()
}

/// Unigram and bigram counts of a normalized document, in first-seen order.
fn term_counts(normalized: &str) -> IndexMap<String, f64> {
    let terms = content_terms(normalized);
    let mut counts: IndexMap<String, f64> = IndexMap::new();

    for term in &terms {
        *counts.entry((*term).to_string()).or_insert(0.0) += 1.0;
    }
    for pair in terms.windows(2) {
        *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0.0) += 1.0;
    }

    counts
}
