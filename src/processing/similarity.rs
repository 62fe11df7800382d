//! Vector similarity scoring between resume and job description

use crate::processing::text_processor::normalize;

/// Raw cosine similarity on two-document corpora is small; it is scaled by this factor.
pub const SIMILARITY_BOOST: f64 = 3.0;

/// Any nonzero similarity is raised to at least this value.
pub const SIMILARITY_FLOOR: f64 = 0.18;

/// A vector-space similarity implementation.
///
/// Receives normalized text and returns a raw cosine similarity in `[0, 1]`.
/// Any corpus it builds must be local to the call.
pub trait SimilarityBackend: Send + Sync {
    fn name(&self) -> &'static str;

    fn cosine_similarity(&self, left: &str, right: &str) -> f64;
}

/// Boosted, floored vector similarity between a resume and a job description.
pub struct VectorSimilarityScorer {
    backend: Box<dyn SimilarityBackend>,
}

impl VectorSimilarityScorer {
    pub fn new(backend: Box<dyn SimilarityBackend>) -> Self {
        Self { backend }
    }

    /// The compiled-in backend, if any.
    #[cfg(feature = "tfidf")]
    pub fn detect() -> Option<Self> {
        Some(Self::new(Box::new(crate::processing::tfidf::TfIdfBackend)))
    }

    /// The compiled-in backend, if any.
    #[cfg(not(feature = "tfidf"))]
    pub fn detect() -> Option<Self> {
        None
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn score(&self, resume_text: &str, job_text: &str) -> f64 {
        let resume = normalize(resume_text);
        let job = normalize(job_text);
        if resume.is_empty() || job.is_empty() {
            return 0.0;
        }

        let raw = self.backend.cosine_similarity(&resume, &job);
        if !raw.is_finite() || raw <= 0.0 {
            return 0.0;
        }

        (raw * SIMILARITY_BOOST).min(1.0).max(SIMILARITY_FLOOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedBackend(f64);

    impl SimilarityBackend for FixedBackend {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn cosine_similarity(&self, _left: &str, _right: &str) -> f64 {
            self.0
        }
    }

    fn scorer(raw: f64) -> VectorSimilarityScorer {
        VectorSimilarityScorer::new(Box::new(FixedBackend(raw)))
    }

    #[test]
    fn test_boost_and_cap() {
        assert!((scorer(0.2).score("a resume", "a job") - 0.6).abs() < 1e-12);
        assert_eq!(scorer(0.5).score("a resume", "a job"), 1.0);
    }

    #[test]
    fn test_floor_applies_only_to_nonzero() {
        assert_eq!(scorer(0.01).score("resume", "job"), SIMILARITY_FLOOR);
        assert_eq!(scorer(0.0).score("resume", "job"), 0.0);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(scorer(0.9).score("", "job"), 0.0);
        assert_eq!(scorer(0.9).score("resume", "  !!! "), 0.0);
    }

    #[test]
    fn test_non_finite_backend_output() {
        assert_eq!(scorer(f64::NAN).score("resume", "job"), 0.0);
    }

    #[cfg(feature = "tfidf")]
    #[test]
    fn test_detect_tfidf() {
        let scorer = VectorSimilarityScorer::detect().unwrap();
        assert_eq!(scorer.backend_name(), "tfidf");
        let score = scorer.score("Python developer, Django and AWS", "Python Developer needed: Django, AWS");
        assert!(score >= SIMILARITY_FLOOR && score <= 1.0);
    }
}
