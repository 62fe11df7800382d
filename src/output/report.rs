//! Report structures handed to the formatters

use crate::processing::analyzer::KeywordGap;
use crate::processing::document::{JobPosting, MatchResult};
use crate::processing::keywords::WeightedKeyword;
use crate::processing::profile::MatchMode;
use crate::ranking::RankedJob;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shared header of every report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub resume: String,
    pub mode: MatchMode,
    pub strategy: String,
    pub tool_version: String,
}

impl ReportMetadata {
    pub fn new(resume: impl Into<String>, mode: MatchMode, strategy: &str) -> Self {
        Self {
            generated_at: Utc::now(),
            resume: resume.into(),
            mode,
            strategy: strategy.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// One resume scored against one posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub metadata: ReportMetadata,
    pub job: JobPosting,
    pub result: MatchResult,
    /// Keywords that only earned partial credit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partial_keywords: Vec<String>,
    /// Jaccard similarity of resume and description terms. Informational, not part of the score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_overlap: Option<f64>,
}

impl ScoreReport {
    pub fn new(metadata: ReportMetadata, job: JobPosting, result: MatchResult, gap: Option<KeywordGap>) -> Self {
        Self {
            metadata,
            job,
            result,
            partial_keywords: gap.map(|g| g.partial_keywords).unwrap_or_default(),
            term_overlap: None,
        }
    }

    pub fn with_term_overlap(mut self, term_overlap: f64) -> Self {
        self.term_overlap = Some(term_overlap);
        self
    }
}

/// One resume ranked against many postings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    pub metadata: ReportMetadata,
    pub threshold: f64,
    pub total_jobs: usize,
    pub matches: Vec<RankedJob>,
}

/// Keywords extracted from a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub keywords: Vec<WeightedKeyword>,
}

impl KeywordReport {
    pub fn new(source: impl Into<String>, keywords: Vec<WeightedKeyword>) -> Self {
        Self {
            generated_at: Utc::now(),
            source: source.into(),
            keywords,
        }
    }
}

/// Rating bucket for a score in `[0, 1]`.
pub fn score_label(score: f64) -> &'static str {
    match (score * 100.0).round() as u32 {
        90..=100 => "EXCELLENT",
        75..=89 => "STRONG",
        50..=74 => "MODERATE",
        25..=49 => "WEAK",
        _ => "POOR",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_label() {
        assert_eq!(score_label(1.0), "EXCELLENT");
        assert_eq!(score_label(0.8), "STRONG");
        assert_eq!(score_label(0.5), "MODERATE");
        assert_eq!(score_label(0.3), "WEAK");
        assert_eq!(score_label(0.0), "POOR");
    }
}
