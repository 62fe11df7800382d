//! ATS-style keyword overlap scoring with fuzzy plural and partial matching

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const EXACT_CREDIT: f64 = 1.0;
pub const VARIANT_CREDIT: f64 = 0.8;
pub const DEFAULT_PARTIAL_CREDIT: f64 = 0.5;

/// Ratio multiplier once enough keywords match outright.
pub const COVERAGE_BONUS: f64 = 1.6;
pub const COVERAGE_BONUS_MIN_MATCHES: usize = 2;

/// Keywords shorter than this never earn partial credit.
const PARTIAL_MIN_CHARS: usize = 4;
const PARTIAL_AFFIX_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Keyword appears verbatim.
    Exact,
    /// Singular or plural form appears.
    Variant,
    /// Only the first or last three characters appear.
    Partial,
    Missing,
}

impl MatchType {
    /// Present in the resume for gap reporting purposes.
    pub fn is_present(self) -> bool {
        matches!(self, MatchType::Exact | MatchType::Variant)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub match_type: MatchType,
}

/// Outcome of matching a keyword list against a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordOverlap {
    pub score: f64,
    /// Exact and variant hits; partial hits are not counted.
    pub matched_count: usize,
    pub matches: Vec<KeywordMatch>,
}

impl KeywordOverlap {
    pub fn matching_keywords(&self) -> Vec<String> {
        self.matches
            .iter()
            .filter(|m| m.match_type.is_present())
            .map(|m| m.keyword.clone())
            .collect()
    }

    pub fn missing_keywords(&self) -> Vec<String> {
        self.matches
            .iter()
            .filter(|m| !m.match_type.is_present())
            .map(|m| m.keyword.clone())
            .collect()
    }
}

/// Scores how many job keywords a resume covers.
#[derive(Debug, Clone)]
pub struct KeywordOverlapScorer {
    partial_credit: f64,
}

impl KeywordOverlapScorer {
    pub fn new() -> Self {
        Self {
            partial_credit: DEFAULT_PARTIAL_CREDIT,
        }
    }

    /// Set the credit for partial matches (clamped to 0.0..=1.0).
    pub fn with_partial_credit(mut self, credit: f64) -> Self {
        self.partial_credit = if credit.is_finite() {
            credit.clamp(0.0, 1.0)
        } else {
            DEFAULT_PARTIAL_CREDIT
        };
        self
    }

    pub fn partial_credit(&self) -> f64 {
        self.partial_credit
    }

    /// Credit earned by one match.
    pub fn credit(&self, match_type: MatchType) -> f64 {
        match match_type {
            MatchType::Exact => EXACT_CREDIT,
            MatchType::Variant => VARIANT_CREDIT,
            MatchType::Partial => self.partial_credit,
            MatchType::Missing => 0.0,
        }
    }

    /// Match a lowercase keyword against lowercase resume text.
    pub fn classify(resume_lower: &str, keyword: &str) -> MatchType {
        if keyword.is_empty() {
            return MatchType::Missing;
        }
        if resume_lower.contains(keyword) {
            return MatchType::Exact;
        }

        let singular_hit = keyword
            .strip_suffix('s')
            .is_some_and(|stem| !stem.is_empty() && resume_lower.contains(stem));
        if singular_hit || resume_lower.contains(&format!("{}s", keyword)) {
            return MatchType::Variant;
        }

        let chars: Vec<char> = keyword.chars().collect();
        if chars.len() >= PARTIAL_MIN_CHARS {
            let prefix: String = chars[..PARTIAL_AFFIX_CHARS].iter().collect();
            let suffix: String = chars[chars.len() - PARTIAL_AFFIX_CHARS..].iter().collect();
            if resume_lower.contains(&prefix) || resume_lower.contains(&suffix) {
                return MatchType::Partial;
            }
        }

        MatchType::Missing
    }

    /// Match every keyword and compute the overlap score in `[0, 1]`.
    ///
    /// `keywords` should already be prepared with [`prepare_keywords`].
    pub fn evaluate(&self, resume_text: &str, keywords: &[String]) -> KeywordOverlap {
        let resume_lower = resume_text.to_lowercase();

        let matches: Vec<KeywordMatch> = keywords
            .iter()
            .map(|keyword| KeywordMatch {
                keyword: keyword.clone(),
                match_type: Self::classify(&resume_lower, keyword),
            })
            .collect();

        let matched_count = matches.iter().filter(|m| m.match_type.is_present()).count();

        let score = if matches.is_empty() {
            0.0
        } else {
            let credit: f64 = matches.iter().map(|m| self.credit(m.match_type)).sum();
            let mut ratio = credit / matches.len() as f64;
            if matched_count >= COVERAGE_BONUS_MIN_MATCHES {
                ratio *= COVERAGE_BONUS;
            }
            ratio.clamp(0.0, 1.0)
        };

        KeywordOverlap {
            score,
            matched_count,
            matches,
        }
    }

    pub fn score(&self, resume_text: &str, keywords: &[String]) -> f64 {
        self.evaluate(resume_text, keywords).score
    }
}

impl Default for KeywordOverlapScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase, trim and deduplicate caller-supplied keywords, keeping first occurrences.
pub fn prepare_keywords(keywords: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty() && seen.insert(k.clone()))
        .collect()
}
