//! Frequency-based keyword extraction with technical-term boosting

use crate::config::KeywordConfig;
use crate::error::{MatcherError, Result};
use crate::processing::vocabulary::{is_stop_word, TECHNICAL_TERMS, TECHNICAL_TERM_BONUS};
use aho_corasick::AhoCorasick;
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Words starting with a letter; `+ # - .` are allowed inside so that
/// `c++`, `c#` and `node.js` survive as single tokens.
static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z][a-z0-9_+#.\-]*").expect("Invalid token regex"));

pub const DEFAULT_MIN_LENGTH: usize = 4;
pub const DEFAULT_MAX_KEYWORDS: usize = 50;

/// A keyword with its weighted frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedKeyword {
    pub keyword: String,
    pub weight: u32,
}

/// Extracts the most significant keywords of a job description.
pub struct KeywordExtractor {
    min_length: usize,
    max_keywords: usize,
    boost_technical: bool,
    /// Technical vocabulary in priority order, built-in terms first.
    vocabulary: Vec<String>,
    terms: HashSet<String>,
    phrases: Vec<String>,
    phrase_matcher: AhoCorasick,
}

impl KeywordExtractor {
    /// Create an extractor over the built-in technical vocabulary.
    pub fn new() -> Result<Self> {
        Self::with_additional_terms(Vec::new())
    }

    /// Create an extractor whose vocabulary is the built-in one plus `additional_terms`.
    pub fn with_additional_terms(additional_terms: Vec<String>) -> Result<Self> {
        let mut vocabulary: Vec<String> = TECHNICAL_TERMS.iter().map(|t| t.to_string()).collect();
        let mut terms: HashSet<String> = vocabulary.iter().cloned().collect();

        for term in additional_terms {
            let term = term.trim().to_lowercase();
            if !term.is_empty() && terms.insert(term.clone()) {
                vocabulary.push(term);
            }
        }

        let phrases: Vec<String> = vocabulary.iter().filter(|t| t.contains(' ')).cloned().collect();
        let phrase_matcher = AhoCorasick::new(&phrases)
            .map_err(|e| MatcherError::Processing(format!("Failed to build phrase matcher: {}", e)))?;

        Ok(Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            boost_technical: true,
            vocabulary,
            terms,
            phrases,
            phrase_matcher,
        })
    }

    pub fn from_config(config: &KeywordConfig) -> Result<Self> {
        Ok(Self::with_additional_terms(config.extra_terms.clone())?
            .with_min_length(config.min_length)
            .with_max_keywords(config.max_keywords)
            .with_technical_boost(config.boost_technical))
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    pub fn with_technical_boost(mut self, enable: bool) -> Self {
        self.boost_technical = enable;
        self
    }

    /// Top keywords of `text`, most heavily weighted first.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.extract_weighted(text)
            .into_iter()
            .map(|k| k.keyword)
            .collect()
    }

    /// Top keywords of `text` with their weights.
    ///
    /// Ties keep first-seen order; vocabulary terms that only appear as a
    /// multi-word phrase rank after every token seen in the text.
    pub fn extract_weighted(&self, text: &str) -> Vec<WeightedKeyword> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let lowered = text.to_lowercase();
        let tokens = Self::tokenize(&lowered);

        let mut counts: IndexMap<String, u32> = IndexMap::new();
        for token in &tokens {
            if is_stop_word(token) {
                continue;
            }
            if token.chars().count() < self.min_length && !self.is_technical_term(token) {
                continue;
            }
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }

        if self.boost_technical {
            let token_set: HashSet<&str> = tokens.iter().copied().collect();
            let found_phrases: HashSet<&str> = self
                .phrase_matcher
                .find_overlapping_iter(&lowered)
                .map(|m| self.phrases[m.pattern().as_usize()].as_str())
                .collect();

            for term in &self.vocabulary {
                let present = if term.contains(' ') {
                    found_phrases.contains(term.as_str())
                } else {
                    token_set.contains(term.as_str())
                };
                if present {
                    *counts.entry(term.clone()).or_insert(0) += TECHNICAL_TERM_BONUS;
                }
            }
        }

        let mut ranked: Vec<WeightedKeyword> = counts
            .into_iter()
            .map(|(keyword, weight)| WeightedKeyword { keyword, weight })
            .collect();
        // Stable: equal weights stay in first-seen order.
        ranked.sort_by(|a, b| b.weight.cmp(&a.weight));
        ranked.truncate(self.max_keywords);

        log::debug!("Extracted {} keywords", ranked.len());
        ranked
    }

    /// Whether `term` (lowercase) belongs to this extractor's technical vocabulary.
    pub fn is_technical_term(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    fn tokenize(lowered: &str) -> Vec<&str> {
        TOKEN_REGEX
            .find_iter(lowered)
            .map(|m| m.as_str().trim_end_matches(['.', '-']))
            .filter(|token| !token.is_empty())
            .collect()
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new().expect("Failed to create default keyword extractor")
    }
}
