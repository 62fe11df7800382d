//! Match engine combining vector similarity, keyword overlap and title relevance

use crate::config::{Config, StrategyKind};
use crate::error::Result;
use crate::processing::ats_matcher::{prepare_keywords, KeywordOverlap, KeywordOverlapScorer, MatchType};
use crate::processing::document::{ComponentScores, JobPosting, MatchResult};
use crate::processing::keywords::KeywordExtractor;
use crate::processing::profile::MatchingProfile;
use crate::processing::similarity::VectorSimilarityScorer;
use crate::processing::text_processor::normalize;
use crate::processing::title_matcher::TitleRelevanceScorer;
use serde::{Deserialize, Serialize};

/// Title bonus per title word found in the resume, keyword/title strategy only.
pub const SIMPLE_TITLE_WORD_BONUS: f64 = 0.1;

/// Combines component scores into the final score.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Weighted sum of the components, scaled by the profile multiplier,
    /// clamped to `[0, 1]` and rounded to three decimals.
    ///
    /// A `None` vector score redistributes the vector weight proportionally
    /// over keyword and title.
    pub fn aggregate(vector: Option<f64>, keyword: f64, title: f64, profile: &MatchingProfile) -> f64 {
        let weights = &profile.weights;
        let keyword = unit(keyword);
        let title = unit(title);

        let raw = match vector {
            Some(vector) => {
                weights.vector * unit(vector) + weights.keyword * keyword + weights.title * title
            }
            None => {
                let (keyword_weight, title_weight) = weights.without_vector();
                keyword_weight * keyword + title_weight * title
            }
        };

        Self::finalize(raw, profile.threshold_multiplier)
    }

    /// Apply the profile multiplier, cap at 1.0 and round.
    pub fn finalize(raw: f64, threshold_multiplier: f64) -> f64 {
        let scaled = raw * threshold_multiplier;
        if !scaled.is_finite() {
            return 0.0;
        }
        round3(scaled.clamp(0.0, 1.0))
    }
}

/// Everything a strategy needs to score one pair.
pub struct MatchInput<'a> {
    pub resume_text: &'a str,
    pub job: &'a JobPosting,
    pub overlap: &'a KeywordOverlap,
}

/// A way of turning one resume/job pair into a score.
pub trait MatchStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// True when the strategy runs without a signal it normally relies on.
    fn is_degraded(&self) -> bool {
        false
    }

    /// True when results carry a vector similarity component.
    fn reports_vector(&self) -> bool {
        false
    }

    fn score(&self, input: &MatchInput<'_>, profile: &MatchingProfile) -> (f64, ComponentScores);
}

/// Three-signal scorer: vector similarity, keyword overlap and title relevance.
pub struct WeightedStrategy {
    vector: Option<VectorSimilarityScorer>,
    title: TitleRelevanceScorer,
}

impl WeightedStrategy {
    /// Use the compiled-in vector backend when there is one.
    pub fn new() -> Self {
        Self::with_vector(VectorSimilarityScorer::detect())
    }

    pub fn with_vector(vector: Option<VectorSimilarityScorer>) -> Self {
        match &vector {
            Some(scorer) => log::debug!("Vector similarity backend: {}", scorer.backend_name()),
            None => log::warn!("Vector similarity backend unavailable, redistributing its weight"),
        }
        Self {
            vector,
            title: TitleRelevanceScorer::new(),
        }
    }

    pub fn without_vector() -> Self {
        Self::with_vector(None)
    }
}

impl Default for WeightedStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchStrategy for WeightedStrategy {
    fn name(&self) -> &'static str {
        "weighted"
    }

    fn is_degraded(&self) -> bool {
        self.vector.is_none()
    }

    fn reports_vector(&self) -> bool {
        self.vector.is_some()
    }

    fn score(&self, input: &MatchInput<'_>, profile: &MatchingProfile) -> (f64, ComponentScores) {
        let components = ComponentScores {
            vector: self
                .vector
                .as_ref()
                .map(|scorer| scorer.score(input.resume_text, &input.job.description)),
            keyword: input.overlap.score,
            title: self.title.score(input.resume_text, &input.job.title),
        };

        let score = ScoreAggregator::aggregate(components.vector, components.keyword, components.title, profile);
        (score, components)
    }
}

/// Two-signal scorer: keyword credit plus a flat bonus per title word.
///
/// Ignores the profile's component weights; only the multiplier applies.
pub struct KeywordTitleStrategy {
    overlap: KeywordOverlapScorer,
}

impl KeywordTitleStrategy {
    pub fn new(overlap: KeywordOverlapScorer) -> Self {
        Self { overlap }
    }
}

impl Default for KeywordTitleStrategy {
    fn default() -> Self {
        Self::new(KeywordOverlapScorer::new())
    }
}

impl MatchStrategy for KeywordTitleStrategy {
    fn name(&self) -> &'static str {
        "keyword_title"
    }

    fn score(&self, input: &MatchInput<'_>, profile: &MatchingProfile) -> (f64, ComponentScores) {
        let matches = &input.overlap.matches;
        let credit: f64 = matches.iter().map(|m| self.overlap.credit(m.match_type)).sum();
        let keyword = credit / matches.len().max(1) as f64;

        let resume_lower = input.resume_text.to_lowercase();
        let title_bonus: f64 = input
            .job
            .title
            .split_whitespace()
            .filter(|word| word.chars().count() > 2)
            .filter(|word| resume_lower.contains(&word.to_lowercase()))
            .map(|_| SIMPLE_TITLE_WORD_BONUS)
            .sum();

        let combined = (keyword + title_bonus).min(1.0);
        let score = ScoreAggregator::finalize(combined, profile.threshold_multiplier);

        let components = ComponentScores {
            vector: None,
            keyword: unit(keyword),
            title: unit(title_bonus),
        };
        (score, components)
    }
}

/// Matching and missing job keywords, without the rest of the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordGap {
    pub matching_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    /// Missing keywords that still earned partial credit.
    pub partial_keywords: Vec<String>,
}

/// Scores resumes against job postings.
pub struct JobMatcher {
    extractor: KeywordExtractor,
    overlap: KeywordOverlapScorer,
    strategy: Box<dyn MatchStrategy>,
    profile: MatchingProfile,
}

impl JobMatcher {
    /// Weighted strategy, standard profile, default keyword settings.
    pub fn new() -> Result<Self> {
        Ok(Self {
            extractor: KeywordExtractor::new()?,
            overlap: KeywordOverlapScorer::new(),
            strategy: Box::new(WeightedStrategy::new()),
            profile: MatchingProfile::default(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let scoring = &config.scoring;
        let overlap = KeywordOverlapScorer::new().with_partial_credit(scoring.partial_credit);

        let strategy: Box<dyn MatchStrategy> = match scoring.strategy {
            StrategyKind::Weighted => {
                let vector = if scoring.enable_vector_backend {
                    VectorSimilarityScorer::detect()
                } else {
                    None
                };
                Box::new(WeightedStrategy::with_vector(vector))
            }
            StrategyKind::KeywordTitle => Box::new(KeywordTitleStrategy::new(overlap.clone())),
        };

        let extractor = KeywordExtractor::from_config(&config.keywords)?;
        log::debug!("Keyword vocabulary: {} terms", extractor.vocabulary_size());

        Ok(Self {
            extractor,
            overlap,
            strategy,
            profile: MatchingProfile::new(scoring.mode).with_weights(config.weights()),
        })
    }

    pub fn with_strategy(mut self, strategy: Box<dyn MatchStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_profile(mut self, profile: MatchingProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn profile(&self) -> &MatchingProfile {
        &self.profile
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn is_degraded(&self) -> bool {
        self.strategy.is_degraded()
    }

    /// Score with the matcher's own profile.
    pub fn score(&self, resume_text: &str, job: &JobPosting) -> MatchResult {
        self.score_with_profile(resume_text, job, &self.profile)
    }

    /// Score one resume against one posting. Never fails: missing input gives 0.0.
    pub fn score_with_profile(&self, resume_text: &str, job: &JobPosting, profile: &MatchingProfile) -> MatchResult {
        let strategy = self.strategy.name();
        let degraded = self.strategy.is_degraded();

        let keywords = self.job_keywords(job);
        let overlap = self.overlap.evaluate(resume_text, &keywords);

        if normalize(&job.description).is_empty() || normalize(resume_text).is_empty() {
            log::debug!("No signal for '{}': empty resume or description", job.label());
            let mut result = MatchResult::no_signal(strategy, self.strategy.reports_vector(), degraded);
            result.matching_keywords = overlap.matching_keywords();
            result.missing_keywords = overlap.missing_keywords();
            return result;
        }

        let input = MatchInput {
            resume_text,
            job,
            overlap: &overlap,
        };
        let (score, components) = self.strategy.score(&input, profile);

        log::debug!(
            "Scored '{}': {:.3} (vector {:?}, keyword {:.3}, title {:.3}, mode {})",
            job.label(),
            score,
            components.vector,
            components.keyword,
            components.title,
            profile.mode
        );

        MatchResult {
            score,
            components,
            matching_keywords: overlap.matching_keywords(),
            missing_keywords: overlap.missing_keywords(),
            strategy: strategy.to_string(),
            degraded,
        }
    }

    /// The posting's own keywords when present, otherwise extracted from its description.
    pub fn job_keywords(&self, job: &JobPosting) -> Vec<String> {
        let supplied = prepare_keywords(&job.keywords);
        if !supplied.is_empty() {
            return supplied;
        }
        self.extractor.extract(&job.description)
    }

    /// Matching and missing keywords from the keyword pass alone.
    pub fn keyword_gap(&self, resume_text: &str, job: &JobPosting) -> KeywordGap {
        let keywords = self.job_keywords(job);
        let overlap = self.overlap.evaluate(resume_text, &keywords);

        KeywordGap {
            matching_keywords: overlap.matching_keywords(),
            partial_keywords: overlap
                .matches
                .iter()
                .filter(|m| m.match_type == MatchType::Partial)
                .map(|m| m.keyword.clone())
                .collect(),
            missing_keywords: overlap.missing_keywords(),
        }
    }

    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.extractor.extract(text)
    }
}

fn unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::profile::{ComponentWeights, MatchMode};

    const RESUME: &str = "python django flask aws docker senior software engineer";

    fn scenario_job() -> JobPosting {
        JobPosting::new("Senior Software Engineer", "Backend role building Python services on AWS.")
            .with_keywords(["python", "django", "aws", "kubernetes"])
    }

    fn degraded_matcher() -> JobMatcher {
        JobMatcher::new()
            .unwrap()
            .with_strategy(Box::new(WeightedStrategy::without_vector()))
    }

    #[test]
    fn test_aggregate_default_weights() {
        let profile = MatchingProfile::new(MatchMode::Strict);
        let score = ScoreAggregator::aggregate(Some(0.4), 0.5, 0.2, &profile);
        // 0.55 * 0.4 + 0.35 * 0.5 + 0.10 * 0.2 = 0.415
        assert_eq!(score, 0.415);
    }

    #[test]
    fn test_aggregate_applies_multiplier_and_cap() {
        let standard = ScoreAggregator::aggregate(Some(0.5), 0.5, 0.5, &MatchingProfile::default());
        assert_eq!(standard, 0.55);

        let lenient = ScoreAggregator::aggregate(Some(0.5), 0.5, 0.5, &MatchingProfile::new(MatchMode::Lenient));
        assert_eq!(lenient, 0.75);

        let very_lenient = ScoreAggregator::aggregate(Some(0.4), 0.5, 0.2, &MatchingProfile::new(MatchMode::VeryLenient));
        assert_eq!(very_lenient, 0.913);

        let capped = ScoreAggregator::aggregate(Some(1.0), 1.0, 1.0, &MatchingProfile::new(MatchMode::VeryLenient));
        assert_eq!(capped, 1.0);
    }

    #[test]
    fn test_aggregate_redistributes_missing_vector() {
        let profile = MatchingProfile::new(MatchMode::Strict);
        let score = ScoreAggregator::aggregate(None, 0.45, 0.9, &profile);
        // 0.35/0.45 * 0.45 + 0.10/0.45 * 0.9 = 0.35 + 0.2
        assert_eq!(score, 0.55);
    }

    #[test]
    fn test_aggregate_clamps_bad_inputs() {
        let profile = MatchingProfile::default();
        assert_eq!(ScoreAggregator::aggregate(Some(f64::NAN), -3.0, 7.0, &profile), 0.11);
        let weird = MatchingProfile::default().with_weights(ComponentWeights::new(5.0, 5.0, 5.0));
        assert_eq!(ScoreAggregator::aggregate(Some(1.0), 1.0, 1.0, &weird), 1.0);
        let negative = MatchingProfile::default().with_weights(ComponentWeights::new(-1.0, 0.0, 0.0));
        assert_eq!(ScoreAggregator::aggregate(Some(1.0), 0.0, 0.0, &negative), 0.0);
    }

    #[test]
    fn test_keyword_and_title_scenario_without_vector() {
        let result = degraded_matcher().score(RESUME, &scenario_job());

        assert!(result.degraded);
        assert_eq!(result.components.vector, None);
        assert_eq!(result.components.keyword, 1.0);
        assert_eq!(result.components.title, 1.0);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.matching_keywords, vec!["python", "django", "aws"]);
        assert_eq!(result.missing_keywords, vec!["kubernetes"]);
    }

    #[test]
    fn test_empty_description_scores_zero() {
        let matcher = JobMatcher::new().unwrap();
        let job = JobPosting::new("Senior Software Engineer", "").with_keywords(["python"]);
        for mode in MatchMode::ALL {
            let result = matcher.score_with_profile(RESUME, &job, &MatchingProfile::new(mode));
            assert_eq!(result.score, 0.0);
        }
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        let matcher = JobMatcher::new().unwrap();
        let result = matcher.score("", &scenario_job());
        assert_eq!(result.score, 0.0);
        assert_eq!(result.components.keyword, 0.0);
        assert_eq!(result.components.title, 0.0);
    }

    #[test]
    fn test_empty_resume_reports_every_keyword_missing() {
        let matcher = JobMatcher::new().unwrap();
        let job = JobPosting::new("Rust Engineer", "Systems work").with_keywords(["rust", "tokio"]);

        let result = matcher.score("", &job);
        let gap = matcher.keyword_gap("", &job);
        assert_eq!(result.score, 0.0);
        assert!(result.matching_keywords.is_empty());
        assert_eq!(result.missing_keywords, vec!["rust", "tokio"]);
        assert_eq!(result.missing_keywords, gap.missing_keywords);
    }

    #[test]
    fn test_no_signal_vector_slot_follows_strategy() {
        let job = JobPosting::new("Rust Engineer", "").with_keywords(["rust"]);

        let simple = JobMatcher::new()
            .unwrap()
            .with_strategy(Box::new(KeywordTitleStrategy::default()))
            .score("rust", &job);
        assert_eq!(simple.score, 0.0);
        assert_eq!(simple.components.vector, None);
        assert!(!simple.degraded);
        assert_eq!(simple.matching_keywords, vec!["rust"]);

        let degraded = JobMatcher::new()
            .unwrap()
            .with_strategy(Box::new(WeightedStrategy::without_vector()))
            .score("rust", &job);
        assert_eq!(degraded.components.vector, None);
        assert!(degraded.degraded);
    }

    #[cfg(feature = "tfidf")]
    #[test]
    fn test_no_signal_keeps_vector_slot_with_backend() {
        let job = JobPosting::new("Rust Engineer", "");
        let result = JobMatcher::new().unwrap().score("rust", &job);
        assert_eq!(result.components.vector, Some(0.0));
        assert!(!result.degraded);
    }

    #[test]
    fn test_from_config_uses_configured_weights() {
        let mut config = Config::default();
        config.scoring.vector_weight = 0.2;
        config.scoring.keyword_weight = 0.5;
        config.scoring.title_weight = 0.3;

        let matcher = JobMatcher::from_config(&config).unwrap();
        assert_eq!(matcher.profile().weights, config.weights());
    }

    #[test]
    fn test_keywords_extracted_when_not_supplied() {
        let matcher = JobMatcher::new().unwrap();
        let job = JobPosting::new("Data Engineer", "Spark pipelines. Spark streaming with Kafka and Airflow.");
        let keywords = matcher.job_keywords(&job);
        assert_eq!(keywords[0], "spark");
        assert!(keywords.contains(&"airflow".to_string()));
    }

    #[test]
    fn test_keyword_gap() {
        let matcher = JobMatcher::new().unwrap();
        let job = JobPosting::new("Engineer", "desc").with_keywords(["Python", "Terraform", "Kubernetes"]);
        let gap = matcher.keyword_gap("python and terra incognita", &job);
        assert_eq!(gap.matching_keywords, vec!["python"]);
        assert_eq!(gap.missing_keywords, vec!["terraform", "kubernetes"]);
        assert_eq!(gap.partial_keywords, vec!["terraform"]);
    }

    #[test]
    fn test_keyword_title_strategy() {
        let matcher = JobMatcher::new()
            .unwrap()
            .with_strategy(Box::new(KeywordTitleStrategy::default()))
            .with_profile(MatchingProfile::new(MatchMode::Strict));
        let job = JobPosting::new("Backend Engineer", "Build services")
            .with_keywords(["python", "rust", "kubernetes", "terraform"]);

        let result = matcher.score("python backend developer", &job);
        // keyword 1/4 = 0.25, title bonus 0.1 ("backend")
        assert_eq!(result.strategy, "keyword_title");
        assert!(!result.degraded);
        assert_eq!(result.score, 0.35);
    }

    #[test]
    fn test_profiles_are_monotonic() {
        let matcher = JobMatcher::new().unwrap();
        let job = JobPosting::new("Platform Engineer", "Operate Kubernetes clusters with Terraform and Go on GCP.");
        let resume = "Site reliability engineer. Terraform, Docker, AWS. Some Go.";

        let scores: Vec<f64> = MatchMode::ALL
            .iter()
            .map(|mode| matcher.score_with_profile(resume, &job, &MatchingProfile::new(*mode)).score)
            .collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
    }
}
