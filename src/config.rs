//! Configuration management for the job matcher

use crate::error::{MatcherError, Result};
use crate::processing::keywords::{DEFAULT_MAX_KEYWORDS, DEFAULT_MIN_LENGTH};
use crate::processing::ats_matcher::DEFAULT_PARTIAL_CREDIT;
use crate::processing::profile::{ComponentWeights, MatchMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub keywords: KeywordConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub mode: MatchMode,
    pub strategy: StrategyKind,
    pub vector_weight: f64,
    pub keyword_weight: f64,
    pub title_weight: f64,
    /// Credit for a keyword whose first or last three characters appear.
    pub partial_credit: f64,
    /// Turn off to score on keywords and title alone.
    pub enable_vector_backend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub min_length: usize,
    pub max_keywords: usize,
    pub boost_technical: bool,
    /// Extra technical terms appended to the built-in vocabulary.
    pub extra_terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    /// Minimum score for a posting to appear in a ranking.
    pub threshold: f64,
    pub top_n: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Vector similarity, keyword overlap and title relevance.
    #[default]
    Weighted,
    /// Keyword credit plus a flat title bonus.
    KeywordTitle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::Standard,
            strategy: StrategyKind::Weighted,
            vector_weight: ComponentWeights::DEFAULT_VECTOR,
            keyword_weight: ComponentWeights::DEFAULT_KEYWORD,
            title_weight: ComponentWeights::DEFAULT_TITLE,
            partial_credit: DEFAULT_PARTIAL_CREDIT,
            enable_vector_backend: true,
        }
    }
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            boost_technical: true,
            extra_terms: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            threshold: 0.5,
            top_n: 10,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults there on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| MatcherError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-matcher")
            .join("config.toml")
    }

    /// Reject weights and thresholds that cannot produce a meaningful score.
    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;
        let weights = [
            ("vector_weight", scoring.vector_weight),
            ("keyword_weight", scoring.keyword_weight),
            ("title_weight", scoring.title_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(MatcherError::Configuration(format!(
                    "scoring.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..=1.0).contains(&scoring.partial_credit) {
            return Err(MatcherError::Configuration(format!(
                "scoring.partial_credit must be between 0 and 1, got {}",
                scoring.partial_credit
            )));
        }

        if !(0.0..=1.0).contains(&self.output.threshold) {
            return Err(MatcherError::Configuration(format!(
                "output.threshold must be between 0 and 1, got {}",
                self.output.threshold
            )));
        }

        Ok(())
    }

    pub fn weights(&self) -> ComponentWeights {
        ComponentWeights::new(
            self.scoring.vector_weight,
            self.scoring.keyword_weight,
            self.scoring.title_weight,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.scoring.mode = MatchMode::Lenient;
        config.scoring.strategy = StrategyKind::KeywordTitle;
        config.keywords.extra_terms = vec!["bevy".to_string()];
        config.output.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nmode = \"very_lenient\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.scoring.mode, MatchMode::VeryLenient);
        assert_eq!(config.scoring.vector_weight, 0.55);
        assert_eq!(config.keywords, KeywordConfig::default());
        assert_eq!(config.output.top_n, 10);
    }

    #[test]
    fn test_unknown_mode_falls_back() {
        let config: Config = toml::from_str("[scoring]\nmode = \"aggressive\"\n").unwrap();
        assert_eq!(config.scoring.mode, MatchMode::Standard);
    }

    #[test]
    fn test_invalid_weight_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring]\nkeyword_weight = -0.5\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, MatcherError::Configuration(_)));
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(MatcherError::Configuration(_))));
    }
}
