//! Matching profiles: how aggressively aggregate scores are inflated

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Named aggressiveness level. Unknown names fall back to `Standard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MatchMode {
    /// Raw combined score.
    Strict,
    /// Default; 10% more permissive than strict.
    #[default]
    Standard,
    Lenient,
    VeryLenient,
}

impl MatchMode {
    /// All modes from least to most permissive.
    pub const ALL: [MatchMode; 4] = [
        MatchMode::Strict,
        MatchMode::Standard,
        MatchMode::Lenient,
        MatchMode::VeryLenient,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Strict => "strict",
            MatchMode::Standard => "standard",
            MatchMode::Lenient => "lenient",
            MatchMode::VeryLenient => "very_lenient",
        }
    }

    pub fn threshold_multiplier(self) -> f64 {
        match self {
            MatchMode::Strict => 1.0,
            MatchMode::Standard => 1.1,
            MatchMode::Lenient => 1.5,
            MatchMode::VeryLenient => 2.2,
        }
    }

    /// Parse a mode name, case-insensitively. Never fails.
    pub fn parse(name: &str) -> Self {
        let key = name.trim().to_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "strict" => MatchMode::Strict,
            "standard" => MatchMode::Standard,
            "lenient" => MatchMode::Lenient,
            "very_lenient" => MatchMode::VeryLenient,
            _ => {
                log::warn!("Unknown matching mode '{}', using standard", name);
                MatchMode::Standard
            }
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for MatchMode {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<MatchMode> for String {
    fn from(mode: MatchMode) -> Self {
        mode.as_str().to_string()
    }
}

/// Relative weights of the three signals. They need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub vector: f64,
    pub keyword: f64,
    pub title: f64,
}

impl ComponentWeights {
    pub const DEFAULT_VECTOR: f64 = 0.55;
    pub const DEFAULT_KEYWORD: f64 = 0.35;
    pub const DEFAULT_TITLE: f64 = 0.10;

    pub fn new(vector: f64, keyword: f64, title: f64) -> Self {
        Self { vector, keyword, title }
    }

    /// Keyword and title weights rescaled to sum to 1, for use without a vector score.
    pub fn without_vector(&self) -> (f64, f64) {
        let total = self.keyword + self.title;
        if total <= 0.0 || !total.is_finite() {
            return (0.0, 0.0);
        }
        (self.keyword / total, self.title / total)
    }
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VECTOR, Self::DEFAULT_KEYWORD, Self::DEFAULT_TITLE)
    }
}

/// Mode, multiplier and weights chosen by the caller for one scoring run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchingProfile {
    pub mode: MatchMode,
    pub threshold_multiplier: f64,
    pub weights: ComponentWeights,
}

impl MatchingProfile {
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            threshold_multiplier: mode.threshold_multiplier(),
            weights: ComponentWeights::default(),
        }
    }

    pub fn from_name(name: &str) -> Self {
        Self::new(MatchMode::parse(name))
    }

    pub fn with_weights(mut self, weights: ComponentWeights) -> Self {
        self.weights = weights;
        self
    }
}

impl Default for MatchingProfile {
    fn default() -> Self {
        Self::new(MatchMode::Standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers_strictly_increase() {
        let multipliers: Vec<f64> = MatchMode::ALL.iter().map(|m| m.threshold_multiplier()).collect();
        assert_eq!(multipliers, vec![1.0, 1.1, 1.5, 2.2]);
        assert!(multipliers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(MatchMode::parse("strict"), MatchMode::Strict);
        assert_eq!(MatchMode::parse(" Lenient "), MatchMode::Lenient);
        assert_eq!(MatchMode::parse("very-lenient"), MatchMode::VeryLenient);
        assert_eq!(MatchMode::parse("VERY_LENIENT"), MatchMode::VeryLenient);
    }

    #[test]
    fn test_unknown_mode_falls_back_to_standard() {
        assert_eq!(MatchMode::parse("aggressive"), MatchMode::Standard);
        assert_eq!("".parse::<MatchMode>(), Ok(MatchMode::Standard));
        let profile = MatchingProfile::from_name("whatever");
        assert_eq!(profile.mode, MatchMode::Standard);
        assert_eq!(profile.threshold_multiplier, 1.1);
    }

    #[test]
    fn test_default_profile() {
        let profile = MatchingProfile::default();
        assert_eq!(profile.mode, MatchMode::Standard);
        assert_eq!(profile.weights, ComponentWeights::new(0.55, 0.35, 0.10));
    }

    #[test]
    fn test_weights_without_vector() {
        let (keyword, title) = ComponentWeights::default().without_vector();
        assert!((keyword - 0.35 / 0.45).abs() < 1e-12);
        assert!((title - 0.10 / 0.45).abs() < 1e-12);
        assert!((keyword + title - 1.0).abs() < 1e-12);

        assert_eq!(ComponentWeights::new(1.0, 0.0, 0.0).without_vector(), (0.0, 0.0));
    }

    #[test]
    fn test_mode_serde_round_trip_with_fallback() {
        let mode: MatchMode = serde_json::from_str("\"lenient\"").unwrap();
        assert_eq!(mode, MatchMode::Lenient);
        let unknown: MatchMode = serde_json::from_str("\"turbo\"").unwrap();
        assert_eq!(unknown, MatchMode::Standard);
        assert_eq!(serde_json::to_string(&MatchMode::VeryLenient).unwrap(), "\"very_lenient\"");
    }
}
