//! Job posting and match result structures

use serde::{Deserialize, Deserializer, Serialize};

/// A job posting as delivered by the ingestion layer.
///
/// Missing or `null` text fields deserialize as empty strings so that an
/// incomplete posting scores 0.0 instead of failing to load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    /// Precomputed keywords; extracted from the description when empty.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl JobPosting {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }

    /// Short label for reports: "title @ company" or just the title.
    pub fn label(&self) -> String {
        let title = if self.title.trim().is_empty() {
            "(untitled)"
        } else {
            self.title.trim()
        };
        match self.company.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            Some(company) => format!("{} @ {}", title, company),
            None => title.to_string(),
        }
    }
}

/// Per-signal scores behind an aggregate score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    /// `None` when the vector backend was not available.
    pub vector: Option<f64>,
    pub keyword: f64,
    pub title: f64,
}

/// Result of scoring one resume against one job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Aggregate relevance in `[0, 1]`, rounded to three decimals.
    pub score: f64,
    pub components: ComponentScores,
    /// Job keywords found in the resume (exactly or as a plural variant).
    pub matching_keywords: Vec<String>,
    /// Job keywords absent from the resume.
    pub missing_keywords: Vec<String>,
    pub strategy: String,
    /// Set when the vector backend was unavailable and its weight redistributed.
    pub degraded: bool,
}

impl MatchResult {
    /// The "no signal" result: every component and the aggregate are 0.0.
    ///
    /// `reports_vector` decides whether the vector component is `Some(0.0)` or absent.
    pub fn no_signal(strategy: &str, reports_vector: bool, degraded: bool) -> Self {
        Self {
            score: 0.0,
            components: ComponentScores {
                vector: reports_vector.then_some(0.0),
                keyword: 0.0,
                title: 0.0,
            },
            matching_keywords: Vec::new(),
            missing_keywords: Vec::new(),
            strategy: strategy.to_string(),
            degraded,
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_vec<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
