//! Job title relevance scoring

use crate::processing::text_processor::normalize;
use crate::processing::vocabulary::ROLE_KEYWORDS;
use std::collections::HashSet;

/// Score of an untitled or generic posting; no negative signal.
pub const TITLE_BASE_SCORE: f64 = 0.2;
pub const EXACT_WORD_CREDIT: f64 = 1.3;
pub const PARTIAL_WORD_CREDIT: f64 = 0.8;
/// Flat bonus when title and resume share a role noun such as "engineer".
pub const ROLE_BONUS: f64 = 0.35;

const MIN_WORD_CHARS: usize = 3;

/// Scores how well the significant words of a job title appear in a resume.
#[derive(Debug, Default, Clone, Copy)]
pub struct TitleRelevanceScorer;

impl TitleRelevanceScorer {
    pub fn new() -> Self {
        Self
    }

    /// Normalized title words of at least three characters.
    pub fn significant_words(job_title: &str) -> Vec<String> {
        normalize(job_title)
            .split_whitespace()
            .filter(|w| w.len() >= MIN_WORD_CHARS)
            .map(str::to_string)
            .collect()
    }

    /// Title relevance in `[0, 1]`; 0.0 for an empty resume.
    pub fn score(&self, resume_text: &str, job_title: &str) -> f64 {
        let resume_norm = normalize(resume_text);
        if resume_norm.is_empty() {
            return 0.0;
        }

        let title_words = Self::significant_words(job_title);
        if title_words.is_empty() {
            return TITLE_BASE_SCORE;
        }

        let resume_words: HashSet<&str> = resume_norm.split_whitespace().collect();
        let matches: f64 = title_words
            .iter()
            .map(|word| Self::word_credit(word, &resume_words))
            .sum();

        let mut score = TITLE_BASE_SCORE.max(matches / title_words.len() as f64);

        let title_lower = job_title.to_lowercase();
        let resume_lower = resume_text.to_lowercase();
        if let Some(role) = ROLE_KEYWORDS
            .iter()
            .find(|role| title_lower.contains(*role) && resume_lower.contains(*role))
        {
            log::trace!("Role keyword '{}' shared by title and resume", role);
            score += ROLE_BONUS;
        }

        score.clamp(0.0, 1.0)
    }

    fn word_credit(word: &str, resume_words: &HashSet<&str>) -> f64 {
        if resume_words.contains(word) {
            return EXACT_WORD_CREDIT;
        }

        let partial = resume_words.iter().any(|resume_word| {
            resume_word.contains(word)
                || (resume_word.len() >= MIN_WORD_CHARS && word.contains(resume_word))
        });

        if partial {
            PARTIAL_WORD_CREDIT
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_significant_words() {
        assert_eq!(
            TitleRelevanceScorer::significant_words("Sr. UI/UX Designer (Remote) - EU"),
            vec!["designer", "remote"]
        );
    }

    #[test]
    fn test_full_title_match() {
        let score = TitleRelevanceScorer::new().score(
            "python django flask aws docker senior software engineer",
            "Senior Software Engineer",
        );
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_partial_word_match() {
        // "developer" is a substring of "developers"; "mobile" is absent.
        let score = TitleRelevanceScorer::new().score("led a team of developers", "Mobile Developer");
        assert!((score - (0.4 + ROLE_BONUS)).abs() < 1e-12);
    }

    #[test]
    fn test_base_score_floor() {
        let score = TitleRelevanceScorer::new().score("gardening and carpentry", "Staff Accountant");
        assert_eq!(score, TITLE_BASE_SCORE);
    }

    #[test]
    fn test_untitled_posting() {
        assert_eq!(TitleRelevanceScorer::new().score("rust developer", ""), TITLE_BASE_SCORE);
    }

    #[test]
    fn test_empty_resume() {
        assert_eq!(TitleRelevanceScorer::new().score("", "Rust Developer"), 0.0);
    }

    #[test]
    fn test_role_bonus_requires_both_sides() {
        let scorer = TitleRelevanceScorer::new();
        let without = scorer.score("data pipelines", "Data Analyst");
        let with = scorer.score("data pipelines analyst", "Data Analyst");
        assert!((without - 0.65).abs() < 1e-12);
        assert_eq!(with, 1.0);
    }
}
