//! Output formatters for console and JSON

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{score_label, KeywordReport, RankingReport, ReportMetadata, ScoreReport};
use crate::processing::document::MatchResult;
use colored::{Color, Colorize};

/// Trait for rendering reports
pub trait OutputFormatter {
    fn format_score(&self, report: &ScoreReport) -> Result<String>;
    fn format_ranking(&self, report: &RankingReport) -> Result<String>;
    fn format_keywords(&self, report: &KeywordReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Human-readable console output, optionally colored
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON output for piping into other tools
pub struct JsonFormatter {
    pretty: bool,
}

/// Formatter for the requested format.
pub fn formatter_for(format: OutputFormat, use_colors: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".blue().bold(), title.blue().bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn score_color(score: f64) -> Color {
        match score_label(score) {
            "EXCELLENT" => Color::Green,
            "STRONG" => Color::BrightGreen,
            "MODERATE" => Color::Yellow,
            "WEAK" => Color::BrightRed,
            _ => Color::Red,
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let badge = format!("{:.3} [{}]", score, score_label(score));
        if self.use_colors {
            badge.color(Self::score_color(score)).bold().to_string()
        } else {
            badge
        }
    }

    fn format_metadata(&self, metadata: &ReportMetadata) -> String {
        format!(
            "Generated: {} | Resume: {} | Mode: {} | Strategy: {}\n",
            metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            metadata.resume,
            metadata.mode,
            metadata.strategy
        )
    }

    fn format_components(&self, result: &MatchResult) -> String {
        let vector = match result.components.vector {
            Some(score) => format!("{:.3}", score),
            None => self.colorize("n/a", Color::BrightBlack),
        };
        format!(
            "  Vector similarity: {}\n  Keyword overlap:   {:.3}\n  Title relevance:   {:.3}\n",
            vector, result.components.keyword, result.components.title
        )
    }

    fn format_keyword_list(&self, label: &str, keywords: &[String], color: Color) -> String {
        if keywords.is_empty() {
            return String::new();
        }
        format!("  {}: {}\n", label, self.colorize(&keywords.join(", "), color))
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_score(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();
        let result = &report.result;

        output.push_str(&self.format_header("JOB MATCH SCORE"));
        output.push_str(&self.format_metadata(&report.metadata));
        output.push_str(&format!("Job: {}\n", report.job.label()));
        output.push_str(&format!("\nScore: {}\n", self.format_score_badge(result.score)));

        output.push_str(&self.format_header("Components"));
        output.push_str(&self.format_components(result));
        if let Some(term_overlap) = report.term_overlap {
            output.push_str(&format!("  Term overlap:      {:.3} (Jaccard, not scored)\n", term_overlap));
        }

        output.push_str(&self.format_header("Keywords"));
        output.push_str(&self.format_keyword_list("Matching", &result.matching_keywords, Color::Green));
        output.push_str(&self.format_keyword_list("Partial", &report.partial_keywords, Color::Yellow));
        output.push_str(&self.format_keyword_list("Missing", &result.missing_keywords, Color::Red));

        if result.degraded {
            output.push_str(&format!(
                "\n{}\n",
                self.colorize("Vector backend unavailable: scored on keywords and title only", Color::Yellow)
            ));
        }

        Ok(output)
    }

    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("JOB RANKING"));
        output.push_str(&self.format_metadata(&report.metadata));
        output.push_str(&format!(
            "{} of {} postings scored at least {:.2}\n\n",
            report.matches.len(),
            report.total_jobs,
            report.threshold
        ));

        for ranked in &report.matches {
            output.push_str(&format!(
                "{:>3}. {}  {}\n",
                ranked.rank,
                self.format_score_badge(ranked.result.score),
                ranked.job.label()
            ));
            if let Some(location) = &ranked.job.location {
                output.push_str(&format!("     {}\n", location));
            }
            if !ranked.result.missing_keywords.is_empty() {
                output.push_str(&format!(
                    "     missing: {}\n",
                    self.colorize(&ranked.result.missing_keywords.join(", "), Color::Red)
                ));
            }
        }

        if report.matches.is_empty() {
            output.push_str(&self.colorize("No postings met the threshold\n", Color::Yellow));
        }

        Ok(output)
    }

    fn format_keywords(&self, report: &KeywordReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("KEYWORDS"));
        output.push_str(&format!("Source: {}\n\n", report.source));
        for (index, keyword) in report.keywords.iter().enumerate() {
            output.push_str(&format!(
                "{:>3}. {:<30} {}\n",
                index + 1,
                self.colorize(&keyword.keyword, Color::Cyan),
                keyword.weight
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn render<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_score(&self, report: &ScoreReport) -> Result<String> {
        self.render(report)
    }

    fn format_ranking(&self, report: &RankingReport) -> Result<String> {
        self.render(report)
    }

    fn format_keywords(&self, report: &KeywordReport) -> Result<String> {
        self.render(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::document::JobPosting;
    use crate::processing::profile::MatchMode;

    fn report() -> ScoreReport {
        let mut result = MatchResult::no_signal("weighted", false, true);
        result.score = 0.82;
        result.matching_keywords = vec!["rust".to_string()];
        result.missing_keywords = vec!["kafka".to_string()];
        ScoreReport::new(
            ReportMetadata::new("resume.txt", MatchMode::Standard, "weighted"),
            JobPosting::new("Rust Engineer", "desc").with_company("Acme"),
            result,
            None,
        )
    }

    #[test]
    fn test_console_score_plain() {
        let output = ConsoleFormatter::new(false).format_score(&report()).unwrap();
        assert!(output.contains("Rust Engineer @ Acme"));
        assert!(output.contains("0.820 [STRONG]"));
        assert!(output.contains("Missing: kafka"));
        assert!(output.contains("Vector similarity: n/a"));
        assert!(output.contains("Vector backend unavailable"));
    }

    #[test]
    fn test_console_shows_term_overlap() {
        let plain = ConsoleFormatter::new(false).format_score(&report()).unwrap();
        assert!(!plain.contains("Term overlap"));

        let with_overlap = ConsoleFormatter::new(false)
            .format_score(&report().with_term_overlap(0.25))
            .unwrap();
        assert!(with_overlap.contains("Term overlap:      0.250"));
    }

    #[test]
    fn test_console_ranking_lines() {
        let mut result = MatchResult::no_signal("weighted", true, false);
        result.score = 0.5;
        result.missing_keywords = vec!["go".to_string()];
        let mut job = JobPosting::new("Backend Engineer", "desc");
        job.location = Some("Remote".to_string());
        let report = RankingReport {
            metadata: ReportMetadata::new("resume.txt", MatchMode::Standard, "weighted"),
            threshold: 0.4,
            total_jobs: 2,
            matches: vec![crate::ranking::RankedJob { rank: 1, job, result }],
        };

        let output = ConsoleFormatter::new(false).format_ranking(&report).unwrap();
        assert!(output.contains("1 of 2 postings scored at least 0.40\n"));
        assert!(output.contains("  1. 0.500 [MODERATE]  Backend Engineer\n"));
        assert!(output.contains("     Remote\n"));
        assert!(output.contains("     missing: go\n"));
    }

    #[test]
    fn test_json_score_parses_back() {
        let output = JsonFormatter::new(false).format_score(&report()).unwrap();
        let parsed: ScoreReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.result.score, 0.82);
        assert_eq!(parsed.metadata.mode, MatchMode::Standard);
    }

    #[test]
    fn test_formatter_for() {
        assert_eq!(formatter_for(OutputFormat::Json, true).supports_format(), OutputFormat::Json);
        assert_eq!(formatter_for(OutputFormat::Console, false).supports_format(), OutputFormat::Console);
    }
}
