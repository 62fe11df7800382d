//! CLI interface for the job matcher

use crate::config::{OutputFormat, StrategyKind};
use clap::{Parser, Subcommand};
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "job-matcher")]
#[command(about = "Score how relevant a resume is to job postings")]
#[command(long_about = "Score resumes against job postings using text similarity, ATS-style keyword overlap and job title relevance")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a single job posting
    Score {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job posting (JSON, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Job title for TXT/MD postings
        #[arg(short, long)]
        title: Option<String>,

        /// Matching mode: strict, standard, lenient, very_lenient
        #[arg(short, long)]
        mode: Option<String>,

        /// Scoring strategy: weighted, keyword_title
        #[arg(short, long)]
        strategy: Option<String>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Rank a list of job postings for a resume
    Rank {
        /// Path to resume file (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to a JSON array of job postings
        #[arg(short, long)]
        jobs: PathBuf,

        /// Minimum score to include a posting
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Show at most this many postings
        #[arg(long)]
        top: Option<usize>,

        /// Matching mode: strict, standard, lenient, very_lenient
        #[arg(short, long)]
        mode: Option<String>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Extract weighted keywords from a document
    Keywords {
        /// Path to a job description or resume (TXT, MD)
        #[arg(short, long)]
        file: PathBuf,

        /// Minimum keyword length for non-technical words
        #[arg(long)]
        min_length: Option<usize>,

        /// Maximum number of keywords
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Reset configuration to defaults
    Reset,
    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

/// Parse and validate scoring strategy
pub fn parse_strategy(strategy: &str) -> Result<StrategyKind, String> {
    match strategy.to_lowercase().replace('-', "_").as_str() {
        "weighted" => Ok(StrategyKind::Weighted),
        "keyword_title" | "simple" => Ok(StrategyKind::KeywordTitle),
        _ => Err(format!("Invalid strategy: {}. Supported: weighted, keyword_title", strategy)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!(parse_strategy("keyword-title"), Ok(StrategyKind::KeywordTitle));
        assert_eq!(parse_strategy("weighted"), Ok(StrategyKind::Weighted));
        assert!(parse_strategy("llm").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.MD"), &["txt", "md"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.pdf"), &["txt", "md"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["txt"]).is_err());
    }

    #[test]
    fn test_cli_parses_rank() {
        let cli = Cli::try_parse_from([
            "job-matcher", "rank", "--resume", "cv.txt", "--jobs", "jobs.json", "--threshold", "0.4", "--top", "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Rank { threshold, top, .. } => {
                assert_eq!(threshold, Some(0.4));
                assert_eq!(top, Some(5));
            }
            _ => panic!("expected rank command"),
        }
    }
}
