//! Job matcher: score and rank job postings against a resume

use anyhow::{bail, Context};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use job_matcher::cli::{self, Cli, Commands, ConfigAction};
use job_matcher::config::{Config, OutputFormat};
use job_matcher::input::InputManager;
use job_matcher::output::{formatter_for, KeywordReport, RankingReport, ReportMetadata, ScoreReport};
use job_matcher::processing::profile::MatchMode;
use job_matcher::processing::text_processor::jaccard_similarity;
use job_matcher::ranking::JobRanker;
use job_matcher::{JobMatcher, MatcherError};
use log::{error, info, warn};
use std::path::PathBuf;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config) {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path).with_context(|| format!("reading {}", path.display())),
        None => Ok(Config::load()?),
    }
}

fn output_format(requested: Option<&str>, config: &Config) -> anyhow::Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(|e| anyhow::anyhow!(MatcherError::InvalidInput(e))),
        None => Ok(config.output.format),
    }
}

fn run_command(command: Commands, mut config: Config, config_path: Option<PathBuf>) -> anyhow::Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            title,
            mode,
            strategy,
            output,
        } => {
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| MatcherError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, &["json", "txt", "md"])
                .map_err(|e| MatcherError::InvalidInput(format!("Job file: {}", e)))?;

            if let Some(mode) = mode {
                config.scoring.mode = MatchMode::parse(&mode);
            }
            if let Some(strategy) = strategy {
                config.scoring.strategy = cli::parse_strategy(&strategy).map_err(MatcherError::InvalidInput)?;
            }
            let format = output_format(output.as_deref(), &config)?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.load_resume(&resume)?;
            let mut jobs = input_manager.load_jobs(&job, title.as_deref())?;
            if jobs.is_empty() {
                bail!("No job postings found in {}", job.display());
            }
            if jobs.len() > 1 {
                warn!("{} contains {} postings, scoring the first; use `rank` for all", job.display(), jobs.len());
            }
            let posting = jobs.swap_remove(0);

            let matcher = JobMatcher::from_config(&config)?;
            info!("Scoring {} against {}", resume.display(), posting.label());
            let result = matcher.score(&resume_text, &posting);
            let gap = matcher.keyword_gap(&resume_text, &posting);

            let metadata = ReportMetadata::new(resume.display().to_string(), matcher.profile().mode, matcher.strategy_name());
            let term_overlap = jaccard_similarity(&resume_text, &posting.description);
            let report = ScoreReport::new(metadata, posting, result, Some(gap)).with_term_overlap(term_overlap);

            let formatter = formatter_for(format, config.output.color_output);
            println!("{}", formatter.format_score(&report)?);
        }

        Commands::Rank {
            resume,
            jobs,
            threshold,
            top,
            mode,
            output,
        } => {
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| MatcherError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&jobs, &["json"])
                .map_err(|e| MatcherError::InvalidInput(format!("Jobs file: {}", e)))?;

            if let Some(mode) = mode {
                config.scoring.mode = MatchMode::parse(&mode);
            }
            if let Some(threshold) = threshold {
                config.output.threshold = threshold;
            }
            if let Some(top) = top {
                config.output.top_n = top;
            }
            config.validate()?;
            let format = output_format(output.as_deref(), &config)?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.load_resume(&resume)?;
            let postings = input_manager.load_jobs(&jobs, None)?;
            info!("Ranking {} postings", postings.len());

            let matcher = JobMatcher::from_config(&config)?;
            let mut ranker = JobRanker::new(&matcher)
                .with_threshold(config.output.threshold)
                .with_top_n(config.output.top_n);

            let progress = (format == OutputFormat::Console).then(|| {
                let pb = ProgressBar::new(postings.iter().filter(|job| job.has_description()).count() as u64);
                pb.set_style(ProgressStyle::default_bar());
                pb
            });
            if let Some(pb) = &progress {
                ranker = ranker.with_progress(pb.clone());
            }

            let matches = ranker.rank(&resume_text, &postings);
            if let Some(pb) = progress {
                pb.finish_and_clear();
            }

            let report = RankingReport {
                metadata: ReportMetadata::new(resume.display().to_string(), matcher.profile().mode, matcher.strategy_name()),
                threshold: config.output.threshold,
                total_jobs: postings.len(),
                matches,
            };

            let formatter = formatter_for(format, config.output.color_output);
            println!("{}", formatter.format_ranking(&report)?);
        }

        Commands::Keywords {
            file,
            min_length,
            limit,
            output,
        } => {
            cli::validate_file_extension(&file, &["txt", "md"])
                .map_err(|e| MatcherError::InvalidInput(format!("Input file: {}", e)))?;

            if let Some(min_length) = min_length {
                config.keywords.min_length = min_length;
            }
            if let Some(limit) = limit {
                config.keywords.max_keywords = limit;
            }
            let format = output_format(output.as_deref(), &config)?;

            let text = InputManager::new().read_text(&file)?;
            let extractor = job_matcher::processing::keywords::KeywordExtractor::from_config(&config.keywords)?;
            let report = KeywordReport::new(file.display().to_string(), extractor.extract_weighted(&text));

            let formatter = formatter_for(format, config.output.color_output);
            println!("{}", formatter.format_keywords(&report)?);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config)?;
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                match &config_path {
                    Some(path) => default_config.save_to(path)?,
                    None => default_config.save()?,
                }
                println!("Configuration reset to defaults");
            }

            Some(ConfigAction::Path) => {
                let path = config_path.unwrap_or_else(Config::config_path);
                println!("{}", path.display());
            }
        },
    }

    Ok(())
}
