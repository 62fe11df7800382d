//! Scoring one resume against many postings

use crate::processing::analyzer::JobMatcher;
use crate::processing::document::{JobPosting, MatchResult};
use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedJob {
    /// 1-based position after sorting.
    pub rank: usize,
    pub job: JobPosting,
    pub result: MatchResult,
}

/// Scores postings in parallel and orders them by descending score.
pub struct JobRanker<'a> {
    matcher: &'a JobMatcher,
    threshold: f64,
    top_n: Option<usize>,
    progress: Option<ProgressBar>,
}

impl<'a> JobRanker<'a> {
    pub fn new(matcher: &'a JobMatcher) -> Self {
        Self {
            matcher,
            threshold: 0.0,
            top_n: None,
            progress: None,
        }
    }

    /// Drop postings scoring below `threshold`.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    /// Advance `progress` once per scored posting.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Postings without a description are skipped. Ties keep input order.
    pub fn rank(&self, resume_text: &str, jobs: &[JobPosting]) -> Vec<RankedJob> {
        let scored: Vec<(usize, MatchResult)> = jobs
            .par_iter()
            .enumerate()
            .filter(|(_, job)| job.has_description())
            .map(|(index, job)| {
                let result = self.matcher.score(resume_text, job);
                if let Some(progress) = &self.progress {
                    progress.inc(1);
                }
                (index, result)
            })
            .collect();

        let skipped = jobs.len() - scored.len();
        if skipped > 0 {
            log::info!("Skipped {} postings without a description", skipped);
        }

        let mut kept: Vec<(usize, MatchResult)> = scored
            .into_iter()
            .filter(|(_, result)| result.score >= self.threshold)
            .collect();
        kept.sort_by(|a, b| b.1.score.total_cmp(&a.1.score));

        if let Some(top_n) = self.top_n {
            kept.truncate(top_n);
        }

        kept.into_iter()
            .enumerate()
            .map(|(position, (index, result))| RankedJob {
                rank: position + 1,
                job: jobs[index].clone(),
                result,
            })
            .collect()
    }
}

/// Rank `jobs` for `resume_text`, keeping scores at or above `threshold`.
pub fn rank_jobs(matcher: &JobMatcher, resume_text: &str, jobs: &[JobPosting], threshold: f64) -> Vec<RankedJob> {
    JobRanker::new(matcher).with_threshold(threshold).rank(resume_text, jobs)
}
