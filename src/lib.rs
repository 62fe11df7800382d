//! Job matcher library: scores how relevant a resume is to job postings

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod ranking;

pub use config::Config;
pub use error::{MatcherError, Result};
pub use processing::analyzer::{JobMatcher, KeywordGap, MatchStrategy};
pub use processing::document::{ComponentScores, JobPosting, MatchResult};
pub use processing::profile::{ComponentWeights, MatchMode, MatchingProfile};
pub use ranking::{rank_jobs, RankedJob};
