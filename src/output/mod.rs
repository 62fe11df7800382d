//! Report structures and formatters

pub mod formatter;
pub mod report;

pub use formatter::{formatter_for, ConsoleFormatter, JsonFormatter, OutputFormatter};
pub use report::{KeywordReport, RankingReport, ReportMetadata, ScoreReport};
