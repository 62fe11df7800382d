//! Text processing and scoring module

pub mod analyzer;
pub mod ats_matcher;
pub mod document;
pub mod keywords;
pub mod profile;
pub mod similarity;
pub mod text_processor;
#[cfg(feature = "tfidf")]
pub mod tfidf;
pub mod title_matcher;
pub mod vocabulary;
