//! Input loading module
//! Reads resumes and job postings from disk

pub mod file_detector;
pub mod manager;

pub use manager::InputManager;
