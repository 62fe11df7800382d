//! Input manager for resumes and job postings

use crate::error::{MatcherError, Result};
use crate::input::file_detector::FileType;
use crate::processing::document::JobPosting;
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// A job file holds either one posting or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum JobFile {
    Many(Vec<JobPosting>),
    One(JobPosting),
}

pub struct InputManager {
    cache: HashMap<String, String>,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Read a resume from a `.txt` or `.md` file.
    pub fn load_resume(&mut self, path: &Path) -> Result<String> {
        match self.detect_file_type(path)? {
            file_type if file_type.is_plain_text() => {
                info!("Reading resume: {}", path.display());
                self.read_text(path)
            }
            _ => Err(MatcherError::UnsupportedFormat(format!(
                "Resume must be a .txt or .md file: {}",
                path.display()
            ))),
        }
    }

    /// Read job postings.
    ///
    /// A `.json` file holds one posting object or an array of them. A `.txt`
    /// or `.md` file is a single description; its title is `title` or, when
    /// absent, derived from the file name.
    pub fn load_jobs(&mut self, path: &Path, title: Option<&str>) -> Result<Vec<JobPosting>> {
        let file_type = self.detect_file_type(path)?;
        let content = self.read_text(path)?;

        match file_type {
            FileType::Json => {
                info!("Parsing job postings: {}", path.display());
                let jobs = match serde_json::from_str::<JobFile>(&content)? {
                    JobFile::Many(jobs) => jobs,
                    JobFile::One(job) => vec![job],
                };
                Ok(jobs)
            }
            FileType::Text | FileType::Markdown => {
                let title = match title {
                    Some(title) => title.to_string(),
                    None => title_from_file_name(path),
                };
                Ok(vec![JobPosting::new(title, content)])
            }
            FileType::Unknown => Err(MatcherError::UnsupportedFormat(format!(
                "Unsupported job file type: {}",
                path.display()
            ))),
        }
    }

    pub fn read_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if let Some(cached_text) = self.cache.get(&path_str) {
            info!("Using cached text for: {}", path.display());
            return Ok(cached_text.clone());
        }

        if !path.exists() {
            return Err(MatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = std::fs::read_to_string(path)?;

        self.cache.insert(path_str, text.clone());

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        FileType::from_path(path).ok_or_else(|| {
            MatcherError::InvalidInput(format!("File has no extension: {}", path.display()))
        })
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

/// "senior_rust-engineer.md" becomes "senior rust engineer".
fn title_from_file_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.replace(['_', '-'], " "))
        .unwrap_or_default()
}
