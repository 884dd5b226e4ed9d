//! Chart jobs and the TOML job list
//!
//! ```toml
//! [[job]]
//! title = "Connect 4"
//! input = "../game/connect4.csv"
//! output = "connect4.png"
//! ```
//!
//! Relative paths are used as given, i.e. against the working directory.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ChartError;

/// One chart to produce: a title, the outcome table and the PNG destination
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Job {
    pub title: String,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Job {
    pub fn new(
        title: impl Into<String>,
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            title: title.into(),
            input: input.into(),
            output: output.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobList {
    #[serde(rename = "job", default)]
    pub jobs: Vec<Job>,
}

impl JobList {
    /// Load and validate a job list file
    pub fn from_file(path: &Path) -> Result<Self, ChartError> {
        let content = fs::read_to_string(path).map_err(|source| ChartError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Parse and validate; `source` only names the file in errors
    pub fn from_toml_str(content: &str, source: &Path) -> Result<Self, ChartError> {
        let list: JobList = toml::from_str(content).map_err(|e| ChartError::Config {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
        list.validate(source)?;
        Ok(list)
    }

    /// Jobs run concurrently, so no two may write the same file
    pub fn validate(&self, source: &Path) -> Result<(), ChartError> {
        let config_err = |reason: String| ChartError::Config {
            path: source.to_path_buf(),
            reason,
        };

        if self.jobs.is_empty() {
            return Err(config_err("no [[job]] entries".to_string()));
        }

        let mut outputs = HashSet::new();
        for job in &self.jobs {
            if !outputs.insert(job.output.as_path()) {
                return Err(config_err(format!(
                    "output {} is used by more than one job",
                    job.output.display()
                )));
            }
        }
        Ok(())
    }
}
