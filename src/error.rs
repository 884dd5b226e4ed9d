//! Error taxonomy for a chart job
//!
//! Every failure is local to one job and carries the file it concerns.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} line {line}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("{} contains no records", path.display())]
    EmptyInput { path: PathBuf },

    #[error("{} line {line}: record at depths ({depth_a}, {depth_b}) has zero total games", path.display())]
    ZeroTotal {
        path: PathBuf,
        line: usize,
        depth_a: u32,
        depth_b: u32,
    },

    /// Zero-total record in a dataset that was not read from a file
    #[error("{} record #{record}: depths ({depth_a}, {depth_b}) have zero total games", path.display())]
    ZeroTotalRecord {
        path: PathBuf,
        record: usize,
        depth_a: u32,
        depth_b: u32,
    },

    #[error("{}: dimension {dimension} exceeds the {max} columns the plot can draw", path.display())]
    TooWide {
        path: PathBuf,
        dimension: u64,
        max: u32,
    },

    #[error("failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    #[error("failed to load font {}: {reason}", path.display())]
    Font { path: PathBuf, reason: String },

    #[error("invalid job list {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

/// Coarse category of a failure, used in job reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Read,
    Parse,
    Validate,
    Write,
    Config,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ErrorKind::Read => "read",
            ErrorKind::Parse => "parse",
            ErrorKind::Validate => "validate",
            ErrorKind::Write => "write",
            ErrorKind::Config => "config",
        };
        f.write_str(label)
    }
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChartError::Read { .. } => ErrorKind::Read,
            ChartError::Parse { .. } => ErrorKind::Parse,
            ChartError::EmptyInput { .. }
            | ChartError::ZeroTotal { .. }
            | ChartError::ZeroTotalRecord { .. }
            | ChartError::TooWide { .. } => ErrorKind::Validate,
            ChartError::Write { .. } => ErrorKind::Write,
            ChartError::Font { .. } | ChartError::Config { .. } => ErrorKind::Config,
        }
    }
}
