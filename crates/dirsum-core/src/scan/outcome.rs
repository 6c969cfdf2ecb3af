//! Per-file results and run totals

use std::fmt;
use std::ops::AddAssign;
use std::path::{Path, PathBuf};

use crate::error::HashError;

/// A successfully hashed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRecord {
    pub digest: String,
    pub path: PathBuf,
}

/// A file that could not be hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileError {
    pub path: PathBuf,
    pub cause: String,
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.cause)
    }
}

impl From<HashError> for FileError {
    fn from(err: HashError) -> Self {
        Self {
            path: err.path().to_path_buf(),
            cause: err.to_string(),
        }
    }
}

/// Result of attempting one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Hashed(HashRecord),
    Failed(FileError),
}

impl FileOutcome {
    /// Path of the file this outcome is about
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Hashed(record) => &record.path,
            Self::Failed(error) => &error.path,
        }
    }
}

/// Totals for a scan
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub hashed: usize,
    pub failed: usize,
    pub walk_issues: usize,
}

impl ScanSummary {
    /// Count one file outcome
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Hashed(_) => self.hashed += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// Number of files attempted
    #[must_use]
    pub fn files(&self) -> usize {
        self.hashed + self.failed
    }
}

impl AddAssign for ScanSummary {
    fn add_assign(&mut self, other: Self) {
        self.hashed += other.hashed;
        self.failed += other.failed;
        self.walk_issues += other.walk_issues;
    }
}
