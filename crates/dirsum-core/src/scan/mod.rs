//! Scan orchestrator: walk once, then hash every discovered file
//!
//! Hashing runs on the blocking pool with at most `jobs` files in flight.
//! Results are delivered in discovery order, so the manifest for an
//! unchanged tree is identical from run to run.

mod outcome;

use std::path::PathBuf;

use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::error::{HashError, ScanError};
use crate::hash::{compute_file_hash, Algorithm};
use crate::report::Reporter;
use crate::scanner::Walker;

pub use outcome::{FileError, FileOutcome, HashRecord, ScanSummary};

/// Configuration for a single scan run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub algorithm: Algorithm,
    /// Upper bound on concurrent hash computations and walker threads
    pub jobs: usize,
}

impl ScanConfig {
    /// Create a new configuration using one job per CPU
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, algorithm: Algorithm) -> Self {
        Self {
            root: root.into(),
            algorithm,
            jobs: num_cpus::get().max(1),
        }
    }

    /// Set the concurrency limit (at least 1)
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }
}

/// Scan the configured root and report every file
///
/// Per-file failures and unreadable subdirectories are reported and counted,
/// never returned.
///
/// # Errors
/// Returns `ScanError::Access` if the root cannot be used (nothing is
/// reported in that case) and `ScanError::Report` if the reporter fails.
pub async fn scan<R: Reporter>(
    config: &ScanConfig,
    reporter: &mut R,
) -> Result<ScanSummary, ScanError> {
    info!(
        "Scanning {} with {} ({} jobs)",
        config.root.display(),
        config.algorithm,
        config.jobs
    );

    let walker = Walker::new(&config.root).with_threads(config.jobs);
    let walk = tokio::task::spawn_blocking(move || walker.walk())
        .await
        .map_err(|e| ScanError::Task(e.to_string()))??;

    info!("Found {} files to hash", walk.files.len());

    let mut summary = ScanSummary::default();
    for issue in &walk.issues {
        reporter.walk_issue(issue).map_err(ScanError::Report)?;
        summary.walk_issues += 1;
    }

    summary += hash_files(walk.files, config.algorithm, config.jobs, reporter).await?;

    info!(
        "✓ Scan completed: {} hashed, {} failed, {} walk issues",
        summary.hashed, summary.failed, summary.walk_issues
    );
    Ok(summary)
}

/// Hash `files` with bounded concurrency and report each outcome in order
///
/// A file that disappeared or became unreadable since discovery is reported
/// as a `FileError`; the remaining files are still hashed.
///
/// # Errors
/// Returns `ScanError::Report` if the reporter fails.
pub async fn hash_files<R: Reporter>(
    files: Vec<PathBuf>,
    algorithm: Algorithm,
    jobs: usize,
    reporter: &mut R,
) -> Result<ScanSummary, ScanError> {
    let mut outcomes = stream::iter(files)
        .map(|path| hash_one(path, algorithm))
        .buffered(jobs.max(1));

    let mut summary = ScanSummary::default();
    while let Some(outcome) = outcomes.next().await {
        summary.record(&outcome);
        reporter.file(&outcome).map_err(ScanError::Report)?;
    }
    Ok(summary)
}

async fn hash_one(path: PathBuf, algorithm: Algorithm) -> FileOutcome {
    let task_path = path.clone();
    let result = tokio::task::spawn_blocking(move || compute_file_hash(&task_path, algorithm))
        .await
        .unwrap_or_else(|e| {
            Err(HashError::Computation {
                path: path.clone(),
                cause: e.to_string(),
            })
        });

    match result {
        Ok(digest) => {
            debug!("{} {}", digest, path.display());
            FileOutcome::Hashed(HashRecord { digest, path })
        }
        Err(err) => {
            warn!("Failed to hash {}: {}", path.display(), err);
            FileOutcome::Failed(FileError::from(err))
        }
    }
}

#[cfg(test)]
mod tests;
