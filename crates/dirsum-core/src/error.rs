//! Error types for scanning and hashing

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a whole scan
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root folder is missing, not a directory, or cannot be listed
    #[error("cannot access folder {}: {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The reporting channel could not be written
    #[error("failed to write report: {0}")]
    Report(#[source] io::Error),

    /// The background walk task did not complete
    #[error("directory walk aborted: {0}")]
    Task(String),
}

impl ScanError {
    /// Build an access error for `path`
    #[must_use]
    pub fn access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Access {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur while hashing a single file
#[derive(Debug, Error)]
pub enum HashError {
    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("digest computation failed: {cause}")]
    Computation { path: PathBuf, cause: String },
}

impl HashError {
    /// Path of the file that failed
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Computation { path, .. } => path,
        }
    }
}
