//! dirsum-core: Core library for recursive checksum manifests
//!
//! Walks a directory tree, hashes every regular file beneath it and reports
//! `digest  path` lines in the format produced by `md5sum` and `sha256sum`.
//!
//! # Supported algorithms
//!
//! - **md5** - 32 hex characters
//! - **sha256** - 64 hex characters
//!
//! A failure on one file (or one unreadable directory) is reported and the
//! scan moves on. Only an inaccessible root aborts the run.

pub mod error;
pub mod hash;
pub mod report;
pub mod scan;
pub mod scanner;

// Re-export commonly used types
pub use error::{HashError, ScanError};
pub use hash::{Algorithm, compute_file_hash};
pub use report::{ManifestWriter, Reporter};
pub use scan::{FileError, FileOutcome, HashRecord, ScanConfig, ScanSummary, hash_files, scan};
pub use scanner::{EntryKind, Walk, WalkIssue, Walker};

/// Program name used as the prefix of diagnostic lines
pub const PROGRAM: &str = "dirsum";
