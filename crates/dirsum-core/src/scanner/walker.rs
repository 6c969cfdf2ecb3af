//! File walker: Discovers regular files in a directory tree

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use ignore::{DirEntry, WalkBuilder, WalkState};
use tracing::debug;

use super::{EntryKind, WalkIssue};
use crate::error::ScanError;

/// Result of walking a tree
#[derive(Debug, Default)]
pub struct Walk {
    /// Regular files, sorted by path
    pub files: Vec<PathBuf>,
    /// Unreadable directories and skipped entries, sorted by path
    pub issues: Vec<WalkIssue>,
}

/// What a single walker callback found
enum Found {
    File(PathBuf),
    Issue(WalkIssue),
}

/// Walker for discovering every regular file below a root
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
    threads: usize,
}

impl Walker {
    /// Create a new walker for the given root directory
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            threads: 0,
        }
    }

    /// Set the number of threads listing directories (0 picks automatically)
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Get the root directory being walked
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check that the root exists, is a directory and can be listed
    ///
    /// # Errors
    /// Returns `ScanError::Access` naming the root otherwise.
    pub fn check_root(&self) -> Result<(), ScanError> {
        let metadata =
            fs::metadata(&self.root).map_err(|e| ScanError::access(&self.root, e))?;
        if !metadata.is_dir() {
            return Err(ScanError::access(
                &self.root,
                io::Error::other("not a directory"),
            ));
        }
        fs::read_dir(&self.root).map_err(|e| ScanError::access(&self.root, e))?;
        Ok(())
    }

    /// Walk the tree and collect its regular files
    ///
    /// Sibling directories are listed in parallel. A directory that cannot be
    /// read becomes a `WalkIssue` and the rest of the tree is still walked.
    ///
    /// # Errors
    /// Returns `ScanError::Access` if the root itself is not usable.
    pub fn walk(&self) -> Result<Walk, ScanError> {
        self.check_root()?;

        let (tx, rx) = mpsc::channel();
        WalkBuilder::new(self.start_path())
            .standard_filters(false)
            .follow_links(false)
            .threads(self.threads)
            .build_parallel()
            .run(|| {
                let tx = tx.clone();
                let root = self.root.clone();
                Box::new(move |result| {
                    if let Some(found) = classify(result, &root) {
                        // The receiver outlives the walk
                        let _ = tx.send(found);
                    }
                    WalkState::Continue
                })
            });
        drop(tx);

        let mut walk = Walk::default();
        for found in rx {
            match found {
                Found::File(path) => walk.files.push(path),
                Found::Issue(issue) => {
                    debug!("Walk issue: {}", issue);
                    walk.issues.push(issue);
                }
            }
        }
        walk.files.sort();
        walk.issues.sort_by(|a, b| a.path().cmp(b.path()));

        debug!(
            "Walked {}: {} files, {} issues",
            self.root.display(),
            walk.files.len(),
            walk.issues.len()
        );
        Ok(walk)
    }

    /// A trailing separator makes a symlinked root resolve to its directory
    fn start_path(&self) -> PathBuf {
        let is_link = fs::symlink_metadata(&self.root).is_ok_and(|m| m.file_type().is_symlink());
        if is_link {
            self.root.join("")
        } else {
            self.root.clone()
        }
    }
}

fn classify(result: Result<DirEntry, ignore::Error>, root: &Path) -> Option<Found> {
    let entry = match result {
        Ok(entry) => entry,
        Err(err) => return Some(Found::Issue(unreadable(&err, root))),
    };

    if entry.depth() == 0 {
        return None;
    }
    let file_type = entry.file_type()?;
    if file_type.is_dir() {
        None
    } else if file_type.is_file() {
        Some(Found::File(entry.into_path()))
    } else {
        Some(Found::Issue(WalkIssue::Skipped {
            path: entry.into_path(),
            kind: EntryKind::of(file_type),
        }))
    }
}

/// Errors without a path are attributed to the root
fn unreadable(err: &ignore::Error, root: &Path) -> WalkIssue {
    let (path, cause) = split_error(err);
    WalkIssue::Unreadable {
        path: path.unwrap_or(root).to_path_buf(),
        cause,
    }
}

/// Separate the offending path from the underlying cause
fn split_error(err: &ignore::Error) -> (Option<&Path>, String) {
    match err {
        ignore::Error::WithPath { path, err } => (Some(path.as_path()), err.to_string()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            split_error(err)
        }
        ignore::Error::Loop { child, .. } => (Some(child.as_path()), err.to_string()),
        ignore::Error::Partial(errs) => match errs.first() {
            Some(first) => split_error(first),
            None => (None, err.to_string()),
        },
        other => (None, other.to_string()),
    }
}
