//! Reporting channel for scan results
//!
//! The orchestrator drives a single `Reporter` from one task, so every line
//! is written whole and never interleaved with another.
//!
//! Paths are written as the bytes the filesystem returned. A manifest line
//! whose name contains a backslash or a newline uses the `md5sum` escape
//! form: the line starts with `\` and the name spells them `\\` and `\n`.

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

use crate::scan::FileOutcome;
use crate::scanner::WalkIssue;
use crate::PROGRAM;

/// Receives scan results as they become available
pub trait Reporter {
    /// Report the outcome of hashing one file
    ///
    /// # Errors
    /// Returns an error if the outcome cannot be written.
    fn file(&mut self, outcome: &FileOutcome) -> io::Result<()>;

    /// Report a non-fatal problem found while walking
    ///
    /// # Errors
    /// Returns an error if the issue cannot be written.
    fn walk_issue(&mut self, issue: &WalkIssue) -> io::Result<()>;
}

/// Writes `digest  path` lines to `out` and diagnostics to `err`
///
/// Both writers are flushed after every line so output already produced
/// survives an interrupted run.
#[derive(Debug)]
pub struct ManifestWriter<O, E> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> ManifestWriter<O, E> {
    #[must_use]
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Recover the underlying writers
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Reporter for ManifestWriter<O, E> {
    fn file(&mut self, outcome: &FileOutcome) -> io::Result<()> {
        match outcome {
            FileOutcome::Hashed(record) => {
                let name = path_bytes(&record.path);
                match escape_name(&name) {
                    Some(escaped) => {
                        write!(self.out, "\\{}  ", record.digest)?;
                        self.out.write_all(&escaped)?;
                    }
                    None => {
                        write!(self.out, "{}  ", record.digest)?;
                        self.out.write_all(&name)?;
                    }
                }
                self.out.write_all(b"\n")?;
                self.out.flush()
            }
            FileOutcome::Failed(error) => {
                write!(self.err, "{PROGRAM}: ")?;
                self.err.write_all(&path_bytes(&error.path))?;
                writeln!(self.err, ": {}", error.cause)?;
                self.err.flush()
            }
        }
    }

    fn walk_issue(&mut self, issue: &WalkIssue) -> io::Result<()> {
        let path = path_bytes(issue.path());
        match issue {
            WalkIssue::Unreadable { cause, .. } => {
                write!(self.err, "{PROGRAM}: cannot read directory ")?;
                self.err.write_all(&path)?;
                writeln!(self.err, ": {cause}")?;
            }
            WalkIssue::Skipped { kind, .. } => {
                write!(self.err, "{PROGRAM}: skipping ")?;
                self.err.write_all(&path)?;
                writeln!(self.err, ": {kind}")?;
            }
        }
        self.err.flush()
    }
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;

    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

/// Escaped form of `name`, or `None` when it can be written as is
fn escape_name(name: &[u8]) -> Option<Vec<u8>> {
    if !name.iter().any(|&b| b == b'\\' || b == b'\n') {
        return None;
    }
    let mut escaped = Vec::with_capacity(name.len() + 4);
    for &b in name {
        match b {
            b'\\' => escaped.extend_from_slice(b"\\\\"),
            b'\n' => escaped.extend_from_slice(b"\\n"),
            _ => escaped.push(b),
        }
    }
    Some(escaped)
}
