use std::io;

use crate::report::Reporter;
use crate::scan::FileOutcome;
use crate::scanner::WalkIssue;


/// Reporter that keeps everything in memory
#[derive(Debug, Default)]
pub(crate) struct RecordingReporter {
    pub outcomes: Vec<FileOutcome>,
    pub issues: Vec<WalkIssue>,
}

impl Reporter for RecordingReporter {
    fn file(&mut self, outcome: &FileOutcome) -> io::Result<()> {
        self.outcomes.push(outcome.clone());
        Ok(())
    }

    fn walk_issue(&mut self, issue: &WalkIssue) -> io::Result<()> {
        self.issues.push(issue.clone());
        Ok(())
    }
}

/// Reporter whose output channel is closed
pub(crate) struct BrokenReporter;

impl Reporter for BrokenReporter {
    fn file(&mut self, _outcome: &FileOutcome) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn walk_issue(&mut self, _issue: &WalkIssue) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }
}
