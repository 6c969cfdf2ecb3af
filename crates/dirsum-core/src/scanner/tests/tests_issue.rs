//! Tests for walk issue formatting

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use crate::scanner::{EntryKind, WalkIssue};

#[test]
fn test_unreadable_display_names_path_and_cause() {
    let issue = WalkIssue::Unreadable {
        path: PathBuf::from("/data/private"),
        cause: "Permission denied (os error 13)".to_string(),
    };

    assert_eq!(
        issue.to_string(),
        "cannot read directory /data/private: Permission denied (os error 13)"
    );
}

#[test]
fn test_skipped_display_names_kind() {
    let issue = WalkIssue::Skipped {
        path: PathBuf::from("/data/run.sock"),
        kind: EntryKind::Socket,
    };

    assert_eq!(issue.to_string(), "skipping /data/run.sock: socket");
}

#[test]
fn test_issue_path() {
    let issue = WalkIssue::Skipped {
        path: PathBuf::from("/data/link"),
        kind: EntryKind::Symlink,
    };

    assert_eq!(issue.path(), PathBuf::from("/data/link").as_path());
}

#[cfg(unix)]
#[test]
fn test_entry_kind_of_symlink() {
    use std::os::unix::fs::symlink;

    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let link = temp_dir.path().join("link");
    symlink(temp_dir.path().join("target"), &link).expect("Failed to create symlink");
    let file_type = std::fs::symlink_metadata(&link)
        .expect("Failed to stat link")
        .file_type();

    assert_eq!(EntryKind::of(file_type), EntryKind::Symlink);
}
