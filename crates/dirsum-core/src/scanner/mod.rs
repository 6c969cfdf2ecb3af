//! Scanner module: Regular-file discovery
//!
//! Responsible for walking a directory tree and collecting every regular
//! file beneath the root, reporting what it could not read or chose to skip.

mod issue;
mod walker;

pub use issue::{EntryKind, WalkIssue};
pub use walker::{Walk, Walker};

#[cfg(test)]
mod tests;
