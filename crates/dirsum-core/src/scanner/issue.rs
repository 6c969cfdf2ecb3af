//! Non-fatal problems found while walking

use std::fmt;
use std::fs::FileType;
use std::path::{Path, PathBuf};

/// Kind of a directory entry that is neither a file nor a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Symlink,
    Socket,
    Fifo,
    BlockDevice,
    CharDevice,
    Unknown,
}

impl EntryKind {
    /// Classify a file type that is not a regular file or directory
    #[must_use]
    pub fn of(file_type: FileType) -> Self {
        if file_type.is_symlink() {
            return Self::Symlink;
        }
        Self::special(file_type)
    }

    #[cfg(unix)]
    fn special(file_type: FileType) -> Self {
        use std::os::unix::fs::FileTypeExt;

        if file_type.is_socket() {
            Self::Socket
        } else if file_type.is_fifo() {
            Self::Fifo
        } else if file_type.is_block_device() {
            Self::BlockDevice
        } else if file_type.is_char_device() {
            Self::CharDevice
        } else {
            Self::Unknown
        }
    }

    #[cfg(not(unix))]
    fn special(_file_type: FileType) -> Self {
        Self::Unknown
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Symlink => "symbolic link",
            Self::Socket => "socket",
            Self::Fifo => "fifo",
            Self::BlockDevice => "block device",
            Self::CharDevice => "character device",
            Self::Unknown => "unsupported file type",
        };
        f.write_str(s)
    }
}

/// A problem in one part of the tree that does not stop the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkIssue {
    /// A directory (or entry) below the root could not be read
    Unreadable { path: PathBuf, cause: String },
    /// A non-regular entry that is not hashed
    Skipped { path: PathBuf, kind: EntryKind },
}

impl WalkIssue {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Unreadable { path, .. } | Self::Skipped { path, .. } => path,
        }
    }
}

impl fmt::Display for WalkIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, cause } => {
                write!(f, "cannot read directory {}: {cause}", path.display())
            }
            Self::Skipped { path, kind } => write!(f, "skipping {}: {kind}", path.display()),
        }
    }
}
