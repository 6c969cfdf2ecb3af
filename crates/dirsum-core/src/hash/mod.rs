//! Hash engine: content digests of individual files
//!
//! Digests are computed in-process and formatted as lowercase hex without
//! separators, matching `md5sum` and `sha256sum` byte for byte.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::HashError;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Supported digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha256,
}

impl Algorithm {
    /// Name accepted on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
        }
    }

    /// Length of the hex-encoded digest
    #[must_use]
    pub const fn hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha256 => 64,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Running digest state for one file
enum DigestState {
    Md5(md5::Context),
    Sha256(Sha256),
}

impl DigestState {
    fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => Self::Md5(md5::Context::new()),
            Algorithm::Sha256 => Self::Sha256(Sha256::new()),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Self::Md5(ctx) => ctx.consume(data),
            Self::Sha256(hasher) => hasher.update(data),
        }
    }

    fn finalize_hex(self) -> String {
        match self {
            Self::Md5(ctx) => format!("{:x}", ctx.compute()),
            Self::Sha256(hasher) => format!("{:x}", hasher.finalize()),
        }
    }
}

/// Digest everything `reader` yields
///
/// # Errors
/// Returns any read error other than `Interrupted`.
pub fn hash_reader<R: BufRead>(mut reader: R, algorithm: Algorithm) -> io::Result<String> {
    let mut state = DigestState::new(algorithm);
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }
        state.update(buf);
        let len = buf.len();
        reader.consume(len);
    }
    Ok(state.finalize_hex())
}

/// Compute the hex digest of a file's content
///
/// Each call opens its own handle and owns its read buffer, so calls can run
/// concurrently on different files.
///
/// # Errors
/// Returns `HashError::Io` if the file cannot be opened or read, and
/// `HashError::Computation` if the digest comes out malformed.
pub fn compute_file_hash(path: &Path, algorithm: Algorithm) -> Result<String, HashError> {
    let io_error = |source| HashError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);
    let digest = hash_reader(reader, algorithm).map_err(io_error)?;

    if digest.len() != algorithm.hex_len() {
        return Err(HashError::Computation {
            path: path.to_path_buf(),
            cause: format!(
                "{algorithm} digest has {} hex characters, expected {}",
                digest.len(),
                algorithm.hex_len()
            ),
        });
    }

    Ok(digest)
}

#[cfg(test)]
mod tests;
