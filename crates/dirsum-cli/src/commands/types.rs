//! Command-line types shared between main and library

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dirsum_core::Algorithm;

#[derive(Debug, Parser)]
#[command(name = "dirsum")]
#[command(author, version, about = "Checksum every file in a directory tree", long_about = None)]
pub struct Cli {
    /// Directory to scan recursively
    pub folder: PathBuf,

    /// Hash algorithm to use
    #[arg(value_enum)]
    pub hash_type: HashType,

    /// Maximum number of files hashed at once [default: number of CPUs]
    #[arg(short, long)]
    pub jobs: Option<NonZeroUsize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Hash algorithm names accepted on the command line (case-sensitive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HashType {
    Md5,
    Sha256,
}

impl From<HashType> for Algorithm {
    fn from(hash_type: HashType) -> Self {
        match hash_type {
            HashType::Md5 => Self::Md5,
            HashType::Sha256 => Self::Sha256,
        }
    }
}
