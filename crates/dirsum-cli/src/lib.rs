//! dirsum-cli library
//!
//! This module exposes the internal functionality of dirsum-cli for testing purposes.

#[doc(hidden)]
pub mod commands;

pub mod logging;

pub use commands::types::{Cli, HashType};
