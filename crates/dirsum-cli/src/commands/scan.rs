//! Scan command: hash a directory tree and print the manifest

use std::io;

use anyhow::Result;
use dirsum_core::{ManifestWriter, ScanConfig, ScanSummary};
use tracing::info;

use super::types::Cli;

/// Build the scan configuration from parsed arguments
#[must_use]
pub fn config_from_cli(cli: &Cli) -> ScanConfig {
    let config = ScanConfig::new(&cli.folder, cli.hash_type.into());
    match cli.jobs {
        Some(jobs) => config.with_jobs(jobs.get()),
        None => config,
    }
}

/// Run the scan command
///
/// Manifest lines go to stdout, per-file and per-directory diagnostics to
/// stderr. Files that fail to hash do not make the command fail.
///
/// # Errors
/// Returns an error if the folder cannot be accessed or output cannot be written.
pub async fn run(cli: &Cli) -> Result<ScanSummary> {
    let config = config_from_cli(cli);
    let mut reporter = ManifestWriter::new(io::stdout(), io::stderr());

    let summary = dirsum_core::scan(&config, &mut reporter).await?;

    if summary.failed > 0 || summary.walk_issues > 0 {
        info!(
            "{} of {} files could not be hashed, {} entries skipped or unreadable",
            summary.failed,
            summary.files(),
            summary.walk_issues
        );
    }
    Ok(summary)
}
