//! dirsum-cli: CLI for recursive checksum manifests

use std::process::ExitCode;

use clap::Parser;
use dirsum_cli::commands;
use dirsum_cli::logging::setup_logging;
use dirsum_cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match commands::scan::run(&cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", dirsum_core::PROGRAM);
            ExitCode::FAILURE
        }
    }
}
