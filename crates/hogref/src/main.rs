//! Command-line entry point: transform a DocC archive into the
//! consolidated reference JSON.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Transform a DocC documentation archive into PostHog docs-site reference JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the DocC data archive
    data_dir: PathBuf,

    /// Path the consolidated reference JSON is written to
    output: PathBuf,

    /// SDK version string recorded in the output document
    sdk_version: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let document = libhogref::transform(&cli.data_dir, &cli.sdk_version)
        .with_context(|| format!("failed to process {}", cli.data_dir.display()))?;

    let mut json = libhogref::to_pretty_json(&document)?;
    json.push('\n');
    fs::write(&cli.output, json)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    tracing::info!(output = %cli.output.display(), "wrote reference document");
    Ok(())
}
