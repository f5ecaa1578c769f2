mod config;
mod error;
mod report;
mod weather;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{Instrument, debug, info_span};
use tracing_subscriber::EnvFilter;

use crate::config::Cli;
use crate::report::Summary;

/// Parses the command line, fetches the forecast once and prints either the
/// three-line summary on stdout or a single error line on stderr.
/// Logs go to stderr and are filtered with `RUST_LOG` (default `warn`).
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let span = info_span!("forecast", location = %cli.location(), units = ?cli.units);

    match run(&cli).instrument(span).await {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("Run failed: {:?}", err);
            eprintln!("{}", report::failure_line(&err));
            ExitCode::FAILURE
        }
    }
}

/// One request, no retries: any failure ends the run.
async fn run(cli: &Cli) -> anyhow::Result<Summary> {
    let client = reqwest::Client::builder()
        .timeout(cli.timeout())
        .build()
        .context("failed to build HTTP client")?;

    let response = weather::get_forecast(&client, &cli.endpoint, &cli.query())
        .await
        .context("failed to fetch forecast")?;

    response
        .summary(cli.units)
        .context("failed to read forecast")
}
