//! URL Validator: probe a list of URLs, retry the unreachable ones with growing
//! timeouts, and save whatever still fails.

mod checker;
mod config;
mod error;
mod network;
#[cfg(test)]
mod testing;
mod urls;

use std::path::PathBuf;

use clap::Parser;

use checker::CheckReport;
use error::ValidatorError;
use network::Probe;

#[derive(Parser, Debug)]
#[command(
    name = "url-validator",
    about = "Check a list of URLs and record the ones that stay unreachable",
    long_about = "Sends a HEAD request (following redirects) to every URL in the input file. Unreachable URLs are retried with the timeout raised by 0.2 s per attempt; those still failing after the last attempt are written to the output file, which must not already exist."
)]
struct Cli {
    /// Input text file, one URL per line
    #[arg(short, long, default_value = config::DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output file for URLs that stay unreachable (must not exist)
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of total attempts before giving up
    #[arg(short, long, default_value_t = config::DEFAULT_ATTEMPTS, allow_negative_numbers = true)]
    pub attempts: i64,

    /// Timeout in seconds for the first attempt
    #[arg(short, long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    pub timeout: f64,

    /// Ignore blank lines in the input instead of probing them
    #[arg(long)]
    pub skip_blank: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let probe = network::HttpProbe::new()?;
    run(&cli, &probe).await?;
    Ok(())
}

/// Validate the configuration, check every input URL and write the failures.
///
/// Configuration errors are returned before the input is read or `probe` is used.
async fn run<P: Probe>(cli: &Cli, probe: &P) -> Result<CheckReport, ValidatorError> {
    let config = config::CheckConfig::new(cli.attempts, cli.timeout)?;
    let urls = urls::read_urls(&cli.input, cli.skip_blank)?;

    tracing::info!(
        "Checking {} URL(s) from {}, up to {} attempt(s)",
        urls.len(),
        cli.input.display(),
        config.attempts
    );

    let report = checker::run_checks(probe, &urls, &config).await;

    urls::write_failed_urls(&cli.output, &report.failed)?;

    if report.failed.is_empty() {
        tracing::info!(
            "All {} URL(s) reachable after {} pass(es)",
            urls.len(),
            report.passes
        );
    } else {
        tracing::warn!(
            "{} of {} URL(s) still unreachable after {} pass(es) (last timeout {:.1}s), written to {}",
            report.failed.len(),
            urls.len(),
            report.passes,
            report.last_timeout.as_secs_f64(),
            cli.output.display()
        );
    }
    Ok(report)
}
