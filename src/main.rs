use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use privat_rates::{Config, FailurePolicy, RateFetcherService, config::parse_timeout};

/// Fetch currency rates from PrivatBank
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of days to fetch rates for (1-10)
    #[arg(allow_negative_numbers = true)]
    days: i64,

    /// Per-request timeout in seconds
    #[arg(long, value_parser = parse_timeout_arg)]
    timeout: Option<Duration>,

    /// Archive endpoint the date is appended to
    #[arg(long)]
    base_url: Option<String>,

    /// Fail the whole batch if any day fails
    #[arg(long)]
    abort_on_error: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn parse_timeout_arg(secs: &str) -> Result<Duration, String> {
    parse_timeout(secs).map_err(|err| err.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(timeout);
    }
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if cli.abort_on_error {
        config = config.with_policy(FailurePolicy::AbortOnError);
    }

    let service = RateFetcherService::from_config(&config)?;
    let rates = service.fetch_batch(cli.days).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&rates)?
    } else {
        serde_json::to_string(&rates)?
    };
    println!("{}", output);

    Ok(())
}
