//! SCP-Scraper main entry point
//!
//! This is the command-line interface for the SCP wiki scraper.

use anyhow::{bail, Context};
use clap::Parser;
use scp_scraper::config::load_config_or_default;
use scp_scraper::Scraper;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// SCP-Scraper: fetch structured entries from the SCP wiki
///
/// Pass an item number to fetch one entry, two item numbers to fetch the
/// half-open range between them, or `ser <N>` to audit how many entries of
/// series N could not be fully extracted.
#[derive(Parser, Debug)]
#[command(name = "scp-scraper")]
#[command(version)]
#[command(about = "Fetch structured entries from the SCP wiki", long_about = None)]
struct Cli {
    /// `<ITEM>`, `<START> <END>`, or `ser <SERIES>`
    #[arg(value_name = "REQUEST", required = true, num_args = 1..=2)]
    request: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    Single(u64),
    Range { start: u64, end: u64 },
    SeriesErrorRate(usize),
}

impl Request {
    /// Interprets the positional arguments
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        match args {
            [keyword, series] if keyword == "ser" => {
                let series: usize = series
                    .parse()
                    .with_context(|| format!("'{}' is not a series number", series))?;
                Ok(Self::SeriesErrorRate(series))
            }
            [keyword] if keyword == "ser" => {
                bail!("too few arguments passed for 'ser'; pass a series number")
            }
            [item] => Ok(Self::Single(parse_item(item)?)),
            [start, end] => Ok(Self::Range {
                start: parse_item(start)?,
                end: parse_item(end)?,
            }),
            _ => bail!("expected an item number, a range, or 'ser <SERIES>'"),
        }
    }
}

fn parse_item(arg: &str) -> anyhow::Result<u64> {
    let item: u64 = arg
        .parse()
        .with_context(|| format!("'{}' is not an item number", arg))?;
    if item == 0 {
        bail!("item numbers start at 1");
    }
    Ok(item)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let request = Request::parse(&cli.request)?;

    let config = load_config_or_default(cli.config.as_deref()).context("failed to load configuration")?;
    let scraper = Scraper::new(config)?;

    // Failures are reported once, by anyhow, when main returns
    dispatch(&scraper, request).await?;

    println!("REQUEST COMPLETE");
    Ok(())
}

/// Runs the handler for one request
async fn dispatch(scraper: &Scraper, request: Request) -> anyhow::Result<()> {
    match request {
        Request::Single(item) => handle_single(scraper, item).await,
        Request::Range { start, end } => handle_range(scraper, start, end).await,
        Request::SeriesErrorRate(series) => handle_series_error_rate(scraper, series).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("scp_scraper=info,warn"),
            1 => EnvFilter::new("scp_scraper=debug,info"),
            2 => EnvFilter::new("scp_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Fetches and prints one record
async fn handle_single(scraper: &Scraper, item: u64) -> anyhow::Result<()> {
    println!("PROCESSING REQUEST: Acquiring SCP-{}.", item);

    let record = scraper.get_record(item).await?;
    println!("{}", record);

    Ok(())
}

/// Fetches and prints every record in `[start, end)`
async fn handle_range(scraper: &Scraper, start: u64, end: u64) -> anyhow::Result<()> {
    println!("PROCESSING REQUEST: Acquiring set of requested SCPs. This may take a moment...");
    println!("{} {}", start, end);

    let records = scraper.get_range(start, end).await?;
    for record in &records {
        println!("{}", record);
    }

    Ok(())
}

/// Audits one series and prints its error rate
async fn handle_series_error_rate(scraper: &Scraper, series: usize) -> anyhow::Result<()> {
    println!(
        "PROCESSING REQUEST: Performing Series Error Rate Service. This may take a moment..."
    );

    let available = scraper.series_count().await?;
    if series < 1 || series > available {
        bail!(
            "invalid series request: {} (the wiki lists {} series)",
            series,
            available
        );
    }

    let report = scraper.audit_series(series).await?;
    println!();
    println!(
        "The error rate for Series {} is {}",
        report.series,
        report.error_rate()
    );

    Ok(())
}
