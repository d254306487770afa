mod config;
mod export;
mod fetcher;
mod parser;
mod record;
mod walker;

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::info;
use url::Url;

use config::{ScrapeConfig, DEFAULT_BASE_URL, DEFAULT_OUTPUT};
use fetcher::Fetcher;

#[derive(Parser, Debug)]
#[command(name = "quotes_scraper", about = "Scrape every page of quotes.toscrape.com into a CSV file")]
struct Cli {
    /// Output CSV path (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Seed page; next-page links are resolved against it
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: Url,

    /// Stop after this many pages (default: follow the pager to the end)
    #[arg(short = 'n', long)]
    max_pages: Option<NonZeroUsize>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long)]
    timeout: Option<u64>,
}

impl From<Cli> for ScrapeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            base_url: cli.base_url,
            output: cli.output,
            max_pages: cli.max_pages.map(NonZeroUsize::get),
            timeout: cli.timeout.map(Duration::from_secs),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ScrapeConfig::from(Cli::parse());

    let t0 = Instant::now();
    run(&config).await?;
    println!("Time elapsed: {} seconds", format_elapsed(t0.elapsed()));

    Ok(())
}

/// Walk the whole pager, then write everything in one go.
async fn run(config: &ScrapeConfig) -> anyhow::Result<usize> {
    println!("Writing to {}", config.output.display());
    info!(base_url = %config.base_url, output = %config.output.display(), "Starting scrape");

    let fetcher = Fetcher::new(config.timeout)?;
    let records = walker::walk(&fetcher, &config.base_url, config.max_pages).await?;
    let rows = export::write_records(&config.output, &records)?;

    info!("Wrote {} rows to {}", rows, config.output.display());
    Ok(rows)
}

fn format_elapsed(d: Duration) -> String {
    format!("{:.6}", d.as_secs_f64())
}
