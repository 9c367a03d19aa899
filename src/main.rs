//! Quote-Scraper main entry point
//!
//! This is the command-line interface for the Quote-Scraper pipeline.

use anyhow::Context;
use clap::Parser;
use quote_scraper::config::{load_config_with_hash, validate, Config};
use quote_scraper::crawler::HttpPageFetcher;
use quote_scraper::output::{ChartRenderer, TerminalBarChart};
use quote_scraper::pipeline::run_pipeline;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Quote-Scraper: a paginated quote harvester
///
/// Scrapes every listing page of a quotes site, saves the quotes to CSV and
/// charts the most common tags and authors. With no arguments it scrapes
/// quotes.toscrape.com into quotes.csv.
#[derive(Parser, Debug)]
#[command(name = "quote-scraper")]
#[command(version)]
#[command(about = "A paginated quote harvester", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Site root; pages are fetched from <BASE_URL>page/<N>/
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// CSV output path
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Also write a markdown summary to this path
    #[arg(long, value_name = "FILE")]
    summary: Option<String>,

    /// Upper bound on the number of pages requested
    #[arg(long)]
    max_pages: Option<u32>,

    /// Number of tags and authors shown in the report
    #[arg(long)]
    top_n: Option<usize>,

    /// Skip rendering the bar charts
    #[arg(long)]
    no_chart: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded configuration
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.scraper.base_url = base_url.clone();
        }
        if let Some(output) = &self.output {
            config.output.csv_path = output.clone();
        }
        if let Some(summary) = &self.summary {
            config.output.summary_path = Some(summary.clone());
        }
        if let Some(max_pages) = self.max_pages {
            config.scraper.max_pages = max_pages;
        }
        if let Some(top_n) = self.top_n {
            config.output.top_n = top_n;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (cfg, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (cfg, Some(hash))
        }
        None => (Config::default(), None),
    };

    cli.apply_overrides(&mut config);
    validate(&config).context("Invalid configuration")?;

    run(&config, config_hash, cli.no_chart).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("quote_scraper=info,warn"),
            1 => EnvFilter::new("quote_scraper=debug,info"),
            2 => EnvFilter::new("quote_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Runs the pipeline against the configured site
async fn run(config: &Config, config_hash: Option<String>, no_chart: bool) -> anyhow::Result<()> {
    tracing::info!("Scraping quotes from {}", config.scraper.base_url);

    let fetcher = HttpPageFetcher::new(&config.scraper)?;
    let chart = TerminalBarChart::default();
    let renderer: Option<&dyn ChartRenderer> = if no_chart { None } else { Some(&chart as &dyn ChartRenderer) };

    let result = run_pipeline(&fetcher, config, config_hash, renderer).await?;

    tracing::info!(
        "Done: {} quotes from {} pages, stopped because {}",
        result.records.len(),
        result.pages_with_quotes,
        result.stop_reason
    );

    Ok(())
}
