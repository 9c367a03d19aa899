//! End-to-end scrape pipeline
//!
//! fetch → parse → extract (per page, until the data runs out) → dump →
//! clean → write CSV → report → optional summary and charts.
//!
//! Records only reach disk once pagination has finished; an extraction
//! error aborts the run before anything is written.

use crate::clean::{clean_records, AsciiCleaner};
use crate::config::{validate, Config};
use crate::crawler::{scrape_pages, PageFetcher, QuoteSelectors, StopReason};
use crate::output::{
    build_report, generate_markdown_summary, write_quotes_csv, ChartRenderer, QuoteReport,
    ScrapeSummary,
};
use crate::record::QuoteRecord;
use crate::ScrapeError;
use std::path::Path;

/// What a completed pipeline run produced
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Cleaned records, as written to the CSV file
    pub records: Vec<QuoteRecord>,
    pub pages_fetched: u32,
    pub pages_with_quotes: u32,
    pub stop_reason: StopReason,
    pub report: QuoteReport,
}

/// Runs the whole pipeline against `fetcher`
///
/// # Arguments
///
/// * `fetcher` - Source of listing pages
/// * `config` - Configuration; validated before anything is fetched
/// * `config_hash` - Hash of the config file, recorded in the summary
/// * `renderer` - Chart renderer; `None` skips rendering
///
/// # Returns
///
/// * `Ok(PipelineResult)` - CSV (and summary, if configured) written
/// * `Err(ScrapeError)` - Invalid configuration, a page with an unexpected
///   shape, or a failed write
pub async fn run_pipeline<F: PageFetcher>(
    fetcher: &F,
    config: &Config,
    config_hash: Option<String>,
    renderer: Option<&dyn ChartRenderer>,
) -> Result<PipelineResult, ScrapeError> {
    validate(config)?;
    let selectors = QuoteSelectors::from_config(&config.selectors)?;
    let outcome = scrape_pages(fetcher, &selectors, config.scraper.max_pages).await?;
    let mut records = outcome.records;

    for record in &records {
        println!("{}", record);
    }

    clean_records(&mut records, &AsciiCleaner);

    write_quotes_csv(&records, Path::new(&config.output.csv_path))?;
    println!("Data saved to {}", config.output.csv_path);

    let report = build_report(&records, config.output.top_n);

    if let Some(summary_path) = &config.output.summary_path {
        let summary = ScrapeSummary {
            generated_at: chrono::Utc::now(),
            base_url: config.scraper.base_url.clone(),
            config_hash,
            csv_path: config.output.csv_path.clone(),
            pages_fetched: outcome.pages_fetched,
            pages_with_quotes: outcome.pages_with_quotes,
            stop_reason: outcome.stop_reason.to_string(),
            report: report.clone(),
        };
        generate_markdown_summary(&summary, Path::new(summary_path))?;
        tracing::info!("Summary written to {}", summary_path);
    }

    if let Some(renderer) = renderer {
        renderer.render(&report)?;
    }

    Ok(PipelineResult {
        records,
        pages_fetched: outcome.pages_fetched,
        pages_with_quotes: outcome.pages_with_quotes,
        stop_reason: outcome.stop_reason,
        report,
    })
}
