//! Quote-Scraper: a paginated quote harvester
//!
//! This crate walks the numbered listing pages of a quotes website, extracts
//! quote records (text, author, tags), writes them to CSV and summarizes the
//! most common tags and authors.

pub mod clean;
pub mod config;
pub mod crawler;
pub mod output;
pub mod pipeline;
pub mod record;

use thiserror::Error;

/// Main error type for Quote-Scraper operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Invalid CSS selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Quote #{index} on page {page} has no element matching '{selector}'")]
    MissingElement {
        page: u32,
        index: usize,
        selector: String,
    },

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector in config: {0}")]
    InvalidSelector(String),
}

/// Result type alias for Quote-Scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

// Re-export commonly used types
pub use clean::{clean_records, AsciiCleaner, TextCleaner};
pub use config::Config;
pub use crawler::{scrape_pages, HttpPageFetcher, PageFetcher, ScrapeOutcome, StopReason};
pub use output::{build_report, write_quotes_csv, QuoteReport};
pub use pipeline::{run_pipeline, PipelineResult};
pub use record::QuoteRecord;
