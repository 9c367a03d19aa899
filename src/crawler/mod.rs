//! Crawler module for listing-page fetching and processing
//!
//! This module contains the scraping pipeline up to the point where all
//! records are in memory:
//! - HTTP fetching of numbered listing pages
//! - HTML parsing
//! - Quote extraction
//! - Page-by-page coordination until the data runs out

mod extractor;
mod fetcher;
mod paginator;
mod parser;

pub use extractor::{extract_quotes, QuoteSelectors};
pub use fetcher::{
    build_http_client, fetch_url, page_url, FetchResult, HttpPageFetcher, PageFetcher,
};
pub use paginator::{scrape_pages, ScrapeOutcome, StopReason};
pub use parser::parse_document;
