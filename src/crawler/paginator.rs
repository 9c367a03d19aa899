//! Paginator - the page loop driving fetch, parse and extract
//!
//! Pages are requested one at a time starting from 1. The loop ends at the
//! first page that cannot be fetched, the first page without quotes, or
//! after `max_pages` pages, whichever comes first.

use crate::crawler::extractor::{extract_quotes, QuoteSelectors};
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::parse_document;
use crate::record::QuoteRecord;
use crate::ScrapeError;
use std::fmt;

/// Why pagination stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The page could not be fetched
    FetchFailed { page: u32 },

    /// The page was fetched but held no quotes
    EmptyPage { page: u32 },

    /// The configured page limit was reached
    PageLimit { max_pages: u32 },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::FetchFailed { page } => write!(f, "page {} could not be fetched", page),
            StopReason::EmptyPage { page } => write!(f, "page {} had no quotes", page),
            StopReason::PageLimit { max_pages } => {
                write!(f, "page limit of {} reached", max_pages)
            }
        }
    }
}

/// Everything a scrape produced
#[derive(Debug, Clone)]
pub struct ScrapeOutcome {
    /// All records, in page order then document order
    pub records: Vec<QuoteRecord>,

    /// Number of fetch calls made
    pub pages_fetched: u32,

    /// Number of pages that contributed at least one record
    pub pages_with_quotes: u32,

    pub stop_reason: StopReason,
}

/// Scrapes pages 1, 2, 3, ... until a stop condition is hit
///
/// # Arguments
///
/// * `fetcher` - Source of page markup
/// * `selectors` - Listing-page layout
/// * `max_pages` - Upper bound on the number of pages requested
///
/// # Returns
///
/// * `Ok(ScrapeOutcome)` - Pagination finished (fetch failures end the loop
///   and are not errors)
/// * `Err(ScrapeError)` - A page had an unexpected shape; nothing is returned
pub async fn scrape_pages<F: PageFetcher>(
    fetcher: &F,
    selectors: &QuoteSelectors,
    max_pages: u32,
) -> Result<ScrapeOutcome, ScrapeError> {
    let mut records = Vec::new();
    let mut pages_fetched = 0;
    let mut pages_with_quotes = 0;
    let mut stop_reason = StopReason::PageLimit { max_pages };

    for page in 1..=max_pages {
        tracing::info!("Scraping page {}...", page);

        pages_fetched += 1;
        let Some(html) = fetcher.fetch(page).await else {
            stop_reason = StopReason::FetchFailed { page };
            break;
        };

        let page_quotes = extract_page(&html, selectors, page)?;
        if page_quotes.is_empty() {
            stop_reason = StopReason::EmptyPage { page };
            break;
        }

        tracing::debug!("Page {} yielded {} quotes", page, page_quotes.len());
        records.extend(page_quotes);
        pages_with_quotes += 1;
    }

    tracing::info!(
        "Scraping finished: {} quotes from {} pages ({})",
        records.len(),
        pages_with_quotes,
        stop_reason
    );

    Ok(ScrapeOutcome {
        records,
        pages_fetched,
        pages_with_quotes,
        stop_reason,
    })
}

/// Parses one page and extracts its quotes
fn extract_page(
    html: &str,
    selectors: &QuoteSelectors,
    page: u32,
) -> Result<Vec<QuoteRecord>, ScrapeError> {
    let document = parse_document(html);
    extract_quotes(&document, selectors, page)
}
