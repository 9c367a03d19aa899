//! Quote extraction
//!
//! Walks a parsed listing page for quote containers and turns each one into
//! a [`QuoteRecord`].
//!
//! # Extraction Rules
//!
//! - Every element matching the `quote` selector is one record, in
//!   document order
//! - Inside it, the first `text` match and the first `author` match supply
//!   the text and author (text content as-is, not trimmed)
//! - All `tag` matches, in document order, are joined with `", "`
//! - A container without a text or author element is an error; the markup
//!   no longer has the expected shape

use crate::config::SelectorConfig;
use crate::record::QuoteRecord;
use crate::ScrapeError;
use scraper::{ElementRef, Html, Selector};

/// Compiled selectors for one listing-page layout
#[derive(Debug, Clone)]
pub struct QuoteSelectors {
    quote: Selector,
    text: Selector,
    author: Selector,
    tag: Selector,
    author_source: String,
    text_source: String,
}

impl QuoteSelectors {
    /// Compiles the configured selector strings
    pub fn from_config(config: &SelectorConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            quote: compile(&config.quote)?,
            text: compile(&config.text)?,
            author: compile(&config.author)?,
            tag: compile(&config.tag)?,
            text_source: config.text.clone(),
            author_source: config.author.clone(),
        })
    }
}

fn compile(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Extracts every quote on a parsed listing page
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `selectors` - The compiled page layout
/// * `page` - Page number, used only for error context
///
/// # Returns
///
/// * `Ok(Vec<QuoteRecord>)` - Records in document order (empty when the page
///   has no quote containers)
/// * `Err(ScrapeError::MissingElement)` - A container lacks its text or author
pub fn extract_quotes(
    document: &Html,
    selectors: &QuoteSelectors,
    page: u32,
) -> Result<Vec<QuoteRecord>, ScrapeError> {
    document
        .select(&selectors.quote)
        .enumerate()
        .map(|(index, container)| extract_quote(container, selectors, page, index))
        .collect()
}

fn extract_quote(
    container: ElementRef<'_>,
    selectors: &QuoteSelectors,
    page: u32,
    index: usize,
) -> Result<QuoteRecord, ScrapeError> {
    let text = first_text(container, &selectors.text).ok_or_else(|| {
        ScrapeError::MissingElement {
            page,
            index,
            selector: selectors.text_source.clone(),
        }
    })?;

    let author = first_text(container, &selectors.author).ok_or_else(|| {
        ScrapeError::MissingElement {
            page,
            index,
            selector: selectors.author_source.clone(),
        }
    })?;

    let tags = container
        .select(&selectors.tag)
        .map(|element| element.text().collect::<String>());

    Ok(QuoteRecord::new(text, author, tags))
}

/// Text content of the first descendant matching `selector`
fn first_text(container: ElementRef<'_>, selector: &Selector) -> Option<String> {
    container
        .select(selector)
        .next()
        .map(|element| element.text().collect::<String>())
}
