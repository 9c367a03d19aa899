//! HTML parser
//!
//! Wraps raw markup in a [`scraper::Html`] tree that supports CSS selector
//! lookups. html5ever recovers from any malformed input, so parsing itself
//! never fails.

use scraper::Html;

/// Parses a full HTML document
///
/// # Example
///
/// ```
/// use quote_scraper::crawler::parse_document;
/// use scraper::Selector;
///
/// let document = parse_document(r#"<div class="quote"><span class="text">Hi</span></div>"#);
/// let selector = Selector::parse(".quote").unwrap();
/// assert_eq!(document.select(&selector).count(), 1);
/// ```
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}
