//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper, including:
//! - Building HTTP clients with the configured user agent
//! - GET requests to fetch listing pages
//! - Error classification
//! - The [`PageFetcher`] seam the paginator drives
//!
//! There is no retry: the first failed page ends pagination.

use crate::config::ScraperConfig;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The server answered with a non-2xx status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, timeout, unreadable body, etc.)
    NetworkError {
        /// Error description
        error: String,
    },
}

impl FetchResult {
    /// Returns the body for a successful fetch, `None` otherwise
    pub fn into_body(self) -> Option<String> {
        match self {
            FetchResult::Success { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Builds an HTTP client with the configured user agent
///
/// A request timeout is only set when `request_timeout_secs` is configured;
/// otherwise a request may wait indefinitely.
///
/// # Example
///
/// ```no_run
/// use quote_scraper::config::ScraperConfig;
/// use quote_scraper::crawler::build_http_client;
///
/// let client = build_http_client(&ScraperConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ScraperConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.clone())
        .gzip(true)
        .brotli(true);

    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Builds the URL of listing page `page`: `{base_url}page/{page}/`
///
/// A trailing slash is added to the base when missing so that the page
/// path is appended rather than replacing the last segment.
pub fn page_url(base_url: &Url, page: u32) -> Result<Url, url::ParseError> {
    let base = if base_url.path().ends_with('/') {
        base_url.clone()
    } else {
        let mut with_slash = base_url.clone();
        with_slash.set_path(&format!("{}/", base_url.path()));
        with_slash
    };

    base.join(&format!("page/{}/", page))
}

/// Fetches a URL and classifies the outcome
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx with readable body | `Success` |
/// | Any other status | `HttpError` |
/// | Transport error | `NetworkError` |
/// | Body read error | `NetworkError` |
pub async fn fetch_url(client: &Client, url: &str) -> FetchResult {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();

            if !status.is_success() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            if e.is_timeout() {
                FetchResult::NetworkError {
                    error: "Request timeout".to_string(),
                }
            } else if e.is_connect() {
                FetchResult::NetworkError {
                    error: format!("Connection failed: {}", e),
                }
            } else {
                FetchResult::NetworkError {
                    error: e.to_string(),
                }
            }
        }
    }
}

/// Source of listing page markup, indexed from 1
///
/// `None` means the page could not be fetched; the paginator treats it as
/// the end of the data.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch(&self, page: u32) -> Option<String>;
}

/// [`PageFetcher`] backed by real HTTP requests
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
    base_url: Url,
}

impl HttpPageFetcher {
    /// Creates a fetcher for `config.base_url`
    pub fn new(config: &ScraperConfig) -> crate::Result<Self> {
        let client = build_http_client(config)?;
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self { client, base_url })
    }
}

impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, page: u32) -> Option<String> {
        let url = match page_url(&self.base_url, page) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Cannot build URL for page {}: {}", page, e);
                return None;
            }
        };

        tracing::debug!("GET {}", url);

        match fetch_url(&self.client, url.as_str()).await {
            FetchResult::Success { status_code, body } => {
                tracing::debug!("{} -> {} ({} bytes)", url, status_code, body.len());
                Some(body)
            }
            FetchResult::HttpError { status_code } => {
                tracing::warn!("Error fetching the URL: {}\nHTTP status {}", url, status_code);
                None
            }
            FetchResult::NetworkError { error } => {
                tracing::warn!("Error fetching the URL: {}\n{}", url, error);
                None
            }
        }
    }
}
