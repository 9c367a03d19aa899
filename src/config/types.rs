use serde::Deserialize;

/// Default site to scrape
pub const DEFAULT_BASE_URL: &str = "https://quotes.toscrape.com/";

/// Default CSV output path
pub const DEFAULT_CSV_PATH: &str = "quotes.csv";

/// Main configuration structure for Quote-Scraper
///
/// Every section and key is optional; missing values fall back to the
/// built-in defaults so that an empty file (or no file at all) scrapes
/// `quotes.toscrape.com` into `quotes.csv`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scraper: ScraperConfig,
    pub selectors: SelectorConfig,
    pub output: OutputConfig,
}

/// Fetching and pagination configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Root of the site; pages are fetched from `{base-url}page/{N}/`
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Hard upper bound on the number of pages requested
    #[serde(rename = "max-pages")]
    pub max_pages: u32,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout; unset means the transport default (no timeout)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_pages: 1000,
            user_agent: format!("quote-scraper/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_secs: None,
        }
    }
}

/// CSS selectors describing the markup of a listing page
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Container element of a single quote
    pub quote: String,

    /// Quote text, looked up inside the container
    pub text: String,

    /// Author name, looked up inside the container
    pub author: String,

    /// Tag links, looked up inside the container
    pub tag: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            quote: ".quote".to_string(),
            text: ".text".to_string(),
            author: ".author".to_string(),
            tag: ".tag".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the CSV file (overwritten on every run)
    #[serde(rename = "csv-path")]
    pub csv_path: String,

    /// Optional path to a markdown summary
    #[serde(rename = "summary-path")]
    pub summary_path: Option<String>,

    /// How many tags and authors the report keeps
    #[serde(rename = "top-n")]
    pub top_n: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: DEFAULT_CSV_PATH.to_string(),
            summary_path: None,
            top_n: 10,
        }
    }
}
