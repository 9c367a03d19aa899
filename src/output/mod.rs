//! Output module for persisting and summarizing scraped quotes
//!
//! This module handles:
//! - Writing records to CSV (and reading them back)
//! - Aggregating the most common tags and authors
//! - Rendering the aggregates as text bar charts
//! - Generating an optional markdown summary

mod chart;
mod csv_writer;
mod markdown;
pub mod report;
mod traits;

pub use chart::TerminalBarChart;
pub use csv_writer::{read_quotes, read_quotes_csv, write_quotes, write_quotes_csv, CSV_HEADERS};
pub use markdown::{format_markdown_summary, generate_markdown_summary, ScrapeSummary};
pub use report::{build_report, QuoteReport};
pub use traits::{ChartRenderer, OutputError, OutputResult};
