//! Output traits and error types
//!
//! This module defines the error type shared by every writer and the
//! trait interface for report renderers.

use crate::output::report::QuoteReport;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to format output: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for report renderers
///
/// A renderer turns the aggregated report into something a person can look
/// at. Computing the report never depends on a renderer being present.
pub trait ChartRenderer {
    /// Renders the top-tags and top-authors charts
    ///
    /// Must succeed for a report with no data.
    fn render(&self, report: &QuoteReport) -> OutputResult<()>;
}
