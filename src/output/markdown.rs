//! Markdown summary generation
//!
//! This module generates a human-readable markdown summary of a scrape,
//! including run information and the top tags and authors tables.

use crate::output::report::QuoteReport;
use crate::output::traits::OutputResult;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Everything the summary reports about one run
#[derive(Debug, Clone)]
pub struct ScrapeSummary {
    pub generated_at: DateTime<Utc>,
    pub base_url: String,
    /// SHA-256 of the config file, when one was used
    pub config_hash: Option<String>,
    pub csv_path: String,
    pub pages_fetched: u32,
    pub pages_with_quotes: u32,
    pub stop_reason: String,
    pub report: QuoteReport,
}

/// Writes the markdown summary to `output_path`
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote markdown summary
/// * `Err(OutputError)` - Failed to write summary
pub fn generate_markdown_summary(summary: &ScrapeSummary, output_path: &Path) -> OutputResult<()> {
    let markdown = format_markdown_summary(summary);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a scrape summary as markdown
pub fn format_markdown_summary(summary: &ScrapeSummary) -> String {
    let mut md = String::new();

    md.push_str("# Quote-Scraper Summary\n\n");

    // Run metadata
    md.push_str("## Run Information\n\n");
    md.push_str(&format!(
        "- **Generated**: {}\n",
        summary.generated_at.to_rfc3339()
    ));
    md.push_str(&format!("- **Base URL**: {}\n", summary.base_url));
    match &summary.config_hash {
        Some(hash) => md.push_str(&format!("- **Config Hash**: {}\n", hash)),
        None => md.push_str("- **Config Hash**: (built-in defaults)\n"),
    }
    md.push_str(&format!("- **CSV Output**: {}\n", summary.csv_path));
    md.push_str(&format!("- **Pages Fetched**: {}\n", summary.pages_fetched));
    md.push_str(&format!(
        "- **Pages With Quotes**: {}\n",
        summary.pages_with_quotes
    ));
    md.push_str(&format!(
        "- **Total Quotes**: {}\n",
        summary.report.total_quotes
    ));
    md.push_str(&format!("- **Stopped Because**: {}\n\n", summary.stop_reason));

    md.push_str(&format_count_table(
        &format!("Top {} Most Common Tags", summary.report.top_n),
        "Tag",
        &summary.report.top_tags,
    ));
    md.push_str(&format_count_table(
        &format!("Top {} Most Popular Authors", summary.report.top_n),
        "Author",
        &summary.report.top_authors,
    ));

    md
}

fn format_count_table(title: &str, column: &str, rows: &[(String, usize)]) -> String {
    let mut md = format!("## {}\n\n", title);

    if rows.is_empty() {
        md.push_str("No data.\n\n");
        return md;
    }

    md.push_str(&format!("| {} | Quotes |\n", column));
    md.push_str("|-----|--------|\n");
    for (label, count) in rows {
        md.push_str(&format!("| {} | {} |\n", escape_cell(label), count));
    }
    md.push('\n');
    md
}

/// Escapes characters that would break a table row
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}
