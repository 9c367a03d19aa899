//! Text bar charts
//!
//! Renders the two report charts ("most common tags" and "most popular
//! authors") side by side as horizontal bars, for terminals and logs.

use crate::output::report::QuoteReport;
use crate::output::traits::{ChartRenderer, OutputResult};
use std::io::{self, Write};

const LABEL_LIMIT: usize = 24;
const PANEL_GAP: &str = "    ";

/// Side-by-side horizontal bar charts written to stdout
#[derive(Debug, Clone)]
pub struct TerminalBarChart {
    /// Width of the longest bar in characters
    pub bar_width: usize,

    /// Character bars are drawn with
    pub bar_glyph: char,
}

impl Default for TerminalBarChart {
    fn default() -> Self {
        Self {
            bar_width: 30,
            bar_glyph: '#',
        }
    }
}

impl TerminalBarChart {
    /// Writes both charts to `out`
    pub fn render_to<W: Write>(&self, report: &QuoteReport, mut out: W) -> OutputResult<()> {
        out.write_all(self.format_charts(report).as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Formats both charts side by side
    pub fn format_charts(&self, report: &QuoteReport) -> String {
        let left = self.format_panel(
            &format!("Top {} Most Common Tags", report.top_n),
            "Tags",
            &report.top_tags,
        );
        let right = self.format_panel(
            &format!("Top {} Most Popular Authors", report.top_n),
            "Authors",
            &report.top_authors,
        );

        let left_width = left.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let rows = left.len().max(right.len());

        let mut output = String::new();
        for i in 0..rows {
            let l = left.get(i).map(String::as_str).unwrap_or("");
            let r = right.get(i).map(String::as_str).unwrap_or("");
            let line = format!("{:<width$}{}{}", l, PANEL_GAP, r, width = left_width);
            output.push_str(line.trim_end());
            output.push('\n');
        }
        output
    }

    /// Formats one chart as a list of lines
    fn format_panel(&self, title: &str, x_label: &str, data: &[(String, usize)]) -> Vec<String> {
        let mut lines = vec![title.to_string(), "=".repeat(title.chars().count())];

        if data.is_empty() {
            lines.push("(no data)".to_string());
            return lines;
        }

        let labels: Vec<String> = data.iter().map(|(label, _)| shorten(label)).collect();
        let label_width = labels
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(x_label.len()))
            .max()
            .unwrap_or(0);
        let max_count = data.iter().map(|(_, count)| *count).max().unwrap_or(0);

        lines.push(format!(
            "{:<width$} | Number of Quotes",
            x_label,
            width = label_width
        ));
        for (label, (_, count)) in labels.iter().zip(data) {
            let bar: String = std::iter::repeat(self.bar_glyph)
                .take(self.bar_length(*count, max_count))
                .collect();
            lines.push(format!(
                "{:<width$} | {} {}",
                label,
                bar,
                count,
                width = label_width
            ));
        }
        lines
    }

    /// Bar length scaled to `max`; any non-zero count gets at least one glyph
    fn bar_length(&self, count: usize, max: usize) -> usize {
        if count == 0 || max == 0 {
            return 0;
        }
        ((count * self.bar_width + max / 2) / max).max(1)
    }
}

impl ChartRenderer for TerminalBarChart {
    fn render(&self, report: &QuoteReport) -> OutputResult<()> {
        let stdout = io::stdout();
        self.render_to(report, stdout.lock())
    }
}

/// Truncates long labels so one chart cannot push the other off screen
fn shorten(label: &str) -> String {
    if label.chars().count() <= LABEL_LIMIT {
        return label.to_string();
    }
    let mut short: String = label.chars().take(LABEL_LIMIT - 1).collect();
    short.push('~');
    short
}
