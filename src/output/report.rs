//! Tag and author frequency report
//!
//! Counts how often each tag and each author occurs across the scraped
//! records and keeps the most frequent ones. Counts are sorted descending;
//! equal counts keep the order in which the values were first seen.

use crate::record::QuoteRecord;
use std::collections::HashMap;

/// Top-N tag and author frequencies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteReport {
    /// Number of entries each list was limited to
    pub top_n: usize,

    /// Number of records the report was computed from
    pub total_quotes: usize,

    /// Most common tags with the number of quotes carrying them
    pub top_tags: Vec<(String, usize)>,

    /// Most prolific authors with their number of quotes
    pub top_authors: Vec<(String, usize)>,
}

impl QuoteReport {
    /// True when neither list has any entry
    pub fn is_empty(&self) -> bool {
        self.top_tags.is_empty() && self.top_authors.is_empty()
    }
}

/// Builds the report for `records`, keeping `top_n` entries per list
///
/// Tags are recovered by splitting each record's joined tags field on
/// `", "`; empty tokens are not counted.
pub fn build_report(records: &[QuoteRecord], top_n: usize) -> QuoteReport {
    let tags = records
        .iter()
        .flat_map(|record| record.tag_list())
        .filter(|tag| !tag.is_empty());
    let authors = records.iter().map(|record| record.author.as_str());

    QuoteReport {
        top_n,
        total_quotes: records.len(),
        top_tags: top_counts(tags, top_n),
        top_authors: top_counts(authors, top_n),
    }
}

/// Counts values and returns the `limit` most frequent
///
/// Ties keep first-seen order because the sort is stable.
fn top_counts<'a>(values: impl Iterator<Item = &'a str>, limit: usize) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in values {
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}
