//! Record cleaning
//!
//! Cleaning is a lossy character filter applied to every text field of a
//! record before it is persisted. Dropped characters are deleted, not
//! escaped or transliterated, and nothing is reported per character.

use crate::record::QuoteRecord;

/// A character-level transform applied to record fields
pub trait TextCleaner {
    fn clean(&self, text: &str) -> String;
}

/// Keeps only 7-bit ASCII characters
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiCleaner;

impl TextCleaner for AsciiCleaner {
    fn clean(&self, text: &str) -> String {
        text.chars().filter(char::is_ascii).collect()
    }
}

/// Cleans the text, author and tags of every record in place
///
/// # Returns
///
/// The number of records that had at least one character removed
pub fn clean_records<C: TextCleaner>(records: &mut [QuoteRecord], cleaner: &C) -> usize {
    let mut changed = 0;

    for record in records.iter_mut() {
        let text = cleaner.clean(&record.text);
        let author = cleaner.clean(&record.author);
        let tags = cleaner.clean(&record.tags);

        if text != record.text || author != record.author || tags != record.tags {
            changed += 1;
        }

        record.text = text;
        record.author = author;
        record.tags = tags;
    }

    tracing::debug!("Cleaned {} records ({} modified)", records.len(), changed);
    changed
}
