//! CSV persistence of quote records
//!
//! The file always starts with the `quote,author,tags` header, even when
//! there are no records. Fields are quoted only when needed and records end
//! with CRLF.

use crate::output::traits::OutputResult;
use crate::record::QuoteRecord;
use csv::{ReaderBuilder, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Column names, in file order
pub const CSV_HEADERS: [&str; 3] = ["quote", "author", "tags"];

/// Writes records to `path`, replacing any existing file
///
/// # Arguments
///
/// * `records` - The (cleaned) records to persist
/// * `path` - Target file
///
/// # Returns
///
/// * `Ok(())` - File written and flushed
/// * `Err(OutputError)` - Failed to create or write the file
pub fn write_quotes_csv(records: &[QuoteRecord], path: &Path) -> OutputResult<()> {
    let file = File::create(path)?;
    write_quotes(records, file)?;
    tracing::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Writes records as CSV to any writer
pub fn write_quotes<W: Write>(records: &[QuoteRecord], writer: W) -> OutputResult<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Reads records back from a CSV file written by [`write_quotes_csv`]
pub fn read_quotes_csv(path: &Path) -> OutputResult<Vec<QuoteRecord>> {
    let file = File::open(path)?;
    read_quotes(file)
}

/// Reads records from any CSV source with a `quote,author,tags` header
pub fn read_quotes<R: Read>(reader: R) -> OutputResult<Vec<QuoteRecord>> {
    let mut csv_reader = ReaderBuilder::new().from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        records.push(result?);
    }
    Ok(records)
}
