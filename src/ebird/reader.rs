//! Loading eBird exports into a record stream
//!
//! The whole file is parsed up front so that malformed CSV fails the run
//! before any statistics are accumulated; decoding into [`Record`] values
//! then happens lazily as the stream is consumed.

use csv::StringRecord;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use super::column_mapping::ColumnMapping;
use super::record::Record;
use crate::{Error, Result};

/// Read and parse an eBird export from disk
pub fn read_records(path: impl AsRef<Path>) -> Result<Records> {
    let path = path.as_ref();
    info!("Reading eBird export: {}", path.display());

    let content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let records = parse_records(path, content.as_slice())?;

    info!("Read {} eBird observations", records.len());
    Ok(records)
}

/// Parse CSV content into a record stream.
///
/// `path` is only used to give errors context.
pub fn parse_records(path: &Path, mut input: impl Read) -> Result<Records> {
    let mut content = Vec::new();
    input
        .read_to_end(&mut content)
        .map_err(|e| Error::io(path, e))?;

    // The csv reader recovers from stray quotes by folding text into a field;
    // reject them here so a damaged export never silently loses rows.
    check_quoting(&content).map_err(|(line, message)| Error::syntax(path, line, message))?;

    // Exports omit trailing empty fields, so rows may be shorter than the header
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_slice());

    let mut rows = csv_reader
        .records()
        .collect::<std::result::Result<Vec<StringRecord>, csv::Error>>()
        .map_err(|e| Error::csv(path, e))?
        .into_iter();

    let headers = rows
        .next()
        .ok_or_else(|| Error::format(path, "no header row found"))?;

    let mapping = ColumnMapping::from_headers(&headers);
    debug!(
        "Column mapping: {} named columns, {} data rows",
        mapping.len(),
        rows.len()
    );

    Ok(Records {
        mapping,
        rows,
        next_line: 2,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    /// A quote seen inside a quoted field: either an escape or the close
    QuoteInQuoted,
}

/// Validate RFC 4180 quoting, returning the offending line on failure.
///
/// A quote may only open a field, close it, or appear doubled inside a
/// quoted field. A closing quote must be followed by a delimiter or line end.
fn check_quoting(content: &[u8]) -> std::result::Result<(), (usize, &'static str)> {
    let mut state = QuoteState::FieldStart;
    let mut line = 1;
    let mut quote_line = 1;

    for &byte in content {
        state = match (state, byte) {
            (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, b'\n') => {
                line += 1;
                QuoteState::Quoted
            }
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
            (QuoteState::FieldStart, b'"') => {
                quote_line = line;
                QuoteState::Quoted
            }
            (QuoteState::Unquoted, b'"') => {
                return Err((line, "bare \" in non-quoted field"));
            }
            (_, b',') => QuoteState::FieldStart,
            (_, b'\n') => {
                line += 1;
                QuoteState::FieldStart
            }
            // CRLF line ending after a closing quote
            (QuoteState::QuoteInQuoted, b'\r') => QuoteState::Unquoted,
            (QuoteState::QuoteInQuoted, _) => {
                return Err((line, "extraneous \" after quoted field"));
            }
            (_, _) => QuoteState::Unquoted,
        };
    }

    if state == QuoteState::Quoted {
        return Err((quote_line, "quoted field is never closed"));
    }
    Ok(())
}

/// Single-pass stream of decoded records, in file order
#[derive(Debug)]
pub struct Records {
    mapping: ColumnMapping,
    rows: std::vec::IntoIter<StringRecord>,
    next_line: usize,
}

impl Records {
    /// Header mapping the records are decoded with
    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }
}

impl Iterator for Records {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        let row = self.rows.next()?;
        let line = self.next_line;
        self.next_line += 1;
        Some(Record::from_row(line, &row, &self.mapping))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for Records {}
