//! Decoder for eBird "Download My Data" CSV exports
//!
//! The export has one row per species observed on a checklist. Columns are
//! located by header name rather than position, so exports with reordered or
//! missing columns, and rows with trailing fields omitted, still decode.
//!
//! ## Architecture
//!
//! - [`reader`] - File loading and the [`Records`] stream
//! - [`column_mapping`] - Header name to column index lookup
//! - [`record`] - The decoded [`Record`] type
//!
//! ## Usage
//!
//! ```no_run
//! use birdstats::ebird::read_records;
//!
//! # fn example() -> birdstats::Result<()> {
//! let records = read_records("MyEBirdData.csv")?;
//! println!("{} observations", records.len());
//! for record in records {
//!     println!("line {}: {}", record.line, record.common_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod reader;
pub mod record;

#[cfg(test)]
pub mod tests;

pub use column_mapping::ColumnMapping;
pub use reader::{Records, parse_records, read_records};
pub use record::Record;
