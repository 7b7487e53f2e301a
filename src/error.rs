//! Error handling for eBird export processing.
//!
//! Every failure is fatal to a run: the CLI reports the error and exits
//! non-zero. Variants carry enough context (file path, source line, field
//! name) to locate the offending row in the export.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in '{}': {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed CSV in '{}' at line {line}: {message}", path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        message: &'static str,
    },

    #[error("Invalid eBird export '{}': {message}", path.display())]
    Format { path: PathBuf, message: String },

    #[error("Line {line}: invalid {field} '{value}' ({reason})")]
    FieldParse {
        line: usize,
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Total {field} is too large to represent")]
    Overflow { field: &'static str },

    #[error("No observations found: the export has a header but no data rows")]
    NoObservations,
}

impl Error {
    /// Create an I/O error for the given file
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a CSV syntax error for the given file
    pub fn csv(path: impl AsRef<Path>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a CSV quoting error at the given line
    pub fn syntax(path: impl AsRef<Path>, line: usize, message: &'static str) -> Self {
        Self::Syntax {
            path: path.as_ref().to_path_buf(),
            line,
            message,
        }
    }

    /// Create a structural format error
    pub fn format(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a field parse error citing the source line
    pub fn field_parse(
        line: usize,
        field: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::FieldParse {
            line,
            field,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
