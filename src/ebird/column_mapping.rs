//! Header-driven column lookup for eBird exports

use csv::StringRecord;
use std::collections::HashMap;

/// Column name to index mapping built from the header row
#[derive(Debug, Clone, Default)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Build the mapping from a header row.
    ///
    /// Names are matched exactly as written; when a name repeats, the last
    /// column carrying it wins.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let name_to_index = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.to_string(), index))
            .collect();

        Self { name_to_index }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Raw value of a named column in `row`, or `""` when the column is
    /// absent from the header or the row stops short of it
    pub fn field<'a>(&self, row: &'a StringRecord, column_name: &str) -> &'a str {
        self.get_index(column_name)
            .and_then(|index| row.get(index))
            .unwrap_or("")
    }

    /// Number of distinct column names
    pub fn len(&self) -> usize {
        self.name_to_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_index.is_empty()
    }
}
