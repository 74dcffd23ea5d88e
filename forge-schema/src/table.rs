//! Canonical table schema.

use serde::Serialize;

/// One column as written in a table statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDefinition {
    /// Column name exactly as written (quotes removed).
    pub raw_name: String,
    /// Storage type token (e.g., "text").
    pub storage_type: String,
}

impl ColumnDefinition {
    pub fn new(raw_name: impl Into<String>, storage_type: impl Into<String>) -> Self {
        Self {
            raw_name: raw_name.into(),
            storage_type: storage_type.into(),
        }
    }
}

/// Parsed, order-normalized representation of one table statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSchema {
    /// Name of the source the statement was read from.
    pub source: String,
    /// Table identifier as written in the statement.
    pub raw_table_name: String,
    /// Canonical class name derived from the table identifier.
    pub class_name: String,
    /// Columns sorted by raw name, one per distinct raw name.
    pub columns: Vec<ColumnDefinition>,
    /// Non-blank clauses that did not reduce to a name/type pair.
    pub skipped_clauses: Vec<String>,
}

impl TableSchema {
    /// Raw column names in schema order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.raw_name.as_str())
    }
}
