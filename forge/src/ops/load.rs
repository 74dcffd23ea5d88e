//! Load operation - schema source discovery and parsing.

use std::path::Path;

use cqlforge_schema::{Result, SchemaFile, TableSchema, discover};
use tracing::debug;

/// Parse every schema source in `dir`, in sorted path order.
///
/// Stops at the first source that cannot be read or parsed.
pub fn load_tables(dir: &Path) -> Result<Vec<TableSchema>> {
    let sources = discover(dir)?;
    debug!(dir = %dir.display(), sources = sources.len(), "discovered schema sources");

    sources
        .iter()
        .map(|path| SchemaFile::open(path).map(SchemaFile::into_table))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use cqlforge_schema::Error;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_tables_sorted() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("widget.db"), "CREATE TABLE widget (color text)").unwrap();
        fs::write(temp.path().join("account.db"), "CREATE TABLE account (balance decimal)")
            .unwrap();

        let tables = load_tables(temp.path()).unwrap();
        let names: Vec<_> = tables.iter().map(|t| t.class_name.as_str()).collect();
        assert_eq!(names, ["Account", "Widget"]);
    }

    #[test]
    fn test_load_tables_stops_at_parse_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("broken.db"), "CREATE TABLE broken").unwrap();
        fs::write(temp.path().join("widget.db"), "CREATE TABLE widget (color text)").unwrap();

        let err = load_tables(temp.path()).unwrap_err();
        assert!(matches!(*err, Error::Parse(_)));
    }
}
