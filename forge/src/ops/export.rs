//! Export operation - table statements from a keyspace description.

use std::path::Path;

use cqlforge_core::GeneratedFile;
use cqlforge_schema::describe::KeyspaceDescription;
use eyre::{Context, Result};
use tracing::debug;

use crate::reports::ExportReport;

/// Render one `<table>.db` statement per described table into `out_dir`.
pub fn export(description: &KeyspaceDescription, out_dir: &Path) -> Result<ExportReport> {
    let files = description.files();
    let mut written = Vec::with_capacity(files.len());

    for file in &files {
        file.write(out_dir)
            .wrap_err("failed to export table statement")?;
        debug!(path = %file.path().display(), "exported table statement");
        written.push(file.path().display().to_string());
    }

    Ok(ExportReport {
        out_dir: out_dir.to_path_buf(),
        written,
    })
}

#[cfg(test)]
mod tests {
    use cqlforge_schema::describe::{ColumnDescription, StorageProperties, TableDescription};
    use tempfile::TempDir;

    use super::*;
    use crate::ops::load_tables;

    #[test]
    fn test_exported_statements_load_back() {
        let description = KeyspaceDescription {
            tables: vec![TableDescription {
                name: "widget".to_string(),
                key_validator: "org.apache.cassandra.db.marshal.UTF8Type".to_string(),
                columns: vec![ColumnDescription {
                    name: "color".to_string(),
                    validator: "org.apache.cassandra.db.marshal.UTF8Type".to_string(),
                }],
                properties: StorageProperties::default(),
            }],
        };

        let temp = TempDir::new().unwrap();
        let report = export(&description, temp.path()).unwrap();
        assert_eq!(report.written, ["widget.db"]);

        let tables = load_tables(temp.path()).unwrap();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].class_name, "Widget");
        assert_eq!(tables[0].column_names().collect::<Vec<_>>(), ["color"]);
    }
}
