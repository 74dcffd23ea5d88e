//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from table validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Directory the tables were read from.
    pub schema_dir: PathBuf,
    /// Every checked table, in source order.
    pub tables: Vec<CheckedTable>,
}

#[derive(Debug)]
pub struct CheckedTable {
    pub source: String,
    pub class_name: String,
    pub columns: usize,
    /// Rendered diagnostics (`severity: message (at location)`).
    pub diagnostics: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for table in &self.tables {
            out.section(&format!(
                "{} ({}, {} column{})",
                table.source,
                table.class_name,
                table.columns,
                if table.columns == 1 { "" } else { "s" }
            ));
            for diagnostic in &table.diagnostics {
                out.list_item(diagnostic);
            }
        }

        if !self.tables.is_empty() {
            out.newline();
        }
        let count = self.tables.len();
        out.preformatted(&format!(
            "✓ {} is valid ({} table{})",
            self.schema_dir.display(),
            count,
            if count == 1 { "" } else { "s" }
        ));
    }
}
