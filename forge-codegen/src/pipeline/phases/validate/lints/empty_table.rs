//! Lint for tables without columns.

use cqlforge_schema::TableSchema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when no column survived parsing.
///
/// Artifacts are still generated; the entity carries only its `id`.
pub struct EmptyTableLint;

impl Lint for EmptyTableLint {
    fn name(&self) -> &'static str {
        "empty-table"
    }

    fn description(&self) -> &'static str {
        "Warn about tables with no usable columns"
    }

    fn check(&self, schema: &TableSchema, diagnostics: &mut Vec<Diagnostic>) {
        if schema.columns.is_empty() {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!("table '{}' has no columns", schema.raw_table_name),
                )
                .at(schema.raw_table_name.clone()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use cqlforge_schema::parse_statement;

    use super::*;

    #[test]
    fn test_empty_table() {
        let schema = parse_statement("CREATE TABLE t (key text PRIMARY KEY)", "t.db").unwrap();

        let mut diagnostics = Vec::new();
        EmptyTableLint.check(&schema, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
    }

    #[test]
    fn test_non_empty_table() {
        let schema = parse_statement("CREATE TABLE t (a text)", "t.db").unwrap();

        let mut diagnostics = Vec::new();
        EmptyTableLint.check(&schema, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
