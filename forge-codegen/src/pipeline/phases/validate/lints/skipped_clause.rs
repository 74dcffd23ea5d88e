//! Lint that surfaces clauses the parser dropped.

use cqlforge_schema::TableSchema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that reports each skipped clause as info.
pub struct SkippedClauseLint;

impl Lint for SkippedClauseLint {
    fn name(&self) -> &'static str {
        "skipped-clause"
    }

    fn description(&self) -> &'static str {
        "Report clauses that are not a single column definition"
    }

    fn check(&self, schema: &TableSchema, diagnostics: &mut Vec<Diagnostic>) {
        for clause in &schema.skipped_clauses {
            diagnostics.push(
                Diagnostic::info("validate", format!("skipped clause '{}'", clause))
                    .at(schema.raw_table_name.clone()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use cqlforge_schema::parse_statement;

    use super::*;
    use crate::pipeline::Severity;

    #[test]
    fn test_key_clause_reported() {
        let schema = parse_statement(
            "CREATE TABLE widget (key text PRIMARY KEY, color text)",
            "widget.db",
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        SkippedClauseLint.check(&schema, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Info);
        assert_eq!(diagnostics[0].message, "skipped clause 'key text PRIMARY KEY'");
    }
}
