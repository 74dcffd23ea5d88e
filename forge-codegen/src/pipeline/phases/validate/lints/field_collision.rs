//! Lint for distinct columns that map to the same field name.

use std::collections::HashMap;

use cqlforge_core::to_field_name;
use cqlforge_schema::TableSchema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when two raw column names lower to one field name.
///
/// `Unit-Price` and `unitprice` would both become `unitprice`, producing an
/// entity with duplicate fields.
pub struct FieldCollisionLint;

impl Lint for FieldCollisionLint {
    fn name(&self) -> &'static str {
        "field-collision"
    }

    fn description(&self) -> &'static str {
        "Detect distinct columns that map to the same field name"
    }

    fn check(&self, schema: &TableSchema, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<String, &str> = HashMap::new();

        for column in &schema.columns {
            let field = to_field_name(&column.raw_name);

            if field == "id" {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "column '{}' collides with the generated 'id' field",
                            column.raw_name
                        ),
                    )
                    .at(format!("{}.{}", schema.raw_table_name, column.raw_name)),
                );
                continue;
            }

            if let Some(first) = seen.get(&field) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "columns '{}' and '{}' both map to field '{}'",
                            first, column.raw_name, field
                        ),
                    )
                    .at(format!("{}.{}", schema.raw_table_name, column.raw_name)),
                );
            } else {
                seen.insert(field, &column.raw_name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use cqlforge_schema::parse_statement;

    use super::*;

    fn check(statement: &str) -> Vec<Diagnostic> {
        let schema = parse_statement(statement, "test.db").unwrap();
        let mut diagnostics = Vec::new();
        FieldCollisionLint.check(&schema, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_no_collision() {
        assert!(check("CREATE TABLE t (color text, price decimal)").is_empty());
    }

    #[test]
    fn test_case_collision() {
        let diagnostics = check("CREATE TABLE t (Color text, color text)");

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(
            diagnostics[0].message,
            "columns 'Color' and 'color' both map to field 'color'"
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("t.color"));
    }

    #[test]
    fn test_stripped_character_collision() {
        let diagnostics = check("CREATE TABLE t (\"unit-price\" decimal, unitprice decimal)");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_id_collision() {
        let diagnostics = check("CREATE TABLE t (ID text, name text)");

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'id' field"));
    }
}
