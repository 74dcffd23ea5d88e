use std::collections::BTreeMap;

use cqlforge_core::to_class_name;

use crate::{
    ColumnDefinition, Result, SourceContext, TableSchema, normalize::normalize_body,
};

/// Parse a single table statement.
///
/// The statement has the shape `<keyword>* <table> (<clause>, ...) <trailer>?`.
/// The column list runs from the first `(` to the last `)`. Clauses that do not
/// reduce to exactly one name and one type are recorded in
/// [`TableSchema::skipped_clauses`] and otherwise ignored.
pub fn parse_statement(content: &str, source_name: &str) -> Result<TableSchema> {
    let ctx = SourceContext::new(content, source_name);

    let open = content.find('(').ok_or_else(|| ctx.missing_open_paren())?;
    let close = match content.rfind(')') {
        Some(close) if close > open => close,
        _ => return Err(ctx.missing_close_paren(open)),
    };

    let raw_table_name = content[..open]
        .split_whitespace()
        .last()
        .ok_or_else(|| ctx.missing_table_name(open))?
        .to_string();

    let body: String = content[open + 1..close].chars().filter(|&c| c != '\n').collect();
    let body = normalize_body(&body);

    let mut columns = BTreeMap::new();
    let mut skipped_clauses = Vec::new();

    for clause in body.split(',') {
        let cleaned: String = clause.chars().filter(|c| !matches!(c, '"' | '\n')).collect();
        let cleaned = cleaned.trim();

        match cleaned.split_whitespace().collect::<Vec<_>>()[..] {
            [name, storage_type] => {
                let name = if name.contains('(') {
                    // A leftover call fragment; the name must come from the type text.
                    match storage_type.split_once(',') {
                        Some((name, _)) => name,
                        None => {
                            skipped_clauses.push(cleaned.to_string());
                            continue;
                        }
                    }
                } else {
                    name
                };
                // Later clauses replace earlier ones with the same raw name.
                columns.insert(name.to_string(), storage_type.to_string());
            }
            _ if cleaned.is_empty() => {}
            _ => skipped_clauses.push(cleaned.to_string()),
        }
    }

    let columns = columns
        .into_iter()
        .map(|(raw_name, storage_type)| ColumnDefinition {
            raw_name,
            storage_type,
        })
        .collect();

    Ok(TableSchema {
        source: source_name.to_string(),
        class_name: to_class_name(&raw_table_name),
        raw_table_name,
        columns,
        skipped_clauses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, SchemaParseError};

    fn columns(schema: &TableSchema) -> Vec<(&str, &str)> {
        schema
            .columns
            .iter()
            .map(|c| (c.raw_name.as_str(), c.storage_type.as_str()))
            .collect()
    }

    #[test]
    fn test_parse_two_columns() {
        let schema = parse_statement(r#"CREATE TABLE t (col1 "text", col2 "bigint")"#, "t.db").unwrap();

        assert_eq!(schema.raw_table_name, "t");
        assert_eq!(schema.class_name, "T");
        assert_eq!(schema.source, "t.db");
        assert_eq!(columns(&schema), [("col1", "text"), ("col2", "bigint")]);
        assert!(schema.skipped_clauses.is_empty());
    }

    #[test]
    fn test_columns_sorted_by_raw_name() {
        let schema =
            parse_statement("CREATE TABLE widget (price decimal, color text, amount bigint)", "w")
                .unwrap();

        let names: Vec<_> = schema.column_names().collect();
        assert_eq!(names, ["amount", "color", "price"]);
    }

    #[test]
    fn test_class_name_from_table_identifier() {
        let schema = parse_statement("CREATE TABLE user_account (name text)", "ua").unwrap();
        assert_eq!(schema.class_name, "UserAccount");

        let schema = parse_statement("create table ks.ORDER_ITEM (name text)", "oi").unwrap();
        assert_eq!(schema.raw_table_name, "ks.ORDER_ITEM");
    }

    #[test]
    fn test_duplicate_raw_name_last_wins() {
        let schema = parse_statement("CREATE TABLE t (a text, b bigint, a boolean)", "t").unwrap();
        assert_eq!(columns(&schema), [("a", "boolean"), ("b", "bigint")]);
    }

    #[test]
    fn test_multiline_statement_with_key_clause() {
        let stmt = "CREATE TABLE widget (\n\
                    key text PRIMARY KEY,\n\
                    \"color\" text,\n\
                    \"price\" decimal\n\
                    ) WITH COMPACT STORAGE AND\n\
                    comment='';";
        let schema = parse_statement(stmt, "widget.db").unwrap();

        assert_eq!(columns(&schema), [("color", "text"), ("price", "decimal")]);
        assert_eq!(schema.skipped_clauses, ["key text PRIMARY KEY"]);
    }

    #[test]
    fn test_call_split_across_lines_collapses() {
        let schema =
            parse_statement("CREATE TABLE t (substring(code,\n 1) text, n bigint)", "t").unwrap();

        assert_eq!(columns(&schema), [("code", "text"), ("n", "bigint")]);
        assert!(schema.skipped_clauses.is_empty());
    }

    #[test]
    fn test_leftover_call_fragment_is_skipped() {
        let schema = parse_statement("CREATE TABLE t (substr(zip) text, n bigint)", "t").unwrap();

        assert_eq!(columns(&schema), [("n", "bigint")]);
        assert_eq!(schema.skipped_clauses, ["substr(zip) text"]);
    }

    #[test]
    fn test_blank_clauses_not_recorded() {
        let schema = parse_statement("CREATE TABLE t (a text, , b bigint,)", "t").unwrap();
        assert_eq!(columns(&schema), [("a", "text"), ("b", "bigint")]);
        assert!(schema.skipped_clauses.is_empty());
    }

    #[test]
    fn test_empty_column_list() {
        let schema = parse_statement("CREATE TABLE t ()", "t").unwrap();
        assert!(schema.columns.is_empty());
    }

    #[test]
    fn test_helper_call_fragments_collapse() {
        let schema = parse_statement(
            "CREATE TABLE t (substring(code, 1, 3) text, substr(zip, 0, 5) text, n bigint)",
            "t",
        )
        .unwrap();
        assert_eq!(
            columns(&schema),
            [("code", "text"), ("n", "bigint"), ("zip", "text")]
        );
    }

    #[test]
    fn test_precision_type_is_split() {
        // decimal(10,2) splits on its inner comma; the pieces do not form a column.
        let schema = parse_statement("CREATE TABLE t (price decimal(10,2), name text)", "t").unwrap();

        assert_eq!(
            columns(&schema),
            [("name", "text"), ("price", "decimal(10")]
        );
        assert_eq!(schema.skipped_clauses, ["2)"]);
    }

    #[test]
    fn test_missing_open_paren() {
        let err = parse_statement("CREATE TABLE t", "t.db").unwrap_err();
        assert!(matches!(
            *err,
            Error::Parse(SchemaParseError::MissingOpenParen { .. })
        ));
    }

    #[test]
    fn test_missing_close_paren() {
        let err = parse_statement("CREATE TABLE t (a text", "t.db").unwrap_err();
        assert!(matches!(
            *err,
            Error::Parse(SchemaParseError::MissingCloseParen { .. })
        ));

        let err = parse_statement("CREATE TABLE t ) a text (", "t.db").unwrap_err();
        assert!(matches!(
            *err,
            Error::Parse(SchemaParseError::MissingCloseParen { .. })
        ));
    }

    #[test]
    fn test_missing_table_name() {
        let err = parse_statement("  (a text)", "t.db").unwrap_err();
        assert!(matches!(
            *err,
            Error::Parse(SchemaParseError::MissingTableName { .. })
        ));
    }
}
