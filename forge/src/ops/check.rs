//! Check operation - table validation.

use std::path::Path;

use cqlforge_codegen::pipeline::Pipeline;
use cqlforge_schema::TableSchema;
use eyre::{Context, Result};

use crate::reports::{CheckReport, CheckedTable};

/// Execute the check operation.
///
/// Runs the pipeline on every table and returns the diagnostics. The first
/// table that fails validation or lowering aborts the check.
pub fn check(tables: Vec<TableSchema>, schema_dir: &Path) -> Result<CheckReport> {
    let pipeline = Pipeline::new();
    let mut checked = Vec::with_capacity(tables.len());

    for schema in tables {
        let source = schema.source.clone();
        let ctx = pipeline
            .run(schema)
            .wrap_err_with(|| format!("validation of {source} failed"))?;

        checked.push(CheckedTable {
            source,
            class_name: ctx.schema.class_name.clone(),
            columns: ctx.schema.columns.len(),
            diagnostics: ctx.diagnostics.iter().map(ToString::to_string).collect(),
        });
    }

    Ok(CheckReport {
        schema_dir: schema_dir.to_path_buf(),
        tables: checked,
    })
}
