//! Lint trait for table validation.

use cqlforge_schema::TableSchema;

use crate::pipeline::Diagnostic;

/// A lint that checks a parsed table for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the table and add any diagnostics.
    fn check(&self, schema: &TableSchema, diagnostics: &mut Vec<Diagnostic>);
}
