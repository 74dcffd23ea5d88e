//! Compilation context passed through pipeline phases.

use cqlforge_ir::TableIR;
use cqlforge_schema::TableSchema;
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};

/// Context passed through all pipeline phases.
///
/// This struct carries the state of one table's compilation through each
/// phase, accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The parsed table being compiled.
    pub schema: TableSchema,
    /// The lowered table IR (populated by LowerPhase).
    pub ir: Option<TableIR>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a parsed table.
    pub fn new(schema: TableSchema) -> Self {
        Self {
            schema,
            ir: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Take the IR out of the context.
    ///
    /// Fails if LowerPhase has not run.
    pub fn take_ir(&mut self) -> Result<TableIR> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("table '{}' has not been lowered", self.schema.source))
    }
}

#[cfg(test)]
mod tests {
    use cqlforge_schema::parse_statement;

    use super::*;

    fn make_test_schema() -> TableSchema {
        parse_statement("CREATE TABLE widget (color text)", "widget.db")
            .expect("Failed to parse test table")
    }

    #[test]
    fn test_context_creation() {
        let ctx = CompilationContext::new(make_test_schema());

        assert!(ctx.ir.is_none());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = CompilationContext::new(make_test_schema());
        ctx.diagnostics.push(Diagnostic::warning("test", "just a warning"));
        ctx.diagnostics.push(Diagnostic::info("test", "just info"));

        assert!(!ctx.has_errors());

        ctx.diagnostics.push(Diagnostic::error("test", "test error"));

        assert!(ctx.has_errors());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.errors().next().map(|d| d.message.as_str()), Some("test error"));
    }

    #[test]
    fn test_take_ir_before_lowering() {
        let mut ctx = CompilationContext::new(make_test_schema());
        let err = ctx.take_ir().unwrap_err();
        assert!(err.to_string().contains("widget.db"));
    }
}
