//! Validate phase - runs lints on the parsed table.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{EmptyTableLint, FieldCollisionLint, SkippedClauseLint};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the parsed table using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(FieldCollisionLint),
                Box::new(SkippedClauseLint),
                Box::new(EmptyTableLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check the parsed table and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.schema, &mut ctx.diagnostics);
        }

        // Fail if there are any errors (warnings are allowed)
        if ctx.has_errors() {
            let first = ctx.errors().next().map(ToString::to_string).unwrap_or_default();
            bail!(
                "validation of {} failed with {} error(s); first: {}",
                ctx.schema.source,
                ctx.error_count(),
                first
            );
        }

        Ok(())
    }
}
