//! Pipeline orchestrator.

use cqlforge_schema::TableSchema;
use eyre::Result;
use tracing::debug;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{LowerPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// The pipeline runs the validate and lower phases in order, calling plugin
/// hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(MyPlugin::new());
/// let ctx = pipeline.run(table)?;
/// ```
pub struct Pipeline {
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with no plugins.
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on one parsed table.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - runs lints, fails on any error diagnostic
    /// 2. LowerPhase - resolves the table into IR
    ///
    /// Plugin hooks are called before and after each phase.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, schema: TableSchema) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(schema);

        let phases: [&dyn Phase; 2] = [&ValidatePhase::new(), &LowerPhase];
        for phase in phases {
            self.run_phase(phase, &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        debug!(phase = phase_name, source = %ctx.schema.source, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
