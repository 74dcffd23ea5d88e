//! Pipeline plugin trait for extensibility.

use eyre::Result;

use super::CompilationContext;

/// A plugin that can hook into the compilation pipeline.
///
/// Plugins receive callbacks before and after each phase runs, allowing
/// them to inspect or modify the compilation context.
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
