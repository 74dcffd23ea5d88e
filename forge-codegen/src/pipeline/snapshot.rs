//! Pipeline snapshot plugin for debugging.
//!
//! Captures the compilation state after each phase so the parsed table, the
//! lowered IR and the diagnostics can be inspected as JSON.

use std::{
    fs,
    path::{Path, PathBuf},
};

use cqlforge_ir::TableIR;
use cqlforge_schema::TableSchema;
use eyre::{Result, WrapErr};
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};

/// A snapshot of the pipeline state at a specific phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    /// The phase that just completed.
    pub phase: String,

    /// The parsed table.
    pub schema: TableSchema,

    /// The table IR (available after "lower" phase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ir: Option<TableIR>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

impl PhaseSnapshot {
    /// File name of this snapshot: `<class>.<phase>.json`.
    pub fn file_name(&self) -> String {
        format!("{}.{}.json", self.schema.class_name, self.phase)
    }
}

/// A plugin that writes the pipeline state after each phase as JSON.
///
/// One plugin can observe several tables; each gets its own files.
///
/// ```ignore
/// let snapshots = SnapshotPlugin::with_output_dir(".cqlforge/debug");
/// let pipeline = Pipeline::new().plugin(snapshots);
/// let ctx = pipeline.run(table)?;
/// ```
pub struct SnapshotPlugin {
    output_dir: PathBuf,
}

impl SnapshotPlugin {
    /// Create a snapshot plugin that writes into `output_dir`.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    let path = dir.join(snapshot.file_name());
    fs::create_dir_all(dir).wrap_err_with(|| format!("failed to create {}", dir.display()))?;
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            schema: ctx.schema.clone(),
            ir: ctx.ir.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };
        write_snapshot(&self.output_dir, &snapshot)
    }
}
