//! Compilation pipeline for code generation.
//!
//! This module provides a [`Pipeline`] orchestrator that takes one parsed
//! table through the compilation phases. The pipeline provides:
//!
//! - Explicit phase boundaries (validate → lower)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//!
//! # Example
//!
//! ```ignore
//! use cqlforge_codegen::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new();
//! let ctx = pipeline.run(table)?;
//!
//! for diag in &ctx.diagnostics {
//!     if matches!(diag.severity, Severity::Warning) {
//!         eprintln!("warning: {}", diag.message);
//!     }
//! }
//!
//! let generator = Generator::from_context(ctx, "com.example")?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
