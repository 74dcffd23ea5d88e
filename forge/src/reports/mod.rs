//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod bake;
mod check;
mod export;
mod output;
mod types;

pub use bake::{BakeReport, GenerationResult, PreviewResult, TableSummary, WrittenResult};
pub use check::{CheckReport, CheckedTable};
pub use export::ExportReport;
pub use output::{Report, TerminalOutput};
pub use types::{TypeRow, TypesReport};
