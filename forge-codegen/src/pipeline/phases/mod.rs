//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`ValidatePhase`] - runs lints over the parsed table
//! - [`LowerPhase`] - transforms the parsed table into table IR

mod lower;
mod validate;

pub use lower::{LowerPhase, lower_table};
pub use validate::{EmptyTableLint, FieldCollisionLint, Lint, SkippedClauseLint, ValidatePhase};
