//! Intermediate representation types for the cqlforge code generator.
//!
//! These types are the single source of truth the generators read from.
//!
//! # Architecture
//!
//! ```text
//! table statement → cqlforge-schema (parsing) → cqlforge-ir (lowered table) → codegen
//! ```
//!
//! The IR is produced once per table by the lowering phase and is never
//! mutated afterwards.

mod table;

pub use table::{ClassIdentity, FieldPlan, TableIR};
